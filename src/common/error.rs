use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid batch from {source_name}: {message}")]
    InvalidBatch {
        source_name: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ScraperError>;
