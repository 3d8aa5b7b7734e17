use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::{CSV_OUTPUT_FILE, JSON_OUTPUT_FILE, TYPESCRIPT_OUTPUT_FILE};
use crate::common::error::{Result, ScraperError};

/// Where the exporters write their files.
///
/// The binary always runs with [`ExportConfig::default`], writing into the
/// working directory. Loading from TOML is for embedding the pipeline elsewhere.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub json_file: String,
    pub csv_file: String,
    pub typescript_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            json_file: JSON_OUTPUT_FILE.to_string(),
            csv_file: CSV_OUTPUT_FILE.to_string(),
            typescript_file: TYPESCRIPT_OUTPUT_FILE.to_string(),
        }
    }
}

impl ExportConfig {
    /// Default file names under a different directory
    pub fn in_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ExportConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        let names = [
            ("json_file", &self.json_file),
            ("csv_file", &self.csv_file),
            ("typescript_file", &self.typescript_file),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(ScraperError::Config(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file)
    }

    pub fn typescript_path(&self) -> PathBuf {
        self.output_dir.join(&self.typescript_file)
    }
}
