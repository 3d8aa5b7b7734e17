use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::common::error::{Result, ScraperError};
use crate::common::types::{LocationSource, RawLocation};
use crate::observability::metrics;

/// Source backed by a JSON document compiled into the binary.
///
/// The document must be an array of objects; anything else is a pipeline failure.
pub struct EmbeddedSource {
    source_name: &'static str,
    document: &'static str,
}

impl EmbeddedSource {
    pub fn new(source_name: &'static str, document: &'static str) -> Self {
        Self {
            source_name,
            document,
        }
    }
}

impl LocationSource for EmbeddedSource {
    fn source_name(&self) -> &'static str {
        self.source_name
    }

    #[instrument(skip(self), fields(source = self.source_name))]
    fn fetch_batch(&self) -> Result<Vec<RawLocation>> {
        let locations = parse_batch(self.source_name, self.document)?;
        metrics::sources::records_fetched(self.source_name, locations.len());
        info!(
            "Successfully fetched {} locations from {}",
            locations.len(),
            self.source_name
        );
        Ok(locations)
    }
}

/// Decode a JSON array document into raw location maps
pub fn parse_batch(source_name: &str, document: &str) -> Result<Vec<RawLocation>> {
    let data: Value = serde_json::from_str(document)?;
    let items = match data {
        Value::Array(items) => items,
        other => {
            return Err(ScraperError::InvalidBatch {
                source_name: source_name.to_string(),
                message: format!("expected a JSON array, found {}", json_kind(&other)),
            })
        }
    };

    let mut locations = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => locations.push(map),
            other => {
                return Err(ScraperError::InvalidBatch {
                    source_name: source_name.to_string(),
                    message: format!("item {} is {}, not an object", index, json_kind(&other)),
                })
            }
        }
    }
    debug!("Decoded {} raw locations for {}", locations.len(), source_name);
    Ok(locations)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
