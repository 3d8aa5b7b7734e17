use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::Exporter;
use crate::common::error::{Result, ScraperError};
use crate::common::types::LocationRecord;

/// Separator used when flattening list fields into a single cell
pub const LIST_SEPARATOR: &str = ", ";

/// CSV table, one row per location.
///
/// Columns follow the first record's field order, then any further keys in the
/// order they first appear. List fields are joined with `", "`.
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Exporter for CsvExporter {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn output_path(&self) -> &Path {
        &self.path
    }

    fn writes_empty(&self) -> bool {
        false
    }

    fn render(&self, records: &[LocationRecord]) -> Result<String> {
        let rows = records
            .iter()
            .map(to_row)
            .collect::<Result<Vec<Map<String, Value>>>>()?;
        let headers = column_names(&rows);

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&headers)?;
        for row in &rows {
            writer.write_record(headers.iter().map(|column| cell_text(row.get(column))))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ScraperError::Io(e.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

fn to_row(record: &LocationRecord) -> Result<Map<String, Value>> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// Union of keys across rows, in order of first appearance
fn column_names(rows: &[Map<String, Value>]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        Some(other) => other.to_string(),
    }
}
