//! Exporters: each serializes the normalized locations into one external format.
//!
//! Exporters only read the records and each writes to its own file, so they can
//! run in any order.

pub mod json;
pub mod tabular;
pub mod typescript;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, info_span, warn};

use crate::common::error::Result;
use crate::common::types::LocationRecord;
use crate::config::ExportConfig;
use crate::observability::metrics;

pub use json::JsonExporter;
pub use tabular::CsvExporter;
pub use typescript::TypeScriptExporter;

pub trait Exporter: Send + Sync {
    /// Short format label used in logs and metrics
    fn format_name(&self) -> &'static str;

    /// Destination file, overwritten on every export
    fn output_path(&self) -> &Path;

    /// Serialize the records into the file contents
    fn render(&self, records: &[LocationRecord]) -> Result<String>;

    /// Whether an empty record list still produces a file
    fn writes_empty(&self) -> bool {
        true
    }

    /// Render and write the file. Returns the path written, or None when nothing was written.
    fn export(&self, records: &[LocationRecord]) -> Result<Option<PathBuf>> {
        let _span = info_span!("export", format = self.format_name()).entered();
        if records.is_empty() && !self.writes_empty() {
            warn!("No locations to export, skipping {}", self.output_path().display());
            return Ok(None);
        }

        let start = Instant::now();
        let content = self.render(records)?;
        write_output(self.output_path(), &content)?;
        metrics::export::file_written(self.format_name(), content.len());
        metrics::export::duration(self.format_name(), start.elapsed().as_secs_f64());

        info!("Data saved to {}", self.output_path().display());
        Ok(Some(self.output_path().to_path_buf()))
    }
}

/// The JSON, CSV and TypeScript exporters, in that order
pub fn default_exporters(config: &ExportConfig) -> Vec<Box<dyn Exporter>> {
    vec![
        Box::new(JsonExporter::new(config.json_path())),
        Box::new(CsvExporter::new(config.csv_path())),
        Box::new(TypeScriptExporter::new(config.typescript_path())),
    ]
}

/// Write a file, creating its parent directory if needed
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}
