//! Egyptian handicrafts marketplace data pipeline.
//!
//! Collects artisan workshop locations from pluggable sources, normalizes them,
//! and exports them as JSON, CSV and a TypeScript data module.

pub mod common;
pub mod config;
pub mod exporters;
pub mod observability;
pub mod pipeline;
pub mod sources;

// Re-export commonly used types
pub use common::error::{Result, ScraperError};
pub use common::types::{LocationRecord, LocationSource, RawLocation};
pub use config::ExportConfig;
pub use pipeline::{Orchestrator, RunSummary};
