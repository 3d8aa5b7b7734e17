use chrono::Utc;
use std::path::PathBuf;
use tracing::{error, info, info_span};
use uuid::Uuid;

use super::normalize::LocationNormalizer;
use super::summary::RunSummary;
use crate::common::error::Result;
use crate::common::types::{LocationSource, RawLocation};
use crate::config::ExportConfig;
use crate::exporters::{default_exporters, Exporter};
use crate::observability::metrics;
use crate::sources::default_sources;

/// Runs sources → normalizer → exporters once and reports what happened.
///
/// Holds no per-run state; every call to [`Orchestrator::run`] is a fresh pass.
pub struct Orchestrator {
    sources: Vec<Box<dyn LocationSource>>,
    normalizer: LocationNormalizer,
    exporters: Vec<Box<dyn Exporter>>,
    config: ExportConfig,
}

impl Orchestrator {
    /// Default sources and the JSON, CSV and TypeScript exporters
    pub fn new(config: ExportConfig) -> Self {
        Self::with_sources(config, default_sources())
    }

    pub fn with_sources(config: ExportConfig, sources: Vec<Box<dyn LocationSource>>) -> Self {
        let exporters = default_exporters(&config);
        Self {
            sources,
            normalizer: LocationNormalizer::new(),
            exporters,
            config,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Run the complete pipeline.
    ///
    /// An exporter failure aborts the run; files written by earlier exporters stay on disk.
    pub fn run(&self) -> Result<RunSummary> {
        let run_id = Uuid::new_v4();
        let span = info_span!("pipeline_run", run_id = %run_id);
        let _enter = span.enter();

        let started_at = Utc::now();
        info!("🚀 Starting handicrafts pipeline");

        let result = self.run_stages(run_id, started_at);
        let secs = (Utc::now() - started_at).num_milliseconds() as f64 / 1000.0;
        metrics::pipeline::run_completed(result.is_ok(), secs);

        match &result {
            Ok(summary) => info!(
                "🎉 Pipeline completed: {} of {} locations exported to {} files",
                summary.total_locations,
                summary.raw_count,
                summary.output_files.len()
            ),
            Err(e) => error!("💥 Pipeline failed: {}", e),
        }
        result
    }

    fn run_stages(&self, run_id: Uuid, started_at: chrono::DateTime<Utc>) -> Result<RunSummary> {
        let raw_locations = self.collect()?;
        let raw_count = raw_locations.len();
        info!("Collected {} locations before cleaning", raw_count);

        let outcome = self.normalizer.normalize(raw_locations);
        info!("Final dataset: {} validated locations", outcome.records.len());

        let mut output_files: Vec<PathBuf> = Vec::new();
        for exporter in &self.exporters {
            if let Some(path) = exporter.export(&outcome.records)? {
                output_files.push(path);
            }
        }

        Ok(RunSummary::from_records(
            run_id,
            raw_count,
            &outcome.records,
            output_files,
            started_at,
        ))
    }

    /// Fetch every source in order and concatenate the batches
    pub fn collect(&self) -> Result<Vec<RawLocation>> {
        let mut all_locations = Vec::new();
        for source in &self.sources {
            info!("Fetching {}", source.source_name());
            let batch = source.fetch_batch()?;
            all_locations.extend(batch);
        }
        Ok(all_locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::ScraperError;
    use serde_json::json;

    struct StaticSource {
        name: &'static str,
        locations: Vec<serde_json::Value>,
    }

    impl LocationSource for StaticSource {
        fn source_name(&self) -> &'static str {
            self.name
        }

        fn fetch_batch(&self) -> Result<Vec<RawLocation>> {
            Ok(self
                .locations
                .iter()
                .filter_map(|v| v.as_object().cloned())
                .collect())
        }
    }

    struct FailingSource;

    impl LocationSource for FailingSource {
        fn source_name(&self) -> &'static str {
            "failing"
        }

        fn fetch_batch(&self) -> Result<Vec<RawLocation>> {
            Err(ScraperError::InvalidBatch {
                source_name: "failing".to_string(),
                message: "unreachable".to_string(),
            })
        }
    }

    #[test]
    fn test_collect_concatenates_in_order() {
        let sources: Vec<Box<dyn LocationSource>> = vec![
            Box::new(StaticSource {
                name: "a",
                locations: vec![json!({"name": "A1"}), json!({"name": "A2"})],
            }),
            Box::new(StaticSource {
                name: "b",
                locations: vec![json!({"name": "B1"})],
            }),
        ];
        let orchestrator = Orchestrator::with_sources(ExportConfig::default(), sources);
        let names: Vec<String> = orchestrator
            .collect()
            .unwrap()
            .iter()
            .map(|loc| loc["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["A1", "A2", "B1"]);
    }

    #[test]
    fn test_run_drops_invalid_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let sources: Vec<Box<dyn LocationSource>> = vec![Box::new(StaticSource {
            name: "inline",
            locations: vec![
                json!({"name": "Fustat", "governorate": "Cairo", "handicraft_types": "Pottery"}),
                json!({"name": "Nameless", "governorate": "Cairo"}),
            ],
        })];
        let orchestrator = Orchestrator::with_sources(ExportConfig::in_dir(dir.path()), sources);
        let summary = orchestrator.run().unwrap();

        assert_eq!(summary.raw_count, 2);
        assert_eq!(summary.rejected_count, 1);
        assert_eq!(summary.total_locations, 1);
        assert_eq!(summary.output_files.len(), 3);
        assert!(summary.output_files.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_source_failure_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let orchestrator = Orchestrator::with_sources(
            ExportConfig::in_dir(dir.path()),
            vec![Box::new(FailingSource)],
        );
        assert!(orchestrator.run().is_err());
        assert!(!dir.path().join("egyptian_handicrafts.json").exists());
    }
}
