//! Metric recording helpers organized by pipeline phase.
//!
//! These go through the `metrics` facade. Nothing is recorded unless the
//! embedding application installs a recorder.

/// Metric names used across the pipeline
pub mod names {
    pub const SOURCES_RECORDS_FETCHED: &str = "handicrafts_sources_records_fetched_total";
    pub const NORMALIZE_RECORDS_ACCEPTED: &str = "handicrafts_normalize_records_accepted_total";
    pub const NORMALIZE_RECORDS_REJECTED: &str = "handicrafts_normalize_records_rejected_total";
    pub const NORMALIZE_BATCH_SIZE: &str = "handicrafts_normalize_batch_size";
    pub const EXPORT_FILES_WRITTEN: &str = "handicrafts_export_files_written_total";
    pub const EXPORT_BYTES_WRITTEN: &str = "handicrafts_export_bytes_written";
    pub const EXPORT_DURATION: &str = "handicrafts_export_duration_seconds";
    pub const PIPELINE_RUNS: &str = "handicrafts_pipeline_runs_total";
    pub const PIPELINE_DURATION: &str = "handicrafts_pipeline_duration_seconds";
}

// ============================================================================
// Sources Metrics
// ============================================================================

pub mod sources {
    use super::names;

    /// Record locations fetched from a source
    pub fn records_fetched(source: &'static str, count: usize) {
        ::metrics::counter!(names::SOURCES_RECORDS_FETCHED, "source" => source).increment(count as u64);
    }
}

// ============================================================================
// Normalize Metrics
// ============================================================================

pub mod normalize {
    use super::names;

    pub fn record_accepted() {
        ::metrics::counter!(names::NORMALIZE_RECORDS_ACCEPTED).increment(1);
    }

    /// Record a dropped record, labelled by the first missing required field
    pub fn record_rejected(missing_field: &'static str) {
        ::metrics::counter!(names::NORMALIZE_RECORDS_REJECTED, "missing_field" => missing_field)
            .increment(1);
    }

    pub fn batch_size(size: usize) {
        ::metrics::histogram!(names::NORMALIZE_BATCH_SIZE).record(size as f64);
    }
}

// ============================================================================
// Export Metrics
// ============================================================================

pub mod export {
    use super::names;

    pub fn file_written(format: &'static str, bytes: usize) {
        ::metrics::counter!(names::EXPORT_FILES_WRITTEN, "format" => format).increment(1);
        ::metrics::histogram!(names::EXPORT_BYTES_WRITTEN, "format" => format).record(bytes as f64);
    }

    pub fn duration(format: &'static str, secs: f64) {
        ::metrics::histogram!(names::EXPORT_DURATION, "format" => format).record(secs);
    }
}

// ============================================================================
// Pipeline Metrics
// ============================================================================

pub mod pipeline {
    use super::names;

    pub fn run_completed(success: bool, secs: f64) {
        let outcome = if success { "success" } else { "failure" };
        ::metrics::counter!(names::PIPELINE_RUNS, "outcome" => outcome).increment(1);
        ::metrics::histogram!(names::PIPELINE_DURATION).record(secs);
    }
}
