use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

use crate::common::types::LocationRecord;

/// Result of a complete pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    /// Locations fetched from all sources before normalization
    pub raw_count: usize,
    pub rejected_count: usize,
    pub total_locations: usize,
    /// Location counts per governorate, sorted by name
    pub by_governorate: BTreeMap<String, usize>,
    /// Location counts per individual handicraft type, sorted by name.
    /// A location counts once for each of its types.
    pub by_handicraft_type: BTreeMap<String, usize>,
    pub output_files: Vec<PathBuf>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl RunSummary {
    pub fn from_records(
        run_id: Uuid,
        raw_count: usize,
        records: &[LocationRecord],
        output_files: Vec<PathBuf>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let (by_governorate, by_handicraft_type) = group_counts(records);
        Self {
            run_id,
            raw_count,
            rejected_count: raw_count.saturating_sub(records.len()),
            total_locations: records.len(),
            by_governorate,
            by_handicraft_type,
            output_files,
            started_at,
            completed_at: Utc::now(),
        }
    }

    pub fn duration(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }
}

/// Count locations per governorate and per handicraft type
pub fn group_counts(
    records: &[LocationRecord],
) -> (BTreeMap<String, usize>, BTreeMap<String, usize>) {
    let mut by_governorate = BTreeMap::new();
    let mut by_handicraft_type = BTreeMap::new();
    for record in records {
        *by_governorate.entry(record.governorate.clone()).or_insert(0) += 1;
        for craft in &record.handicraft_types {
            *by_handicraft_type.entry(craft.clone()).or_insert(0) += 1;
        }
    }
    (by_governorate, by_handicraft_type)
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SCRAPING SUMMARY ===")?;
        writeln!(f, "Total locations: {}", self.total_locations)?;

        writeln!(f)?;
        writeln!(f, "Locations by Governorate:")?;
        for (governorate, count) in &self.by_governorate {
            writeln!(f, "  {}: {}", governorate, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Handicraft Types:")?;
        for (craft, count) in &self.by_handicraft_type {
            writeln!(f, "  {}: {}", craft, count)?;
        }
        Ok(())
    }
}
