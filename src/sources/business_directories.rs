use crate::common::constants::BUSINESS_DIRECTORIES_SOURCE;
use crate::common::error::Result;
use crate::common::types::{LocationSource, RawLocation};
use crate::sources::base::EmbeddedSource;

const BUSINESS_DIRECTORIES_DATA: &str = include_str!("../../data/business_directories.json");

/// Artisan workshops listed in business directories
pub struct BusinessDirectoriesSource {
    inner: EmbeddedSource,
}

impl Default for BusinessDirectoriesSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessDirectoriesSource {
    pub fn new() -> Self {
        Self {
            inner: EmbeddedSource::new(BUSINESS_DIRECTORIES_SOURCE, BUSINESS_DIRECTORIES_DATA),
        }
    }
}

impl LocationSource for BusinessDirectoriesSource {
    fn source_name(&self) -> &'static str {
        BUSINESS_DIRECTORIES_SOURCE
    }

    fn fetch_batch(&self) -> Result<Vec<RawLocation>> {
        self.inner.fetch_batch()
    }
}
