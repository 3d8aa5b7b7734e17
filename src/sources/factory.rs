use crate::common::constants::*;
use crate::common::types::LocationSource;
use crate::sources::{BusinessDirectoriesSource, TourismSitesSource};

/// Factory function to create sources by name
pub fn create_source(source_name: &str) -> Option<Box<dyn LocationSource>> {
    match source_name {
        TOURISM_SITES_SOURCE => Some(Box::new(TourismSitesSource::new())),
        BUSINESS_DIRECTORIES_SOURCE => Some(Box::new(BusinessDirectoriesSource::new())),
        _ => None,
    }
}

/// Every supported source, tourism sites first
pub fn default_sources() -> Vec<Box<dyn LocationSource>> {
    get_supported_sources()
        .into_iter()
        .filter_map(create_source)
        .collect()
}
