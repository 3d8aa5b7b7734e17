use crate::common::constants::TOURISM_SITES_SOURCE;
use crate::common::error::Result;
use crate::common::types::{LocationSource, RawLocation};
use crate::sources::base::EmbeddedSource;

const TOURISM_SITES_DATA: &str = include_str!("../../data/tourism_sites.json");

/// Workshops listed on Egyptian tourism and cultural sites.
///
/// Serves sample data compiled into the binary. A network-backed source can
/// replace it behind [`LocationSource`] without touching the normalizer or exporters.
pub struct TourismSitesSource {
    inner: EmbeddedSource,
}

impl Default for TourismSitesSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TourismSitesSource {
    pub fn new() -> Self {
        Self {
            inner: EmbeddedSource::new(TOURISM_SITES_SOURCE, TOURISM_SITES_DATA),
        }
    }
}

impl LocationSource for TourismSitesSource {
    fn source_name(&self) -> &'static str {
        TOURISM_SITES_SOURCE
    }

    fn fetch_batch(&self) -> Result<Vec<RawLocation>> {
        self.inner.fetch_batch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tourism_sites_batch() {
        let batch = TourismSitesSource::new().fetch_batch().unwrap();
        assert_eq!(batch.len(), 6);
        assert_eq!(batch[0]["name"], "Potters Village, Fustat");
        assert_eq!(batch[5]["name"], "Aswan Nubian Handicrafts Center");
    }
}
