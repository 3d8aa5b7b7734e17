// Location sources. Each one supplies a single ordered batch of raw records.
pub mod base;
pub mod business_directories;
pub mod factory;
pub mod tourism_sites;

pub use base::EmbeddedSource;
pub use business_directories::BusinessDirectoriesSource;
pub use factory::{create_source, default_sources};
pub use tourism_sites::TourismSitesSource;
