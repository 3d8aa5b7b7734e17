// Pipeline: normalization, orchestration and the run summary

pub mod normalize;
pub mod orchestrator;
pub mod summary;

pub use normalize::{LocationNormalizer, NormalizationOutcome, NormalizerUtils, Rejection};
pub use orchestrator::Orchestrator;
pub use summary::RunSummary;
