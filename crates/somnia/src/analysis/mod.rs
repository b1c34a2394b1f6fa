//! Sleep quality analysis: the deterministic Sleep Quality Index
//! engine, its typed input/output contracts, and the provider seam a
//! remote generative backend can slot into.

pub mod domain;
pub mod provider;
pub mod report;
pub(crate) mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    CaffeineIntake, Pillar, QualityLabel, RoomTemperature, SleepEnvironment, SleepInput,
};
pub use provider::{AnalysisError, AnalysisProvider, AnalysisSource, LocalAnalysisProvider};
pub use report::{PillarBreakdown, SleepReport};
pub use scoring::compute_sleep_report;
