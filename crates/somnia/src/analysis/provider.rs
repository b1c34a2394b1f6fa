use super::domain::SleepInput;
use super::report::SleepReport;
use super::scoring::compute_sleep_report;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Strategy seam between the deterministic local engine and any remote
/// generative backend producing the same report shape. Callers inject
/// the provider; there is no shared state behind it.
pub trait AnalysisProvider: Send + Sync {
    fn analyze(&self, input: &SleepInput) -> Result<SleepReport, AnalysisError>;

    /// Which backend produced the report, echoed to consumers.
    fn source(&self) -> AnalysisSource;
}

/// Identifies the backend a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Local,
    Remote,
}

impl AnalysisSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

/// Failures a report producer can surface. The local engine never
/// raises these; a remote backend raises them for transport faults or
/// payloads that do not match the report contract.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis backend unavailable: {0}")]
    Unavailable(String),
    #[error("analysis backend returned a malformed report: {0}")]
    MalformedReport(String),
}

/// In-process deterministic provider wrapping [`compute_sleep_report`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalAnalysisProvider;

impl AnalysisProvider for LocalAnalysisProvider {
    fn analyze(&self, input: &SleepInput) -> Result<SleepReport, AnalysisError> {
        let report = compute_sleep_report(input);
        debug!(
            score = report.score,
            label = report.quality_label.label(),
            "computed sleep quality report"
        );
        Ok(report)
    }

    fn source(&self) -> AnalysisSource {
        AnalysisSource::Local
    }
}
