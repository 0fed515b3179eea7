//! Report Renderer Port - Turns analysis reports into text for people or tools.

use serde::Serialize;
use thiserror::Error;

use crate::domain::completeness::CompletenessReport;
use crate::domain::scoring::CandidateReport;

/// Port for presenting reports.
///
/// # Contract
///
/// Implementations must:
/// - Produce the whole output as one string (callers decide where it goes)
/// - Render an empty candidate list as a valid report, not an error
/// - Be deterministic for a given report
pub trait ReportRenderer: Send + Sync {
    /// Renders ranked decision candidates.
    fn render_candidates(&self, report: &CandidateReport) -> Result<String, RenderError>;

    /// Renders a completeness check.
    fn render_completeness(&self, report: &CompletenessReport) -> Result<String, RenderError>;

    /// Renders both reports for one document.
    fn render_review(&self, report: &ReviewReport) -> Result<String, RenderError>;
}

/// Completeness and candidate reports for the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewReport {
    pub completeness: CompletenessReport,
    pub candidates: CandidateReport,
}

impl ReviewReport {
    /// A review passes when the completeness check passes.
    pub fn passed(&self) -> bool {
        self.completeness.passed()
    }
}

/// Errors from rendering a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The report could not be serialised to the requested format.
    #[error("Failed to serialize report as {format}: {message}")]
    Serialization { format: String, message: String },
}

impl RenderError {
    /// Creates a serialization error.
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renderer_is_object_safe() {
        fn check<T: ReportRenderer + ?Sized>() {}
        check::<dyn ReportRenderer>();
    }

    #[test]
    fn serialization_error_names_format() {
        let err = RenderError::serialization("yaml", "bad value");
        assert_eq!(err.to_string(), "Failed to serialize report as yaml: bad value");
    }
}
