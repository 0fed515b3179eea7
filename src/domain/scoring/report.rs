//! Candidate report - Ranked candidates tied to the document version they came from.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::document::PlanDocument;

use super::engine::{CandidateAnalysis, CandidateEngine, CandidateSummary, RankedCandidate};

/// Everything a presentation layer needs to show the candidates of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateReport {
    pub source: String,

    /// SHA-256 hex digest of the analysed text.
    pub checksum: String,

    pub generated_at: DateTime<Utc>,
    pub candidates: Vec<RankedCandidate>,
    pub summary: CandidateSummary,
}

impl CandidateReport {
    /// Wraps an analysis with the identity of its document.
    pub fn new(
        document: &PlanDocument,
        analysis: CandidateAnalysis,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source: document.source.clone(),
            checksum: document.checksum.clone(),
            generated_at,
            candidates: analysis.candidates,
            summary: analysis.summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl CandidateEngine {
    /// Analyses a document and stamps the result with the current time.
    pub fn report(&self, document: &PlanDocument) -> CandidateReport {
        CandidateReport::new(document, self.analyze(&document.content), Utc::now())
    }
}
