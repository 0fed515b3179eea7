//! ReviewPlanHandler - Runs the completeness check and candidate extraction
//! over a single read of the plan.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::completeness::CompletenessChecker;
use crate::domain::scoring::CandidateEngine;
use crate::ports::{PlanDocumentReader, ReadError, ReviewReport};

use super::extract_candidates::warn_if_unconventional;

/// Query to review a plan file.
#[derive(Debug, Clone)]
pub struct ReviewPlanQuery {
    pub path: PathBuf,
}

/// Handler for the combined plan review.
pub struct ReviewPlanHandler {
    reader: Arc<dyn PlanDocumentReader>,
    checker: Arc<CompletenessChecker>,
    engine: Arc<CandidateEngine>,
}

impl ReviewPlanHandler {
    pub fn new(
        reader: Arc<dyn PlanDocumentReader>,
        checker: Arc<CompletenessChecker>,
        engine: Arc<CandidateEngine>,
    ) -> Self {
        Self {
            reader,
            checker,
            engine,
        }
    }

    pub fn handle(&self, query: ReviewPlanQuery) -> Result<ReviewReport, ReadError> {
        let document = self.reader.read(&query.path)?;
        warn_if_unconventional(&document);

        let review = ReviewReport {
            completeness: self.checker.report(&document),
            candidates: self.engine.report(&document),
        };
        info!(
            source = %document.source,
            passed = review.passed(),
            candidates = review.candidates.summary.total,
            "Reviewed plan"
        );

        Ok(review)
    }
}
