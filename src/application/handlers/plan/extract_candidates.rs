//! ExtractCandidatesHandler - Query handler for ranked decision candidates.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::document::PlanDocument;
use crate::domain::scoring::{CandidateEngine, CandidateReport};
use crate::ports::{PlanDocumentReader, ReadError};

/// Query to extract decision candidates from a plan file.
#[derive(Debug, Clone)]
pub struct ExtractCandidatesQuery {
    pub path: PathBuf,
}

/// Handler for extracting decision candidates.
pub struct ExtractCandidatesHandler {
    reader: Arc<dyn PlanDocumentReader>,
    engine: Arc<CandidateEngine>,
}

impl ExtractCandidatesHandler {
    pub fn new(reader: Arc<dyn PlanDocumentReader>, engine: Arc<CandidateEngine>) -> Self {
        Self { reader, engine }
    }

    pub fn handle(&self, query: ExtractCandidatesQuery) -> Result<CandidateReport, ReadError> {
        let document = self.reader.read(&query.path)?;
        warn_if_unconventional(&document);

        let report = self.engine.report(&document);
        info!(
            source = %report.source,
            candidates = report.summary.total,
            high_priority = report.summary.passes_all,
            "Extracted decision candidates"
        );

        Ok(report)
    }
}

/// Plans are expected to be named `plan.md`; anything else still gets analysed.
pub(crate) fn warn_if_unconventional(document: &PlanDocument) {
    if !document.is_conventionally_named() {
        warn!(source = %document.source, "Expected a file named 'plan.md'");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::Verdict;
    use std::path::Path;

    struct MockPlanReader {
        content: Option<String>,
    }

    impl MockPlanReader {
        fn with_content(content: &str) -> Self {
            Self {
                content: Some(content.to_string()),
            }
        }

        fn empty() -> Self {
            Self { content: None }
        }
    }

    impl PlanDocumentReader for MockPlanReader {
        fn read(&self, path: &Path) -> Result<PlanDocument, ReadError> {
            match &self.content {
                Some(content) => Ok(PlanDocument::new(
                    path.display().to_string(),
                    "checksum",
                    content.clone(),
                )),
                None => Err(ReadError::not_found(path.display().to_string())),
            }
        }
    }

    fn handler(reader: MockPlanReader) -> ExtractCandidatesHandler {
        ExtractCandidatesHandler::new(Arc::new(reader), Arc::new(CandidateEngine::standard()))
    }

    fn query(path: &str) -> ExtractCandidatesQuery {
        ExtractCandidatesQuery {
            path: PathBuf::from(path),
        }
    }

    #[test]
    fn returns_ranked_candidates() {
        let reader = MockPlanReader::with_content(
            "## Architecture\n\n\
             We chose a message queue instead of synchronous calls due to cost.\n",
        );

        let report = handler(reader).handle(query("specs/plan.md")).unwrap();

        assert_eq!(report.source, "specs/plan.md");
        assert_eq!(report.candidates.len(), 1);
        assert_eq!(report.candidates[0].assessment.verdict, Verdict::PassesAll);
    }

    #[test]
    fn zero_candidates_is_success() {
        let reader = MockPlanReader::with_content("## Summary\n\nThe button color is blue.\n");

        let report = handler(reader).handle(query("plan.md")).unwrap();

        assert!(report.is_empty());
        assert_eq!(report.summary.total, 0);
    }

    #[test]
    fn unconventional_name_is_still_analysed() {
        let reader = MockPlanReader::with_content("## Summary\n\nText.\n");
        assert!(handler(reader).handle(query("design.md")).is_ok());
    }

    #[test]
    fn returns_not_found_when_file_does_not_exist() {
        let result = handler(MockPlanReader::empty()).handle(query("missing/plan.md"));
        assert!(matches!(result, Err(ReadError::NotFound { .. })));
    }
}
