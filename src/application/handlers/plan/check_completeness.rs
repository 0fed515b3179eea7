//! CheckCompletenessHandler - Query handler for plan completeness.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::domain::completeness::{CompletenessChecker, CompletenessReport};
use crate::ports::{PlanDocumentReader, ReadError};

use super::extract_candidates::warn_if_unconventional;

/// Query to check a plan file for completeness.
#[derive(Debug, Clone)]
pub struct CheckCompletenessQuery {
    pub path: PathBuf,
}

/// Handler for checking plan completeness.
pub struct CheckCompletenessHandler {
    reader: Arc<dyn PlanDocumentReader>,
    checker: Arc<CompletenessChecker>,
}

impl CheckCompletenessHandler {
    pub fn new(reader: Arc<dyn PlanDocumentReader>, checker: Arc<CompletenessChecker>) -> Self {
        Self { reader, checker }
    }

    pub fn handle(&self, query: CheckCompletenessQuery) -> Result<CompletenessReport, ReadError> {
        let document = self.reader.read(&query.path)?;
        warn_if_unconventional(&document);

        let report = self.checker.report(&document);
        info!(
            source = %report.source,
            passed = report.passed(),
            issues = report.findings.issue_count(),
            "Checked plan completeness"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::PlanDocument;
    use std::path::Path;

    struct MockPlanReader {
        content: Option<String>,
    }

    impl PlanDocumentReader for MockPlanReader {
        fn read(&self, path: &Path) -> Result<PlanDocument, ReadError> {
            self.content
                .as_ref()
                .map(|content| {
                    PlanDocument::new(path.display().to_string(), "abc", content.clone())
                })
                .ok_or_else(|| ReadError::not_found(path.display().to_string()))
        }
    }

    fn handler(content: Option<&str>) -> CheckCompletenessHandler {
        let reader = MockPlanReader {
            content: content.map(str::to_string),
        };
        CheckCompletenessHandler::new(Arc::new(reader), Arc::new(CompletenessChecker::standard()))
    }

    fn query() -> CheckCompletenessQuery {
        CheckCompletenessQuery {
            path: PathBuf::from("plan.md"),
        }
    }

    #[test]
    fn complete_plan_passes() {
        let plan = "\
## Summary\n\nShort.\n\n\
## Technical Context\n\nLanguage/Version: Rust\nPrimary Dependencies: serde\n\
Testing: cargo\nTarget Platform: Linux\n\n\
## Constitution Check\n\nPass.\n\n\
## Project Structure\n\nsrc/\n";

        let report = handler(Some(plan)).handle(query()).unwrap();

        assert!(report.passed(), "{:?}", report.findings);
    }

    #[test]
    fn incomplete_plan_fails() {
        let report = handler(Some("## Summary\n\nNEEDS CLARIFICATION\n"))
            .handle(query())
            .unwrap();

        assert!(!report.passed());
        assert_eq!(report.findings.placeholders.len(), 1);
    }

    #[test]
    fn returns_not_found_when_file_does_not_exist() {
        let result = handler(None).handle(query());
        assert!(matches!(result, Err(ReadError::NotFound { .. })));
    }
}
