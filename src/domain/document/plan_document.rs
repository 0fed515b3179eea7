//! PlanDocument - Raw planning document text plus where it came from.

use serde::Serialize;

use super::{split_sections, SectionMap};

/// A planning document as handed over by a reader adapter.
///
/// The domain never performs I/O itself; adapters construct this value
/// after reading and fingerprinting the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanDocument {
    /// Path or other human-readable origin of the document.
    pub source: String,

    /// SHA-256 hex digest of `content`.
    pub checksum: String,

    /// Full markdown text.
    #[serde(skip)]
    pub content: String,
}

impl PlanDocument {
    pub fn new(
        source: impl Into<String>,
        checksum: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            checksum: checksum.into(),
            content: content.into(),
        }
    }

    /// Splits the document into its level-two sections.
    pub fn sections(&self) -> SectionMap {
        split_sections(&self.content)
    }

    /// Returns true if the source file is named `plan.md`.
    pub fn is_conventionally_named(&self) -> bool {
        std::path::Path::new(&self.source)
            .file_name()
            .map(|name| name == "plan.md")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_delegates_to_splitter() {
        let doc = PlanDocument::new("plan.md", "abc", "## Summary\n\nShort.\n");
        let sections = doc.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get("Summary").unwrap().body, "Short.");
    }

    #[test]
    fn recognises_plan_md_in_nested_path() {
        let doc = PlanDocument::new("specs/001-auth/plan.md", "abc", "");
        assert!(doc.is_conventionally_named());
    }

    #[test]
    fn other_file_names_are_not_conventional() {
        let doc = PlanDocument::new("notes/design.md", "abc", "");
        assert!(!doc.is_conventionally_named());
    }

    #[test]
    fn serialization_omits_content() {
        let doc = PlanDocument::new("plan.md", "abc", "secret body");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["source"], "plan.md");
        assert_eq!(json["checksum"], "abc");
        assert!(json.get("content").is_none());
    }
}
