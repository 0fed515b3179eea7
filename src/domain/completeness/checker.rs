//! Completeness checker - Verifies a plan against its checklist.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::domain::document::{split_sections, PlanDocument, SectionMap};
use crate::domain::foundation::ValidationError;

use super::rules::CompletenessRules;

const TECHNICAL_CONTEXT: &str = "technical context";
const PROJECT_STRUCTURE: &str = "project structure";

/// Unchosen layout alternatives left in the Project Structure section.
static OPTION_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"Option \d+:").expect("valid regex"));

static REMOVE_IF_UNUSED: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\[REMOVE IF UNUSED\]")
        .case_insensitive(true)
        .build()
        .expect("valid regex")
});

/// A placeholder found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderHit {
    /// Pattern that matched.
    pub pattern: String,

    /// Matched text as written in the document.
    pub text: String,

    /// 1-based line number of the match.
    pub line: usize,
}

/// Issues found by each check. An empty list means the check passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletenessFindings {
    pub missing_sections: Vec<String>,

    /// Advisory only; never fails the check.
    pub missing_recommended: Vec<String>,

    pub placeholders: Vec<PlaceholderHit>,
    pub technical_context_issues: Vec<String>,
    pub project_structure_issues: Vec<String>,
}

impl CompletenessFindings {
    /// Returns true if every blocking check passed.
    pub fn passed(&self) -> bool {
        self.missing_sections.is_empty()
            && self.placeholders.is_empty()
            && self.technical_context_issues.is_empty()
            && self.project_structure_issues.is_empty()
    }

    /// Number of blocking issues.
    pub fn issue_count(&self) -> usize {
        self.missing_sections.len()
            + self.placeholders.len()
            + self.technical_context_issues.len()
            + self.project_structure_issues.len()
    }
}

/// Completeness findings tied to the document version they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub source: String,
    pub checksum: String,
    pub generated_at: DateTime<Utc>,
    pub passed: bool,

    #[serde(flatten)]
    pub findings: CompletenessFindings,
}

impl CompletenessReport {
    pub fn new(
        document: &PlanDocument,
        findings: CompletenessFindings,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            source: document.source.clone(),
            checksum: document.checksum.clone(),
            generated_at,
            passed: findings.passed(),
            findings,
        }
    }

    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// Runs the section, placeholder, Technical Context and Project Structure checks.
#[derive(Debug, Clone)]
pub struct CompletenessChecker {
    rules: CompletenessRules,
    placeholders: Vec<Regex>,
}

impl CompletenessChecker {
    /// Builds a checker, compiling its placeholder patterns.
    pub fn new(rules: CompletenessRules) -> Result<Self, ValidationError> {
        rules.validate()?;
        let placeholders = rules.compile_placeholders()?;
        Ok(Self {
            rules,
            placeholders,
        })
    }

    /// Checker with the default checklist.
    pub fn standard() -> Self {
        let rules = CompletenessRules::default();
        let placeholders = rules
            .compile_placeholders()
            .expect("default placeholder patterns are valid");
        Self {
            rules,
            placeholders,
        }
    }

    pub fn rules(&self) -> &CompletenessRules {
        &self.rules
    }

    /// Checks plan text.
    pub fn check(&self, text: &str) -> CompletenessFindings {
        let sections = split_sections(text);

        let findings = CompletenessFindings {
            missing_sections: missing_names(&sections, &self.rules.required_sections),
            missing_recommended: missing_names(&sections, &self.rules.recommended_sections),
            placeholders: self.find_placeholders(text),
            technical_context_issues: self.technical_context_issues(&sections),
            project_structure_issues: project_structure_issues(&sections),
        };

        debug!(
            passed = findings.passed(),
            issues = findings.issue_count(),
            "Completeness check complete"
        );
        findings
    }

    /// Checks a document and stamps the result with the current time.
    pub fn report(&self, document: &PlanDocument) -> CompletenessReport {
        CompletenessReport::new(document, self.check(&document.content), Utc::now())
    }

    /// Every placeholder match, grouped by pattern in configured order.
    fn find_placeholders(&self, text: &str) -> Vec<PlaceholderHit> {
        self.placeholders
            .iter()
            .flat_map(|regex| {
                regex.find_iter(text).map(move |m| PlaceholderHit {
                    pattern: regex.as_str().to_string(),
                    text: m.as_str().to_string(),
                    line: line_number(text, m.start()),
                })
            })
            .collect()
    }

    fn technical_context_issues(&self, sections: &SectionMap) -> Vec<String> {
        match sections.find_by_title_fragment(TECHNICAL_CONTEXT) {
            None => vec!["Technical Context section not found".to_string()],
            Some(section) => self
                .rules
                .technical_context_fields
                .iter()
                .filter(|field| !section.body.contains(field.as_str()))
                .map(|field| format!("Missing field: {}", field))
                .collect(),
        }
    }
}

impl Default for CompletenessChecker {
    fn default() -> Self {
        Self::standard()
    }
}

/// Names that no heading title contains, ignoring case.
fn missing_names(sections: &SectionMap, names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| {
            let needle = name.to_lowercase();
            !sections
                .titles()
                .any(|title| title.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

fn project_structure_issues(sections: &SectionMap) -> Vec<String> {
    let Some(section) = sections.find_by_title_fragment(PROJECT_STRUCTURE) else {
        return vec!["Project Structure section not found".to_string()];
    };

    let mut issues = Vec::new();
    if OPTION_LABEL.is_match(&section.body) {
        issues.push(
            "Project Structure contains 'Option X:' labels - remove unused options".to_string(),
        );
    }
    if REMOVE_IF_UNUSED.is_match(&section.body) {
        issues.push("Project Structure contains '[REMOVE IF UNUSED]' markers".to_string());
    }
    issues
}

fn line_number(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
