//! Completeness rules - What a finished plan must contain.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Section names every plan must have.
pub const DEFAULT_REQUIRED_SECTIONS: &[&str] = &[
    "Summary",
    "Technical Context",
    "Constitution Check",
    "Project Structure",
];

/// Section names a plan should have.
pub const DEFAULT_RECOMMENDED_SECTIONS: &[&str] = &["Complexity Tracking"];

/// Template markers that mean a plan still has blanks to fill.
pub const DEFAULT_PLACEHOLDER_PATTERNS: &[&str] = &[
    r"\[TODO[:\]]",
    r"\[FEATURE\]",
    r"\[DATE\]",
    r"\[###-feature-name\]",
    r"NEEDS CLARIFICATION",
    r"\[ACTION REQUIRED\]",
    r"\[Option \d+:",
];

/// Field labels the Technical Context section must mention.
pub const DEFAULT_TECHNICAL_CONTEXT_FIELDS: &[&str] = &[
    "Language/Version",
    "Primary Dependencies",
    "Testing",
    "Target Platform",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Configurable checklist for the completeness checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletenessRules {
    pub required_sections: Vec<String>,
    pub recommended_sections: Vec<String>,

    /// Regular expressions, matched case-insensitively over the whole document.
    pub placeholder_patterns: Vec<String>,

    pub technical_context_fields: Vec<String>,
}

impl Default for CompletenessRules {
    fn default() -> Self {
        Self {
            required_sections: owned(DEFAULT_REQUIRED_SECTIONS),
            recommended_sections: owned(DEFAULT_RECOMMENDED_SECTIONS),
            placeholder_patterns: owned(DEFAULT_PLACEHOLDER_PATTERNS),
            technical_context_fields: owned(DEFAULT_TECHNICAL_CONTEXT_FIELDS),
        }
    }
}

impl CompletenessRules {
    /// Compiles the placeholder patterns in order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` for a blank pattern and `InvalidPattern` for one
    /// that does not compile.
    pub fn compile_placeholders(&self) -> Result<Vec<Regex>, ValidationError> {
        self.placeholder_patterns
            .iter()
            .map(|pattern| {
                if pattern.trim().is_empty() {
                    return Err(ValidationError::empty_field("placeholder_patterns"));
                }
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| ValidationError::invalid_pattern(pattern.as_str(), &e))
            })
            .collect()
    }

    /// Checks that no section name or field label is blank and every pattern compiles.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let named = [
            ("required_sections", &self.required_sections),
            ("recommended_sections", &self.recommended_sections),
            ("technical_context_fields", &self.technical_context_fields),
        ];
        for (field, values) in named {
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(ValidationError::empty_field(field));
            }
        }
        self.compile_placeholders().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_valid() {
        assert!(CompletenessRules::default().validate().is_ok());
    }

    #[test]
    fn default_placeholders_compile_case_insensitively() {
        let patterns = CompletenessRules::default().compile_placeholders().unwrap();
        assert_eq!(patterns.len(), 7);
        assert!(patterns[0].is_match("[todo: fill]"));
        assert!(patterns[4].is_match("needs clarification"));
    }

    #[test]
    fn broken_placeholder_is_rejected() {
        let rules = CompletenessRules {
            placeholder_patterns: vec!["[unclosed".to_string()],
            ..CompletenessRules::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(ValidationError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn blank_section_name_is_rejected() {
        let rules = CompletenessRules {
            required_sections: vec!["Summary".to_string(), " ".to_string()],
            ..CompletenessRules::default()
        };
        assert_eq!(
            rules.validate().unwrap_err(),
            ValidationError::empty_field("required_sections")
        );
    }
}
