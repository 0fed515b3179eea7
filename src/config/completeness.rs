//! Completeness checklist configuration

use serde::Deserialize;

use crate::domain::completeness::{
    CompletenessChecker, CompletenessRules, DEFAULT_PLACEHOLDER_PATTERNS,
    DEFAULT_RECOMMENDED_SECTIONS, DEFAULT_REQUIRED_SECTIONS, DEFAULT_TECHNICAL_CONTEXT_FIELDS,
};

use super::error::ValidationError;

/// Sections, placeholders and fields a finished plan is checked for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompletenessConfig {
    #[serde(default = "default_required_sections")]
    pub required_sections: Vec<String>,

    #[serde(default = "default_recommended_sections")]
    pub recommended_sections: Vec<String>,

    /// Case-insensitive regular expressions
    #[serde(default = "default_placeholder_patterns")]
    pub placeholder_patterns: Vec<String>,

    #[serde(default = "default_technical_context_fields")]
    pub technical_context_fields: Vec<String>,
}

impl CompletenessConfig {
    /// Converts into domain rules.
    pub fn to_rules(&self) -> CompletenessRules {
        CompletenessRules {
            required_sections: self.required_sections.clone(),
            recommended_sections: self.recommended_sections.clone(),
            placeholder_patterns: self.placeholder_patterns.clone(),
            technical_context_fields: self.technical_context_fields.clone(),
        }
    }

    /// Builds the checker described by this configuration.
    pub fn build_checker(&self) -> Result<CompletenessChecker, ValidationError> {
        CompletenessChecker::new(self.to_rules()).map_err(ValidationError::InvalidCompleteness)
    }

    /// Validate completeness configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_rules()
            .validate()
            .map_err(ValidationError::InvalidCompleteness)
    }
}

impl Default for CompletenessConfig {
    fn default() -> Self {
        Self {
            required_sections: default_required_sections(),
            recommended_sections: default_recommended_sections(),
            placeholder_patterns: default_placeholder_patterns(),
            technical_context_fields: default_technical_context_fields(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_required_sections() -> Vec<String> {
    owned(DEFAULT_REQUIRED_SECTIONS)
}

fn default_recommended_sections() -> Vec<String> {
    owned(DEFAULT_RECOMMENDED_SECTIONS)
}

fn default_placeholder_patterns() -> Vec<String> {
    owned(DEFAULT_PLACEHOLDER_PATTERNS)
}

fn default_technical_context_fields() -> Vec<String> {
    owned(DEFAULT_TECHNICAL_CONTEXT_FIELDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completeness_config_defaults_match_rules() {
        assert_eq!(CompletenessConfig::default().to_rules(), CompletenessRules::default());
    }

    #[test]
    fn test_completeness_config_deserialization() {
        let json = r#"{ "required_sections": ["Summary", "Risks"] }"#;

        let config: CompletenessConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.required_sections, vec!["Summary", "Risks"]);
        assert_eq!(config.placeholder_patterns.len(), 7);
    }

    #[test]
    fn test_validation_invalid_placeholder_regex() {
        let config = CompletenessConfig {
            placeholder_patterns: vec!["[TODO".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCompleteness(_))
        ));
        assert!(config.build_checker().is_err());
    }
}
