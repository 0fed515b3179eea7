//! Candidate engine configuration

use serde::Deserialize;

use crate::domain::scoring::{
    CandidateEngine, CategoryWeights, EngineSettings, LexiconTerms, DEFAULT_ALTERNATIVES_THRESHOLD,
    DEFAULT_CROSS_CUTTING_SECTIONS, DEFAULT_IMPACT_THRESHOLD, DEFAULT_MIN_CANDIDATE_SCORE,
    DEFAULT_PREVIEW_CHARS, DEFAULT_TITLE_MAX_CHARS,
};

use super::error::ValidationError;

/// Scoring, ranking and classification parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Trigger terms per category; categories left out keep their defaults
    #[serde(default)]
    pub lexicon: LexiconTerms,

    /// Points per distinct matching term, per category
    #[serde(default)]
    pub weights: CategoryWeights,

    /// Minimum total score for a paragraph to be reported
    #[serde(default = "default_min_candidate_score")]
    pub min_candidate_score: u32,

    /// Minimum impact sub-score for the impact test
    #[serde(default = "default_impact_threshold")]
    pub impact_threshold: u32,

    /// Minimum alternatives sub-score for the alternatives test
    #[serde(default = "default_alternatives_threshold")]
    pub alternatives_threshold: u32,

    /// Section-title fragments that count as cross-cutting
    #[serde(default = "default_cross_cutting_sections")]
    pub cross_cutting_sections: Vec<String>,

    /// Preview length in characters
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Suggested title length in characters
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

impl EngineConfig {
    /// Converts into domain settings.
    pub fn to_settings(&self) -> EngineSettings {
        EngineSettings {
            lexicon: self.lexicon.clone(),
            weights: self.weights,
            min_candidate_score: self.min_candidate_score,
            impact_threshold: self.impact_threshold,
            alternatives_threshold: self.alternatives_threshold,
            cross_cutting_sections: self.cross_cutting_sections.clone(),
            preview_chars: self.preview_chars,
            title_max_chars: self.title_max_chars,
        }
    }

    /// Builds the engine described by this configuration.
    pub fn build_engine(&self) -> Result<CandidateEngine, ValidationError> {
        CandidateEngine::new(self.to_settings()).map_err(ValidationError::InvalidEngine)
    }

    /// Validate engine configuration, including the lexicon
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.build_engine().map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lexicon: LexiconTerms::default(),
            weights: CategoryWeights::default(),
            min_candidate_score: default_min_candidate_score(),
            impact_threshold: default_impact_threshold(),
            alternatives_threshold: default_alternatives_threshold(),
            cross_cutting_sections: default_cross_cutting_sections(),
            preview_chars: default_preview_chars(),
            title_max_chars: default_title_max_chars(),
        }
    }
}

fn default_min_candidate_score() -> u32 {
    DEFAULT_MIN_CANDIDATE_SCORE
}

fn default_impact_threshold() -> u32 {
    DEFAULT_IMPACT_THRESHOLD
}

fn default_alternatives_threshold() -> u32 {
    DEFAULT_ALTERNATIVES_THRESHOLD
}

fn default_cross_cutting_sections() -> Vec<String> {
    DEFAULT_CROSS_CUTTING_SECTIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}
