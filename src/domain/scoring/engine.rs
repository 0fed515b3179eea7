//! Candidate engine - Wires section splitting, paragraph segmentation,
//! scoring, ranking and classification into one pass over a document.
//!
//! The engine is immutable once built and holds no per-run state, so a single
//! instance can analyse many documents, concurrently if needed.

use serde::Serialize;
use tracing::debug;

use crate::domain::document::{segment_paragraphs, split_sections};
use crate::domain::foundation::ValidationError;

use super::candidate::{Candidate, ScoredParagraph};
use super::classifier::{
    Assessment, SignificanceClassifier, DEFAULT_ALTERNATIVES_THRESHOLD,
    DEFAULT_CROSS_CUTTING_SECTIONS, DEFAULT_IMPACT_THRESHOLD,
};
use super::lexicon::{Category, Lexicon, LexiconTerms};
use super::ranker::{CandidateRanker, DEFAULT_MIN_CANDIDATE_SCORE, DEFAULT_PREVIEW_CHARS};
use super::scorer::{CategoryWeights, Scorer};
use super::title::{TitleSuggester, DEFAULT_TITLE_MAX_CHARS};

/// Tunable parameters of the candidate engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub lexicon: LexiconTerms,
    pub weights: CategoryWeights,
    pub min_candidate_score: u32,
    pub impact_threshold: u32,
    pub alternatives_threshold: u32,
    pub cross_cutting_sections: Vec<String>,
    pub preview_chars: usize,
    pub title_max_chars: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            lexicon: LexiconTerms::default(),
            weights: CategoryWeights::default(),
            min_candidate_score: DEFAULT_MIN_CANDIDATE_SCORE,
            impact_threshold: DEFAULT_IMPACT_THRESHOLD,
            alternatives_threshold: DEFAULT_ALTERNATIVES_THRESHOLD,
            cross_cutting_sections: DEFAULT_CROSS_CUTTING_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

/// Largest accepted category weight.
pub const MAX_CATEGORY_WEIGHT: u32 = 1_000;

fn as_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl EngineSettings {
    /// Checks the numeric settings. Lexicon checks happen when it is compiled.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for category in Category::ALL {
            let weight = self.weights.weight(category);
            let field = format!("weights.{}", category.label().to_lowercase());
            if weight == 0 {
                return Err(ValidationError::below_minimum(field, 1, weight));
            }
            if weight > MAX_CATEGORY_WEIGHT {
                return Err(ValidationError::above_maximum(
                    field,
                    MAX_CATEGORY_WEIGHT,
                    weight,
                ));
            }
        }

        if self.min_candidate_score == 0 {
            return Err(ValidationError::below_minimum(
                "min_candidate_score",
                1,
                self.min_candidate_score,
            ));
        }

        if !self.cross_cutting_sections.iter().any(|s| !s.trim().is_empty()) {
            return Err(ValidationError::empty_field("cross_cutting_sections"));
        }

        if self.preview_chars == 0 {
            return Err(ValidationError::below_minimum("preview_chars", 1, 0));
        }

        // Room for at least one character before the ellipsis.
        if self.title_max_chars < 4 {
            return Err(ValidationError::below_minimum(
                "title_max_chars",
                4,
                as_u32(self.title_max_chars),
            ));
        }

        Ok(())
    }
}

/// A classified candidate in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub candidate: Candidate,
    pub assessment: Assessment,
    pub suggested_title: String,
}

/// Verdict counts for summary reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CandidateSummary {
    pub total: usize,
    pub passes_all: usize,
    pub others: usize,
}

impl CandidateSummary {
    pub fn from_candidates(candidates: &[RankedCandidate]) -> Self {
        let passes_all = candidates
            .iter()
            .filter(|c| c.assessment.passes_all())
            .count();
        Self {
            total: candidates.len(),
            passes_all,
            others: candidates.len() - passes_all,
        }
    }
}

/// Result of analysing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateAnalysis {
    pub candidates: Vec<RankedCandidate>,
    pub summary: CandidateSummary,
}

/// Finds, ranks and classifies decision candidates in plan text.
#[derive(Debug, Clone)]
pub struct CandidateEngine {
    scorer: Scorer,
    ranker: CandidateRanker,
    classifier: SignificanceClassifier,
    titles: TitleSuggester,
}

impl CandidateEngine {
    /// Builds an engine from settings.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for zero weights or thresholds, an empty
    /// cross-cutting list, or a lexicon that is empty, overlapping or
    /// uncompilable.
    pub fn new(settings: EngineSettings) -> Result<Self, ValidationError> {
        settings.validate()?;
        let lexicon = Lexicon::new(&settings.lexicon)?;

        Ok(Self {
            scorer: Scorer::new(lexicon, settings.weights),
            ranker: CandidateRanker::new(settings.min_candidate_score, settings.preview_chars),
            classifier: SignificanceClassifier::new(
                settings.impact_threshold,
                settings.alternatives_threshold,
                settings.cross_cutting_sections,
            ),
            titles: TitleSuggester::new(settings.title_max_chars),
        })
    }

    /// Engine with every default in place.
    pub fn standard() -> Self {
        Self {
            scorer: Scorer::standard(),
            ranker: CandidateRanker::default(),
            classifier: SignificanceClassifier::default(),
            titles: TitleSuggester::default(),
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn classifier(&self) -> &SignificanceClassifier {
        &self.classifier
    }

    /// Scores every prose paragraph in traversal order, below-threshold ones included.
    pub fn score_document(&self, text: &str) -> Vec<ScoredParagraph> {
        let sections = split_sections(text);
        let mut scored = Vec::new();

        for section in sections.iter() {
            for paragraph in segment_paragraphs(&section.body) {
                let score = self.scorer.score(paragraph.text);
                debug!(
                    section = %section.title,
                    paragraph = paragraph.index,
                    total = score.total(),
                    "Scored paragraph"
                );
                scored.push(ScoredParagraph {
                    section: section.title.clone(),
                    paragraph_index: paragraph.index,
                    text: paragraph.text.to_string(),
                    score,
                    matched_terms: self.scorer.matched_terms(paragraph.text),
                });
            }
        }

        scored
    }

    /// Returns candidates at or above the threshold, highest score first.
    pub fn candidates(&self, text: &str) -> Vec<Candidate> {
        self.ranker.rank(self.score_document(text))
    }

    /// Ranks, classifies and titles every candidate in the document.
    pub fn analyze(&self, text: &str) -> CandidateAnalysis {
        let candidates: Vec<RankedCandidate> = self
            .candidates(text)
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| RankedCandidate {
                rank: i + 1,
                assessment: self.classifier.assess(&candidate),
                suggested_title: self.titles.suggest(self.scorer.lexicon(), &candidate.text),
                candidate,
            })
            .collect();

        let summary = CandidateSummary::from_candidates(&candidates);
        debug!(
            candidates = summary.total,
            passes_all = summary.passes_all,
            "Candidate analysis complete"
        );

        CandidateAnalysis {
            candidates,
            summary,
        }
    }
}

impl Default for CandidateEngine {
    fn default() -> Self {
        Self::standard()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
