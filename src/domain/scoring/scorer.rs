//! Scorer - Multi-factor lexical scoring of a single paragraph.
//!
//! Each category's sub-score is the number of *distinct* lexicon terms that
//! occur in the paragraph times the category weight. A term repeated ten
//! times counts once, so breadth of signal beats repetition.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::lexicon::{Category, Lexicon};

/// Points earned per distinct matching term, per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub decision: u32,
    pub alternatives: u32,
    pub tradeoffs: u32,
    pub impact: u32,
}

impl CategoryWeights {
    /// Returns the weight of a category.
    pub fn weight(&self, category: Category) -> u32 {
        match category {
            Category::Decision => self.decision,
            Category::Alternatives => self.alternatives,
            Category::Tradeoffs => self.tradeoffs,
            Category::Impact => self.impact,
        }
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            decision: Category::Decision.default_weight(),
            alternatives: Category::Alternatives.default_weight(),
            tradeoffs: Category::Tradeoffs.default_weight(),
            impact: Category::Impact.default_weight(),
        }
    }
}

/// Four category sub-scores of one paragraph.
///
/// The total is always derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub decision: u32,
    pub alternatives: u32,
    pub tradeoffs: u32,
    pub impact: u32,
}

impl Score {
    /// Returns the sub-score of a category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Decision => self.decision,
            Category::Alternatives => self.alternatives,
            Category::Tradeoffs => self.tradeoffs,
            Category::Impact => self.impact,
        }
    }

    /// Returns the sum of all sub-scores.
    pub fn total(&self) -> u32 {
        self.decision
            .saturating_add(self.alternatives)
            .saturating_add(self.tradeoffs)
            .saturating_add(self.impact)
    }

    /// Returns true if no lexicon term matched.
    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    fn set(&mut self, category: Category, value: u32) {
        match category {
            Category::Decision => self.decision = value,
            Category::Alternatives => self.alternatives = value,
            Category::Tradeoffs => self.tradeoffs = value,
            Category::Impact => self.impact = value,
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Score", 5)?;
        state.serialize_field("decision", &self.decision)?;
        state.serialize_field("alternatives", &self.alternatives)?;
        state.serialize_field("tradeoffs", &self.tradeoffs)?;
        state.serialize_field("impact", &self.impact)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

/// A lexicon term found in a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedTerm {
    pub category: Category,
    pub term: String,
}

/// Stateless paragraph scorer over a lexicon and category weights.
#[derive(Debug, Clone)]
pub struct Scorer {
    lexicon: Lexicon,
    weights: CategoryWeights,
}

impl Scorer {
    pub fn new(lexicon: Lexicon, weights: CategoryWeights) -> Self {
        Self { lexicon, weights }
    }

    /// Scorer over the default lexicon and weights.
    pub fn standard() -> Self {
        Self::new(Lexicon::standard().clone(), CategoryWeights::default())
    }

    /// Returns the lexicon this scorer matches against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the category weights.
    pub fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Scores one paragraph. Empty text scores zero in every category.
    pub fn score(&self, text: &str) -> Score {
        let mut score = Score::default();
        for category in Category::ALL {
            let distinct = self.lexicon.matching_terms(category, text).count();
            let distinct = u32::try_from(distinct).unwrap_or(u32::MAX);
            score.set(category, distinct.saturating_mul(self.weights.weight(category)));
        }
        score
    }

    /// Lists every distinct term that contributed to the score, grouped by category.
    pub fn matched_terms(&self, text: &str) -> Vec<MatchedTerm> {
        Category::ALL
            .iter()
            .flat_map(|&category| {
                self.lexicon
                    .matching_terms(category, text)
                    .map(move |term| MatchedTerm {
                        category,
                        term: term.to_string(),
                    })
            })
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
