//! Lexicon - Named sets of trigger terms, one per scoring category.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Scoring category a lexicon term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Language signalling that a choice was made.
    Decision,
    /// Language signalling that other options were weighed.
    Alternatives,
    /// Language signalling costs and benefits were discussed.
    Tradeoffs,
    /// Areas with architecture-wide consequences.
    Impact,
}

impl Category {
    /// All categories in scoring order.
    pub const ALL: [Category; 4] = [
        Category::Decision,
        Category::Alternatives,
        Category::Tradeoffs,
        Category::Impact,
    ];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Decision => "Decision",
            Category::Alternatives => "Alternatives",
            Category::Tradeoffs => "Tradeoffs",
            Category::Impact => "Impact",
        }
    }

    /// Returns the points one matching term earns in this category by default.
    pub fn default_weight(&self) -> u32 {
        match self {
            Category::Decision => 1,
            Category::Alternatives => 2,
            Category::Tradeoffs => 2,
            Category::Impact => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw term lists, one per category.
///
/// Terms are plain words or phrases, not regular expressions. Each is matched
/// case-insensitively on word boundaries; inner whitespace matches any run of
/// whitespace so phrases survive line wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconTerms {
    pub decision: Vec<String>,
    pub alternatives: Vec<String>,
    pub tradeoffs: Vec<String>,
    pub impact: Vec<String>,
}

impl LexiconTerms {
    /// Returns the terms configured for a category.
    pub fn terms(&self, category: Category) -> &[String] {
        match category {
            Category::Decision => &self.decision,
            Category::Alternatives => &self.alternatives,
            Category::Tradeoffs => &self.tradeoffs,
            Category::Impact => &self.impact,
        }
    }
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

impl Default for LexiconTerms {
    fn default() -> Self {
        Self {
            decision: owned(&[
                "choose", "chose", "chosen", "select", "selected", "decide", "decided",
                "decision", "opt for", "opting", "adopt", "adopted", "use", "using", "employ",
            ]),
            alternatives: owned(&[
                "alternative", "option", "vs", "versus", "instead of", "rather than",
                "considered", "evaluated", "compared", "rejected",
            ]),
            tradeoffs: owned(&[
                "tradeoff", "trade-off", "pros", "cons", "advantage", "disadvantage",
                "benefit", "drawback", "limitation", "cost",
            ]),
            impact: owned(&[
                "architecture", "framework", "database", "auth", "authentication",
                "authorization", "service", "microservice", "monolith", "api", "rest",
                "graphql", "grpc", "deployment", "infrastructure", "cloud", "security",
                "encryption", "caching", "messaging", "event", "queue",
            ]),
        }
    }
}

/// A compiled lexicon term.
#[derive(Debug, Clone)]
pub struct TermPattern {
    term: String,
    regex: Regex,
}

impl TermPattern {
    /// Compiles a term into a case-insensitive whole-word pattern.
    pub fn new(term: &str) -> Result<Self, ValidationError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(ValidationError::empty_field("lexicon term"));
        }

        let body = term
            .split_whitespace()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s+");
        let pattern = format!(r"\b{}\b", body);

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ValidationError::invalid_pattern(&pattern, &e))?;

        Ok(Self {
            term: term.to_string(),
            regex,
        })
    }

    /// Returns the term as configured.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns true if the term occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Four disjoint sets of compiled terms.
#[derive(Debug, Clone)]
pub struct Lexicon {
    decision: Vec<TermPattern>,
    alternatives: Vec<TermPattern>,
    tradeoffs: Vec<TermPattern>,
    impact: Vec<TermPattern>,
}

static STANDARD_LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::new(&LexiconTerms::default()).expect("standard lexicon terms are valid")
});

impl Lexicon {
    /// Compiles term lists into a lexicon.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if a category has no terms or a term is blank
    /// - `DuplicateTerm` if a term (compared case-insensitively) appears twice,
    ///   within one category or across two
    /// - `InvalidPattern` if a term cannot be compiled
    pub fn new(terms: &LexiconTerms) -> Result<Self, ValidationError> {
        let mut owners: HashMap<String, Category> = HashMap::new();

        for category in Category::ALL {
            let list = terms.terms(category);
            if list.is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "lexicon.{}",
                    category.label().to_lowercase()
                )));
            }
            for term in list {
                let key = term.trim().to_lowercase();
                if let Some(first) = owners.insert(key.clone(), category) {
                    return Err(ValidationError::duplicate_term(
                        key,
                        first.label(),
                        category.label(),
                    ));
                }
            }
        }

        let compile = |category: Category| -> Result<Vec<TermPattern>, ValidationError> {
            terms
                .terms(category)
                .iter()
                .map(|t| TermPattern::new(t))
                .collect()
        };

        Ok(Self {
            decision: compile(Category::Decision)?,
            alternatives: compile(Category::Alternatives)?,
            tradeoffs: compile(Category::Tradeoffs)?,
            impact: compile(Category::Impact)?,
        })
    }

    /// Returns the shared lexicon built from the default term lists.
    pub fn standard() -> &'static Lexicon {
        &STANDARD_LEXICON
    }

    /// Returns the compiled terms of a category.
    pub fn patterns(&self, category: Category) -> &[TermPattern] {
        match category {
            Category::Decision => &self.decision,
            Category::Alternatives => &self.alternatives,
            Category::Tradeoffs => &self.tradeoffs,
            Category::Impact => &self.impact,
        }
    }

    /// Returns the number of terms in a category.
    pub fn size(&self, category: Category) -> usize {
        self.patterns(category).len()
    }

    /// Returns the distinct terms of a category that occur in `text`, in lexicon order.
    pub fn matching_terms<'a>(
        &'a self,
        category: Category,
        text: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.patterns(category)
            .iter()
            .filter(move |p| p.is_match(text))
            .map(TermPattern::term)
    }

    /// Returns true if any term of the category occurs in `text`.
    pub fn any_match(&self, category: Category, text: &str) -> bool {
        self.patterns(category).iter().any(|p| p.is_match(text))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
