//! Suggested decision title for a candidate paragraph.

use once_cell::sync::Lazy;
use regex::Regex;

use super::candidate::ELLIPSIS;
use super::lexicon::{Category, Lexicon};

/// Default maximum title length in characters, ellipsis included.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 80;

/// Characters of the paragraph used by the fallback title.
const FALLBACK_CHARS: usize = 50;

const FALLBACK_PREFIX: &str = "Decision in ";

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]").expect("valid regex"));

static LEADING_ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(we|the|this)\s+").expect("valid regex"));

/// Derives short decision titles from paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleSuggester {
    max_chars: usize,
}

impl Default for TitleSuggester {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE_MAX_CHARS)
    }
}

impl TitleSuggester {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Picks the first sentence that carries a decision term.
    ///
    /// A leading "we", "the" or "this" is dropped and long sentences are
    /// shortened with an ellipsis. Without a decision sentence the title falls
    /// back to "Decision in" followed by the opening of the paragraph.
    pub fn suggest(&self, lexicon: &Lexicon, text: &str) -> String {
        let decision_sentence = SENTENCE_END
            .split(text)
            .find(|sentence| lexicon.any_match(Category::Decision, sentence));

        match decision_sentence {
            Some(sentence) => {
                let sentence = collapse_whitespace(sentence);
                let title = LEADING_ARTICLE.replace(&sentence, "");
                self.shorten(&title)
            }
            None => {
                let opening: String = collapse_whitespace(text)
                    .chars()
                    .take(FALLBACK_CHARS)
                    .collect();
                format!("{}{}{}", FALLBACK_PREFIX, opening, ELLIPSIS)
            }
        }
    }

    fn shorten(&self, title: &str) -> String {
        if title.chars().count() <= self.max_chars {
            return title.to_string();
        }
        let keep = self.max_chars.saturating_sub(ELLIPSIS.len());
        let head: String = title.chars().take(keep).collect();
        format!("{}{}", head, ELLIPSIS)
    }
}

/// Joins lines so wrapped sentences read as one.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
