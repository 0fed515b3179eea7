//! Candidate - A paragraph scored high enough to be reviewed as a decision.

use serde::Serialize;

use super::scorer::{MatchedTerm, Score};

/// Marker appended to a preview that was cut short.
pub const ELLIPSIS: &str = "...";

/// One paragraph of the document with its score, before any threshold is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredParagraph {
    pub section: String,
    pub paragraph_index: usize,
    pub text: String,
    pub score: Score,
    pub matched_terms: Vec<MatchedTerm>,
}

/// A paragraph retained for review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Title of the section the paragraph came from.
    pub section: String,

    /// 0-based position of the paragraph within its section.
    pub paragraph_index: usize,

    /// First characters of the paragraph, ellipsised if truncated.
    pub preview: String,

    pub score: Score,

    /// Distinct lexicon terms behind the score.
    pub matched_terms: Vec<MatchedTerm>,

    /// Full paragraph text.
    #[serde(skip)]
    pub text: String,
}

impl Candidate {
    /// Builds a candidate from a scored paragraph, truncating the preview to `preview_chars`.
    pub fn from_scored(scored: ScoredParagraph, preview_chars: usize) -> Self {
        Self {
            preview: preview(&scored.text, preview_chars),
            section: scored.section,
            paragraph_index: scored.paragraph_index,
            score: scored.score,
            matched_terms: scored.matched_terms,
            text: scored.text,
        }
    }

    /// Returns the total score.
    pub fn total(&self) -> u32 {
        self.score.total()
    }
}

/// Returns the first `max_chars` characters of `text`, plus an ellipsis if anything was cut.
///
/// Counts characters, not bytes, so multi-byte text is never split mid-character.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(preview("short", 200), "short");
    }

    #[test]
    fn text_of_exact_length_is_not_truncated() {
        let text = "a".repeat(200);
        assert_eq!(preview(&text, 200), text);
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let text = "b".repeat(250);
        let result = preview(&text, 200);
        assert_eq!(result.len(), 203);
        assert!(result.ends_with("..."));
        assert!(result.starts_with(&"b".repeat(200)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(10);
        assert_eq!(preview(&text, 3), "ééé...");
    }

    #[test]
    fn from_scored_keeps_full_text_and_location() {
        let scored = ScoredParagraph {
            section: "Architecture".to_string(),
            paragraph_index: 3,
            text: "x".repeat(300),
            score: Score::default(),
            matched_terms: vec![],
        };
        let candidate = Candidate::from_scored(scored, 200);

        assert_eq!(candidate.section, "Architecture");
        assert_eq!(candidate.paragraph_index, 3);
        assert_eq!(candidate.text.len(), 300);
        assert_eq!(candidate.preview.chars().count(), 203);
    }
}
