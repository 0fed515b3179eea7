//! Candidate filter and ranker.

use super::candidate::{Candidate, ScoredParagraph};

/// Default minimum total score for a paragraph to become a candidate.
pub const DEFAULT_MIN_CANDIDATE_SCORE: u32 = 6;

/// Default preview length in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Keeps paragraphs at or above a score threshold and orders them by score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateRanker {
    min_score: u32,
    preview_chars: usize,
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CANDIDATE_SCORE, DEFAULT_PREVIEW_CHARS)
    }
}

impl CandidateRanker {
    pub fn new(min_score: u32, preview_chars: usize) -> Self {
        Self {
            min_score,
            preview_chars,
        }
    }

    /// Returns the minimum total score a candidate needs.
    pub fn min_score(&self) -> u32 {
        self.min_score
    }

    /// Returns true if a paragraph with this total would be retained.
    pub fn qualifies(&self, total: u32) -> bool {
        total >= self.min_score
    }

    /// Filters and ranks scored paragraphs.
    ///
    /// Input order must be document traversal order (section order, then
    /// paragraph index). Output is sorted by total score, highest first; the
    /// sort is stable, so equal totals keep traversal order.
    pub fn rank<I>(&self, scored: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = ScoredParagraph>,
    {
        let mut candidates: Vec<Candidate> = scored
            .into_iter()
            .filter(|p| self.qualifies(p.score.total()))
            .map(|p| Candidate::from_scored(p, self.preview_chars))
            .collect();

        candidates.sort_by(|a, b| b.total().cmp(&a.total()));
        candidates
    }
}
