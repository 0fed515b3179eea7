//! Scoring Module - Decision-candidate detection over plan text.
//!
//! Text flows one way: sections, then paragraphs, then per-paragraph scores,
//! then ranked candidates with a significance verdict and a suggested title.
//!
//! # Components
//!
//! - `Lexicon` - Four disjoint term sets (decision, alternatives, tradeoffs, impact)
//! - `Scorer` - Distinct-term counting times per-category weight
//! - `CandidateRanker` - Threshold filter plus stable descending sort
//! - `SignificanceClassifier` - Impact, alternatives and cross-cutting tests
//! - `TitleSuggester` - Short decision title from the paragraph text
//! - `CandidateEngine` - Runs the whole pipeline for one document
//!
//! Everything here is pure; no I/O happens below the application layer.

mod candidate;
mod classifier;
mod engine;
mod lexicon;
mod ranker;
mod report;
mod scorer;
mod title;

pub use candidate::{preview, Candidate, ScoredParagraph, ELLIPSIS};
pub use classifier::{
    Assessment, Predicate, SignificanceClassifier, Verdict, DEFAULT_ALTERNATIVES_THRESHOLD,
    DEFAULT_CROSS_CUTTING_SECTIONS, DEFAULT_IMPACT_THRESHOLD,
};
pub use engine::{
    CandidateAnalysis, CandidateEngine, CandidateSummary, EngineSettings, RankedCandidate,
    MAX_CATEGORY_WEIGHT,
};
pub use lexicon::{Category, Lexicon, LexiconTerms, TermPattern};
pub use ranker::{CandidateRanker, DEFAULT_MIN_CANDIDATE_SCORE, DEFAULT_PREVIEW_CHARS};
pub use report::CandidateReport;
pub use scorer::{CategoryWeights, MatchedTerm, Score, Scorer};
pub use title::{TitleSuggester, DEFAULT_TITLE_MAX_CHARS};
