//! Completeness Module - Checklist validation of a planning document.
//!
//! A plan is complete when it has every required section, no template
//! placeholders, a filled-in Technical Context and a Project Structure with
//! the unused layout options removed.

mod checker;
mod rules;

pub use checker::{CompletenessChecker, CompletenessFindings, CompletenessReport, PlaceholderHit};
pub use rules::{
    CompletenessRules, DEFAULT_PLACEHOLDER_PATTERNS, DEFAULT_RECOMMENDED_SECTIONS,
    DEFAULT_REQUIRED_SECTIONS, DEFAULT_TECHNICAL_CONTEXT_FIELDS,
};
