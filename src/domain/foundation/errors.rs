//! Error types for the domain layer.
//!
//! The analysis itself is total over any input text; the only failures the
//! domain can produce come from building its matchers out of configuration.

use thiserror::Error;

/// Errors raised while turning configured terms and patterns into matchers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min}, got {actual}")]
    BelowMinimum { field: String, min: u32, actual: u32 },

    #[error("Field '{field}' must be at most {max}, got {actual}")]
    AboveMaximum { field: String, max: u32, actual: u32 },

    #[error("Pattern '{pattern}' is not a valid regular expression: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Term '{term}' appears in both the {first} and {second} lexicons")]
    DuplicateTerm {
        term: String,
        first: String,
        second: String,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a below-minimum validation error.
    pub fn below_minimum(field: impl Into<String>, min: u32, actual: u32) -> Self {
        ValidationError::BelowMinimum {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates an above-maximum validation error.
    pub fn above_maximum(field: impl Into<String>, max: u32, actual: u32) -> Self {
        ValidationError::AboveMaximum {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an invalid pattern error from a regex build failure.
    pub fn invalid_pattern(pattern: impl Into<String>, err: &regex::Error) -> Self {
        ValidationError::InvalidPattern {
            pattern: pattern.into(),
            reason: err.to_string(),
        }
    }

    /// Creates a duplicate term error naming both owning lexicons.
    pub fn duplicate_term(
        term: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        ValidationError::DuplicateTerm {
            term: term.into(),
            first: first.into(),
            second: second.into(),
        }
    }
}
