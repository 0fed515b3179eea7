//! Foundation module - Shared domain primitives.
//!
//! Contains the error types used when domain services are built from
//! configuration.

mod errors;

pub use errors::ValidationError;
