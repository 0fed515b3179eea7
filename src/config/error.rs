//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError as RuleError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid engine configuration: {0}")]
    InvalidEngine(#[source] RuleError),

    #[error("Invalid completeness configuration: {0}")]
    InvalidCompleteness(#[source] RuleError),

    #[error("Invalid log level directive '{directive}': {reason}")]
    InvalidLogLevel { directive: String, reason: String },
}
