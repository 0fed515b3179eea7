//! Application configuration module
//!
//! Type-safe, layered configuration using the `config` and `dotenvy` crates.
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. An optional config file (TOML, YAML or JSON, chosen by extension)
//! 3. Environment variables with the `PLAN_SCOUT` prefix, nested with `__`
//!
//! # Example
//!
//! ```no_run
//! use plan_scout::config::AppConfig;
//!
//! let config = AppConfig::load(None).expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Candidate threshold: {}", config.engine.min_candidate_score);
//! ```

mod completeness;
mod engine;
mod error;
mod logging;

pub use completeness::CompletenessConfig;
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use std::path::Path;

use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PLAN_SCOUT";

/// Separator between nesting levels in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Candidate scoring, ranking and classification
    #[serde(default)]
    pub engine: EngineConfig,

    /// Completeness checklist
    #[serde(default)]
    pub completeness: CompletenessConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads `config_file` if given (it must exist)
    /// 3. Reads environment variables with `PLAN_SCOUT` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PLAN_SCOUT__ENGINE__MIN_CANDIDATE_SCORE=8` -> `engine.min_candidate_score = 8`
    /// - `PLAN_SCOUT__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `PLAN_SCOUT__ENGINE__CROSS_CUTTING_SECTIONS=architecture,data model`
    ///   -> a two-element list
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The config file is missing or malformed
    /// - Values cannot be parsed into expected types
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("engine.cross_cutting_sections"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Non-zero weights, thresholds and lengths
    /// - Non-empty, pairwise disjoint lexicons
    /// - Compilable placeholder patterns
    /// - A parsable log filter directive
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.completeness.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("PLAN_SCOUT__ENGINE__MIN_CANDIDATE_SCORE");
        env::remove_var("PLAN_SCOUT__ENGINE__WEIGHTS__IMPACT");
        env::remove_var("PLAN_SCOUT__ENGINE__CROSS_CUTTING_SECTIONS");
        env::remove_var("PLAN_SCOUT__LOGGING__FORMAT");
        env::remove_var("PLAN_SCOUT__LOGGING__LEVEL");
    }

    fn write_config(extension: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{}", extension))
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load(None);

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.min_candidate_score, 6);
        assert_eq!(config.engine.weights.impact, 3);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_validate_default_config() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLAN_SCOUT__ENGINE__MIN_CANDIDATE_SCORE", "8");
        env::set_var("PLAN_SCOUT__ENGINE__WEIGHTS__IMPACT", "4");
        env::set_var("PLAN_SCOUT__LOGGING__FORMAT", "json");
        let result = AppConfig::load(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.min_candidate_score, 8);
        assert_eq!(config.engine.weights.impact, 4);
        assert_eq!(config.engine.weights.decision, 1);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_environment_list_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var(
            "PLAN_SCOUT__ENGINE__CROSS_CUTTING_SECTIONS",
            "architecture,data model",
        );
        let result = AppConfig::load(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.engine.cross_cutting_sections,
            vec!["architecture", "data model"]
        );
    }

    #[test]
    fn test_load_from_toml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = write_config(
            "toml",
            r#"
[engine]
min_candidate_score = 9

[engine.lexicon]
impact = ["kafka", "postgres"]

[completeness]
required_sections = ["Summary"]
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.engine.min_candidate_score, 9);
        assert_eq!(config.engine.lexicon.impact, vec!["kafka", "postgres"]);
        assert_eq!(config.completeness.required_sections, vec!["Summary"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_beats_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let file = write_config("yaml", "engine:\n  min_candidate_score: 9\n");
        env::set_var("PLAN_SCOUT__ENGINE__MIN_CANDIDATE_SCORE", "7");
        let result = AppConfig::load(Some(file.path()));
        clear_env();

        assert_eq!(result.unwrap().engine.min_candidate_score, 7);
    }

    #[test]
    fn test_validate_rejects_oversized_weight_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PLAN_SCOUT__ENGINE__WEIGHTS__IMPACT", "2000000000");
        let result = AppConfig::load(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.weights.impact, 2_000_000_000);
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidEngine(_))
        ));
    }

    #[test]
    fn test_missing_config_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load(Some(Path::new("/nonexistent/plan-scout.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_overlapping_lexicon_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = write_config(
            "json",
            r#"{ "engine": { "lexicon": { "tradeoffs": ["cost", "queue"] } } }"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidEngine(_))
        ));
    }
}
