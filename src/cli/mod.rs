//! Command line interface.
//!
//! Parses arguments with `clap`, layers flag overrides on top of the loaded
//! configuration, wires adapters into the application handlers and prints the
//! rendered report on stdout. The CLI only routes; analysis lives in the
//! domain layer.

pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crate::adapters::LocalPlanDocumentReader;
use crate::application::{
    CheckCompletenessHandler, CheckCompletenessQuery, ExtractCandidatesHandler,
    ExtractCandidatesQuery, ReviewPlanHandler, ReviewPlanQuery,
};
use crate::config::AppConfig;
use crate::ports::PlanDocumentReader;
use crate::telemetry;

pub use commands::{CandidatesArgs, CheckArgs, Commands, LogFormatArg, OutputFormat};

/// Exit status when the completeness check finds issues.
pub const EXIT_INCOMPLETE: u8 = 1;

/// Exit status when the run itself fails (unreadable plan, bad configuration).
pub const EXIT_ERROR: u8 = 2;

/// Top-level arguments
#[derive(Parser, Debug)]
#[command(
    name = "plan-scout",
    version,
    about = "Check planning documents for gaps and surface architectural decisions worth recording."
)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `plan_scout=debug` (overrides logging.level)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format (overrides logging.format)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Loads configuration, applies flag overrides and validates the result.
    fn load_config(&self) -> Result<AppConfig> {
        let mut config =
            AppConfig::load(self.config.as_deref()).context("Failed to load configuration")?;

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format.into();
        }
        if let Commands::Candidates(args) | Commands::Review(args) = &self.command {
            if let Some(min_score) = args.min_score {
                config.engine.min_candidate_score = min_score;
            }
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    /// Runs the selected subcommand and returns the process exit status.
    pub fn run(self) -> Result<ExitCode> {
        let config = self.load_config()?;
        telemetry::init_logging(&config.logging);

        let reader: Arc<dyn PlanDocumentReader> = Arc::new(LocalPlanDocumentReader::new());

        match self.command {
            Commands::Candidates(args) => {
                let engine = Arc::new(config.engine.build_engine()?);
                let handler = ExtractCandidatesHandler::new(reader, engine);
                let report = handler
                    .handle(ExtractCandidatesQuery {
                        path: args.plan.clone(),
                    })
                    .with_context(|| format!("Could not analyse {}", args.plan.display()))?;

                print!("{}", args.format.renderer().render_candidates(&report)?);
                Ok(ExitCode::SUCCESS)
            }
            Commands::Check(args) => {
                let checker = Arc::new(config.completeness.build_checker()?);
                let handler = CheckCompletenessHandler::new(reader, checker);
                let report = handler
                    .handle(CheckCompletenessQuery {
                        path: args.plan.clone(),
                    })
                    .with_context(|| format!("Could not check {}", args.plan.display()))?;

                print!("{}", args.format.renderer().render_completeness(&report)?);
                Ok(completeness_exit(report.passed()))
            }
            Commands::Review(args) => {
                let checker = Arc::new(config.completeness.build_checker()?);
                let engine = Arc::new(config.engine.build_engine()?);
                let handler = ReviewPlanHandler::new(reader, checker, engine);
                let review = handler
                    .handle(ReviewPlanQuery {
                        path: args.plan.clone(),
                    })
                    .with_context(|| format!("Could not review {}", args.plan.display()))?;

                print!("{}", args.format.renderer().render_review(&review)?);
                Ok(completeness_exit(review.passed()))
            }
        }
    }
}

fn completeness_exit(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INCOMPLETE)
    }
}
