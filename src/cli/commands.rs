//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::adapters::{StructuredReportRenderer, TextReportRenderer};
use crate::config::LogFormat;
use crate::ports::ReportRenderer;

/// The three ways to look at a plan
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank paragraphs that look like architectural decisions worth recording
    Candidates(CandidatesArgs),

    /// Check the plan for missing sections and unfilled placeholders
    Check(CheckArgs),

    /// Run the completeness check and the candidate ranking together
    Review(CandidatesArgs),
}

/// Arguments for `candidates` and `review`
#[derive(Args, Debug)]
pub struct CandidatesArgs {
    /// Path to the plan document (usually plan.md)
    pub plan: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Minimum total score for a paragraph to be reported
    /// (overrides engine.min_candidate_score)
    #[arg(long)]
    pub min_score: Option<u32>,
}

/// Arguments for `check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the plan document (usually plan.md)
    pub plan: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Report output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Returns the renderer for this format.
    pub fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            OutputFormat::Text => Box::new(TextReportRenderer::new()),
            OutputFormat::Json => Box::new(StructuredReportRenderer::json()),
            OutputFormat::Yaml => Box::new(StructuredReportRenderer::yaml()),
        }
    }
}

/// Log output format flag
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
