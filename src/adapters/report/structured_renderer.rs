//! JSON and YAML report renderer for tools and pipelines.

use serde::Serialize;

use crate::domain::completeness::CompletenessReport;
use crate::domain::scoring::CandidateReport;
use crate::ports::{RenderError, ReportRenderer, ReviewReport};

/// Machine-readable output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuredFormat {
    Json,
    Yaml,
}

impl StructuredFormat {
    pub fn name(&self) -> &'static str {
        match self {
            StructuredFormat::Json => "json",
            StructuredFormat::Yaml => "yaml",
        }
    }
}

/// Serialises reports with serde.
#[derive(Debug, Clone, Copy)]
pub struct StructuredReportRenderer {
    format: StructuredFormat,
}

impl StructuredReportRenderer {
    pub fn new(format: StructuredFormat) -> Self {
        Self { format }
    }

    pub fn json() -> Self {
        Self::new(StructuredFormat::Json)
    }

    pub fn yaml() -> Self {
        Self::new(StructuredFormat::Yaml)
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, RenderError> {
        let rendered = match self.format {
            StructuredFormat::Json => {
                serde_json::to_string_pretty(value).map_err(|e| e.to_string())
            }
            StructuredFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        };
        rendered
            .map(|mut s| {
                if !s.ends_with('\n') {
                    s.push('\n');
                }
                s
            })
            .map_err(|message| RenderError::serialization(self.format.name(), message))
    }
}

impl ReportRenderer for StructuredReportRenderer {
    fn render_candidates(&self, report: &CandidateReport) -> Result<String, RenderError> {
        self.render(report)
    }

    fn render_completeness(&self, report: &CompletenessReport) -> Result<String, RenderError> {
        self.render(report)
    }

    fn render_review(&self, report: &ReviewReport) -> Result<String, RenderError> {
        self.render(report)
    }
}
