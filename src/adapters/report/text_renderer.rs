//! Plain-text report renderer for terminals.

use std::fmt::{self, Write};

use crate::domain::completeness::{CompletenessFindings, CompletenessReport};
use crate::domain::scoring::{CandidateReport, RankedCandidate};
use crate::ports::{RenderError, ReportRenderer, ReviewReport};

const RULE_WIDTH: usize = 72;
const PASS: &str = "✓";
const FAIL: &str = "✗";

/// Renders reports as human-readable text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportRenderer;

impl TextReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn rule(out: &mut String, ch: char) -> fmt::Result {
        writeln!(out, "{}", ch.to_string().repeat(RULE_WIDTH))
    }

    fn write_candidate(out: &mut String, ranked: &RankedCandidate) -> fmt::Result {
        let candidate = &ranked.candidate;
        let score = &candidate.score;

        writeln!(out, "{}. {}", ranked.rank, ranked.assessment.rationale)?;
        writeln!(
            out,
            "   Section: {} (paragraph {})",
            candidate.section, candidate.paragraph_index
        )?;
        writeln!(out, "   Suggested title: {}", ranked.suggested_title)?;
        writeln!(
            out,
            "   Score: {} (decision={}, alternatives={}, tradeoffs={}, impact={})",
            score.total(),
            score.decision,
            score.alternatives,
            score.tradeoffs,
            score.impact
        )?;
        writeln!(out, "   Preview: {}", candidate.preview)?;
        writeln!(out)
    }

    fn write_candidates(out: &mut String, report: &CandidateReport) -> fmt::Result {
        writeln!(out, "Decision candidates: {}", report.source)?;
        writeln!(out, "Checksum: {}", report.checksum)?;
        Self::rule(out, '=')?;
        writeln!(out)?;

        if report.is_empty() {
            writeln!(out, "No decision candidates found.")?;
            writeln!(out)?;
            writeln!(out, "This could mean:")?;
            writeln!(out, "  - The plan doesn't document architectural decisions")?;
            writeln!(
                out,
                "  - Decisions are made but not documented with alternatives or tradeoffs"
            )?;
            return writeln!(out, "  - The plan is still in early stages");
        }

        writeln!(out, "Found {} decision candidates:", report.summary.total)?;
        writeln!(out)?;
        for ranked in &report.candidates {
            Self::write_candidate(out, ranked)?;
        }

        Self::rule(out, '=')?;
        writeln!(
            out,
            "Summary: {} high-priority candidates, {} lower-priority",
            report.summary.passes_all, report.summary.others
        )?;
        writeln!(out)?;
        Self::write_next_steps(out)
    }

    fn write_next_steps(out: &mut String) -> fmt::Result {
        writeln!(out, "Next steps:")?;
        writeln!(out, "  1. Review the likely candidates first")?;
        writeln!(out, "  2. Confirm each one against all three significance tests")?;
        writeln!(
            out,
            "  3. Record confirmed decisions together with the alternatives and tradeoffs"
        )
    }

    fn write_check<T: fmt::Display>(
        out: &mut String,
        ok_line: &str,
        fail_line: &str,
        issues: &[T],
    ) -> fmt::Result {
        if issues.is_empty() {
            writeln!(out, "{} {}", PASS, ok_line)?;
        } else {
            writeln!(out, "{} {}", FAIL, fail_line)?;
            for issue in issues {
                writeln!(out, "  - {}", issue)?;
            }
        }
        writeln!(out)
    }

    fn write_findings(out: &mut String, findings: &CompletenessFindings) -> fmt::Result {
        Self::write_check(
            out,
            "All required sections present",
            "Missing required sections:",
            &findings.missing_sections,
        )?;

        if findings.placeholders.is_empty() {
            writeln!(out, "{} No incomplete placeholders found", PASS)?;
        } else {
            writeln!(out, "{} Incomplete placeholders found:", FAIL)?;
            for hit in &findings.placeholders {
                writeln!(out, "  Line {}: {}", hit.line, hit.text)?;
            }
        }
        writeln!(out)?;

        Self::write_check(
            out,
            "Technical Context complete",
            "Technical Context issues:",
            &findings.technical_context_issues,
        )?;
        Self::write_check(
            out,
            "Project Structure is concrete",
            "Project Structure issues:",
            &findings.project_structure_issues,
        )?;

        if !findings.missing_recommended.is_empty() {
            writeln!(out, "Note: recommended sections not found:")?;
            for name in &findings.missing_recommended {
                writeln!(out, "  - {}", name)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_completeness(out: &mut String, report: &CompletenessReport) -> fmt::Result {
        writeln!(out, "Validating plan: {}", report.source)?;
        Self::rule(out, '-')?;

        Self::write_findings(out, &report.findings)?;

        Self::rule(out, '-')?;
        if report.passed() {
            writeln!(out, "{} Plan validation PASSED", PASS)
        } else {
            writeln!(out, "{} Plan validation FAILED", FAIL)?;
            writeln!(out)?;
            writeln!(
                out,
                "Please address the issues above before finalizing the plan."
            )
        }
    }
}

fn text_error(err: fmt::Error) -> RenderError {
    RenderError::serialization("text", err.to_string())
}

impl ReportRenderer for TextReportRenderer {
    fn render_candidates(&self, report: &CandidateReport) -> Result<String, RenderError> {
        let mut out = String::new();
        Self::write_candidates(&mut out, report).map_err(text_error)?;
        Ok(out)
    }

    fn render_completeness(&self, report: &CompletenessReport) -> Result<String, RenderError> {
        let mut out = String::new();
        Self::write_completeness(&mut out, report).map_err(text_error)?;
        Ok(out)
    }

    fn render_review(&self, report: &ReviewReport) -> Result<String, RenderError> {
        let mut out = String::new();
        Self::write_completeness(&mut out, &report.completeness).map_err(text_error)?;
        out.push('\n');
        Self::write_candidates(&mut out, &report.candidates).map_err(text_error)?;
        Ok(out)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
