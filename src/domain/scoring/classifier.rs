//! Significance classifier - Three-test verdict for a ranked candidate.
//!
//! A decision worth recording usually (1) touches an architecture-wide
//! concern, (2) shows that other options were weighed, and (3) sits in a
//! section that speaks for the whole system rather than one feature. Each
//! test is a plain boolean; the number that fail decides the tier.

use std::fmt;

use serde::Serialize;

use super::candidate::Candidate;

/// Default minimum impact sub-score.
pub const DEFAULT_IMPACT_THRESHOLD: u32 = 3;

/// Default minimum alternatives sub-score.
pub const DEFAULT_ALTERNATIVES_THRESHOLD: u32 = 2;

/// Section-title fragments that mark a section as cross-cutting.
pub const DEFAULT_CROSS_CUTTING_SECTIONS: [&str; 4] = [
    "architecture",
    "technical context",
    "key decisions",
    "interfaces",
];

/// One of the three significance tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Impact,
    Alternatives,
    CrossCutting,
}

impl Predicate {
    /// All predicates in evaluation order.
    pub const ALL: [Predicate; 3] = [
        Predicate::Impact,
        Predicate::Alternatives,
        Predicate::CrossCutting,
    ];

    /// Fixed phrase used in rationales when this predicate fails.
    pub fn phrase(&self) -> &'static str {
        match self {
            Predicate::Impact => "Impact unclear (may be localized)",
            Predicate::Alternatives => "Alternatives not evident",
            Predicate::CrossCutting => "May be feature-specific",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

/// Review tier of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every predicate holds.
    PassesAll,
    /// Exactly one predicate fails.
    PossibleSingleGap,
    /// Two or three predicates fail.
    LowPriority,
}

impl Verdict {
    /// Derives the tier from the number of failed predicates.
    pub fn from_failures(failed: usize) -> Self {
        match failed {
            0 => Verdict::PassesAll,
            1 => Verdict::PossibleSingleGap,
            _ => Verdict::LowPriority,
        }
    }

    /// Short label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::PassesAll => "Likely candidate",
            Verdict::PossibleSingleGap => "Possible candidate",
            Verdict::LowPriority => "Low priority",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of classifying one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub verdict: Verdict,

    /// Predicates that did not hold, in evaluation order.
    pub failed: Vec<Predicate>,

    /// Human-readable verdict line naming every failed predicate.
    pub rationale: String,
}

impl Assessment {
    /// Builds an assessment from the failed predicates.
    pub fn from_failed(failed: Vec<Predicate>) -> Self {
        let verdict = Verdict::from_failures(failed.len());
        let rationale = match verdict {
            Verdict::PassesAll => {
                format!("{} (passes all {} tests)", verdict.label(), Predicate::ALL.len())
            }
            _ => {
                let phrases: Vec<&str> = failed.iter().map(Predicate::phrase).collect();
                format!("{} ({})", verdict.label(), phrases.join("; "))
            }
        };

        Self {
            verdict,
            failed,
            rationale,
        }
    }

    pub fn passes_all(&self) -> bool {
        self.verdict == Verdict::PassesAll
    }
}

/// Applies the impact, alternatives and cross-cutting tests to candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignificanceClassifier {
    impact_threshold: u32,
    alternatives_threshold: u32,
    cross_cutting: Vec<String>,
}

impl Default for SignificanceClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_IMPACT_THRESHOLD,
            DEFAULT_ALTERNATIVES_THRESHOLD,
            DEFAULT_CROSS_CUTTING_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl SignificanceClassifier {
    /// Creates a classifier. Cross-cutting fragments are compared lowercased.
    pub fn new(
        impact_threshold: u32,
        alternatives_threshold: u32,
        cross_cutting: Vec<String>,
    ) -> Self {
        Self {
            impact_threshold,
            alternatives_threshold,
            cross_cutting: cross_cutting
                .into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Returns true if the section title contains a cross-cutting fragment.
    pub fn is_cross_cutting(&self, section_title: &str) -> bool {
        let title = section_title.to_lowercase();
        self.cross_cutting.iter().any(|name| title.contains(name.as_str()))
    }

    /// Evaluates one predicate against a candidate.
    pub fn holds(&self, predicate: Predicate, candidate: &Candidate) -> bool {
        match predicate {
            Predicate::Impact => candidate.score.impact >= self.impact_threshold,
            Predicate::Alternatives => candidate.score.alternatives >= self.alternatives_threshold,
            Predicate::CrossCutting => self.is_cross_cutting(&candidate.section),
        }
    }

    /// Classifies a candidate into exactly one verdict tier.
    pub fn assess(&self, candidate: &Candidate) -> Assessment {
        let failed = Predicate::ALL
            .iter()
            .copied()
            .filter(|&p| !self.holds(p, candidate))
            .collect();
        Assessment::from_failed(failed)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
