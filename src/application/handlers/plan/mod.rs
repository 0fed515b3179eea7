//! Plan handlers - Queries over a single planning document.

mod check_completeness;
mod extract_candidates;
mod review_plan;

pub use check_completeness::{CheckCompletenessHandler, CheckCompletenessQuery};
pub use extract_candidates::{ExtractCandidatesHandler, ExtractCandidatesQuery};
pub use review_plan::{ReviewPlanHandler, ReviewPlanQuery};
