//! Application handlers.
//!
//! Query handlers that load a plan through the reader port and run a domain
//! service over it.

pub mod plan;

pub use plan::{
    CheckCompletenessHandler, CheckCompletenessQuery, ExtractCandidatesHandler,
    ExtractCandidatesQuery, ReviewPlanHandler, ReviewPlanQuery,
};
