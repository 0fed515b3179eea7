//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every operation here is a read: plans are analysed, never modified.

pub mod handlers;

pub use handlers::{
    CheckCompletenessHandler, CheckCompletenessQuery, ExtractCandidatesHandler,
    ExtractCandidatesQuery, ReviewPlanHandler, ReviewPlanQuery,
};
