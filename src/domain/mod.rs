//! Domain layer containing the plan analysis logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error types
//! - `document` - Plan documents, section splitting and paragraph segmentation
//! - `scoring` - Decision-candidate scoring, ranking and classification
//! - `completeness` - Required-section and placeholder checks

pub mod completeness;
pub mod document;
pub mod foundation;
pub mod scoring;
