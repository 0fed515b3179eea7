//! Plan Scout - Planning document triage
//!
//! Checks markdown planning documents for completeness gaps and surfaces
//! paragraphs that read like architectural decisions worth recording.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
