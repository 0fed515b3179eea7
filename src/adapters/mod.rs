//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document` - Filesystem plan reader
//! - `report` - Text, JSON and YAML report renderers

pub mod document;
pub mod report;

pub use document::LocalPlanDocumentReader;
pub use report::{StructuredFormat, StructuredReportRenderer, TextReportRenderer};
