//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PlanDocumentReader` - Loads a plan document and its checksum
//! - `ReportRenderer` - Formats candidate, completeness and review reports

mod plan_document_reader;
mod report_renderer;

pub use plan_document_reader::{PlanDocumentReader, ReadError};
pub use report_renderer::{RenderError, ReportRenderer, ReviewReport};
