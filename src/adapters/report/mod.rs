//! Report adapters - Implementations of the ReportRenderer port.
//!
//! - `TextReportRenderer` - Human-readable terminal output
//! - `StructuredReportRenderer` - JSON or YAML for other tools

mod structured_renderer;
mod text_renderer;

pub use structured_renderer::{StructuredFormat, StructuredReportRenderer};
pub use text_renderer::TextReportRenderer;
