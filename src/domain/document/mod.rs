//! Document module - Planning documents and their structural decomposition.
//!
//! A planning document is plain markdown. Analysis only needs two levels of
//! structure from it:
//! - `SectionMap` - level-two headings (`## Title`) and the body under each
//! - `Paragraphs` - blank-line separated prose blocks inside a section body,
//!   with fenced and indented code blocks dropped

mod paragraphs;
mod plan_document;
mod sections;

pub use paragraphs::{segment_paragraphs, Paragraph, Paragraphs};
pub use plan_document::PlanDocument;
pub use sections::{split_sections, Section, SectionMap};
