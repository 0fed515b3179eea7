//! Document adapters - Implementations for loading plan documents.
//!
//! - `LocalPlanDocumentReader` - Reads plans from the local filesystem

mod local_plan_reader;

pub use local_plan_reader::{LocalPlanDocumentReader, MAX_FILE_SIZE_BYTES};
