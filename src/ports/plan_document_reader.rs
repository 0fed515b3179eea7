//! Plan Document Reader Port - Loads planning documents for analysis.
//!
//! The domain never touches the filesystem. Application handlers depend on
//! this trait, while adapters (like LocalPlanDocumentReader) provide the
//! implementation.

use std::path::Path;

use thiserror::Error;

use crate::domain::document::PlanDocument;

/// Port for loading a plan document by path.
///
/// # Contract
///
/// Implementations must:
/// - Return the full text decoded as UTF-8
/// - Fingerprint the text with a SHA-256 hex checksum
/// - Map a missing file to `ReadError::NotFound` so callers can report it
/// - Refuse files above their size limit instead of loading them
///
/// # Usage
///
/// ```rust,ignore
/// let reader: &dyn PlanDocumentReader = get_reader();
/// let document = reader.read(Path::new("specs/001-auth/plan.md"))?;
/// println!("{} ({})", document.source, document.checksum);
/// ```
pub trait PlanDocumentReader: Send + Sync {
    /// Reads and fingerprints the document at `path`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing exists at `path`
    /// - `PermissionDenied` if the file cannot be opened
    /// - `FileTooLarge` if the file exceeds the reader's limit
    /// - `InvalidEncoding` if the content is not UTF-8
    /// - `Io` for any other read failure
    fn read(&self, path: &Path) -> Result<PlanDocument, ReadError>;
}

/// Errors from reading a plan document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// File was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// File is too large.
    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },

    /// Content is not valid UTF-8.
    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    /// IO error during the read.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl ReadError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates a file too large error.
    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }

    /// Creates an invalid encoding error.
    pub fn invalid_encoding(path: impl Into<String>) -> Self {
        Self::InvalidEncoding { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Returns true if the document does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
