//! Local Filesystem Reader Adapter - Implementation of PlanDocumentReader.
//!
//! Reads plan documents straight from disk and fingerprints them with a
//! SHA-256 checksum so reports can name the exact version analysed.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::domain::document::PlanDocument;
use crate::ports::{PlanDocumentReader, ReadError};

/// Maximum file size allowed (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Reads plan documents from the local filesystem.
///
/// # Usage
///
/// ```rust,ignore
/// let reader = LocalPlanDocumentReader::new();
/// let document = reader.read(Path::new("specs/001-auth/plan.md"))?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalPlanDocumentReader {
    max_file_size: u64,
}

impl Default for LocalPlanDocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalPlanDocumentReader {
    /// Creates a reader with the default size limit.
    pub fn new() -> Self {
        Self::with_max_file_size(MAX_FILE_SIZE_BYTES)
    }

    /// Creates a reader that refuses files larger than `max_file_size` bytes.
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Computes SHA-256 checksum of the given content.
    pub fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn map_io_error(path: &Path, err: std::io::Error) -> ReadError {
        match err.kind() {
            ErrorKind::NotFound => ReadError::not_found(path.display().to_string()),
            ErrorKind::PermissionDenied => ReadError::permission_denied(path.display().to_string()),
            ErrorKind::InvalidData => ReadError::invalid_encoding(path.display().to_string()),
            _ => ReadError::io(format!("Failed to read {}: {}", path.display(), err)),
        }
    }
}

impl PlanDocumentReader for LocalPlanDocumentReader {
    fn read(&self, path: &Path) -> Result<PlanDocument, ReadError> {
        let meta = fs::metadata(path).map_err(|e| Self::map_io_error(path, e))?;

        if meta.is_dir() {
            return Err(ReadError::io(format!("{} is a directory", path.display())));
        }
        if meta.len() > self.max_file_size {
            return Err(ReadError::file_too_large(meta.len(), self.max_file_size));
        }

        let content = fs::read_to_string(path).map_err(|e| Self::map_io_error(path, e))?;
        let checksum = Self::compute_checksum(&content);

        tracing::debug!(
            path = %path.display(),
            bytes = content.len(),
            checksum = %checksum,
            "Read plan document"
        );

        Ok(PlanDocument::new(
            path.display().to_string(),
            checksum,
            content,
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ───────────────────────────────────────────────────────────────
    // Test helpers
    // ───────────────────────────────────────────────────────────────

    fn test_content() -> &'static str {
        "## Summary\n\nThis is a test plan.\n"
    }

    fn write_plan(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    // ───────────────────────────────────────────────────────────────
    // Read tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn read_returns_content_and_source() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, "plan.md", test_content().as_bytes());

        let doc = LocalPlanDocumentReader::new().read(&path).unwrap();

        assert_eq!(doc.content, test_content());
        assert_eq!(doc.source, path.display().to_string());
        assert!(doc.is_conventionally_named());
    }

    #[test]
    fn read_computes_sha256_checksum() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, "plan.md", b"hello");

        let doc = LocalPlanDocumentReader::new().read(&path).unwrap();

        assert_eq!(
            doc.checksum,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = LocalPlanDocumentReader::new().read(&temp.path().join("missing.md"));

        assert!(matches!(result, Err(ReadError::NotFound { .. })));
    }

    #[test]
    fn read_rejects_oversized_file() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, "plan.md", &[b'a'; 64]);

        let result = LocalPlanDocumentReader::with_max_file_size(16).read(&path);

        assert_eq!(result.unwrap_err(), ReadError::file_too_large(64, 16));
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = write_plan(&temp, "plan.md", &[0xff, 0xfe, 0x00]);

        let result = LocalPlanDocumentReader::new().read(&path);

        assert!(matches!(result, Err(ReadError::InvalidEncoding { .. })));
    }

    #[test]
    fn read_rejects_directory() {
        let temp = TempDir::new().unwrap();
        let result = LocalPlanDocumentReader::new().read(temp.path());

        assert!(matches!(result, Err(ReadError::Io { .. })));
    }

    #[test]
    fn checksum_differs_for_different_content() {
        assert_ne!(
            LocalPlanDocumentReader::compute_checksum("a"),
            LocalPlanDocumentReader::compute_checksum("b")
        );
    }
}
