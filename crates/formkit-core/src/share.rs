//! Files handed to the platform share sheet.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Share errors.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Invalid file name: {0:?}")]
    InvalidFilename(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for share operations.
pub type ShareResult<T> = Result<T, ShareError>;

/// A document and the file name it should be shared under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    filename: String,
    document: Vec<u8>,
}

impl SharePayload {
    /// Create a payload.
    pub fn new(filename: impl Into<String>, document: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            document: document.into(),
        }
    }

    /// Requested file name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Document bytes.
    pub fn document(&self) -> &[u8] {
        &self.document
    }

    /// File name made safe to join onto a directory.
    pub fn safe_filename(&self) -> ShareResult<String> {
        let safe: String = self
            .filename
            .trim()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if safe.is_empty() || safe.chars().all(|c| c == '.') {
            return Err(ShareError::InvalidFilename(self.filename.clone()));
        }
        Ok(safe)
    }

    /// Write the document into `dir`, returning the file's path.
    pub fn write_to(&self, dir: &Path) -> ShareResult<PathBuf> {
        let path = dir.join(self.safe_filename()?);
        fs::write(&path, &self.document).map_err(|e| {
            ShareError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;
        log::info!("Wrote share file {} ({} bytes)", path.display(), self.document.len());
        Ok(path)
    }

    /// Write the document into the system temporary directory.
    pub fn write_temporary(&self) -> ShareResult<PathBuf> {
        self.write_to(&std::env::temp_dir())
    }
}
