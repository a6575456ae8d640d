//! File Reader: loads the raw text of a resume or job description from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::document::Document;

/// Raised when a path does not reference an existing, readable file.
///
/// Directories and permission failures are folded into this kind too; the
/// caller only ever learns which path could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} does not exist.", .path.display())]
pub struct NotFoundError {
    pub path: PathBuf,
}

impl NotFoundError {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Reads the whole file at `path` and returns it verbatim.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD instead of failing the read.
pub fn read_document(path: &Path) -> Result<Document, NotFoundError> {
    if path.as_os_str().is_empty() || !path.is_file() {
        warn!("Document not found: {}", path.display());
        return Err(NotFoundError::new(path));
    }

    let bytes = fs::read(path).map_err(|e| {
        warn!("Failed to read {}: {e}", path.display());
        NotFoundError::new(path)
    })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let text = String::from_utf8_lossy(&bytes).into_owned();
    Ok(Document::new(path, text))
}
