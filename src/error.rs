//! Scan error types
//!
//! Only the root path can fail a scan. Everything below it degrades
//! gracefully: an unreadable directory is treated as empty and traversal
//! continues elsewhere.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan root does not exist: {0}")]
    RootMissing(PathBuf),

    #[error("Scan root is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    #[error("Failed to canonicalize scan root {path}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
