//! Filesystem abstraction for testable directory traversal

mod mock;
mod real;

pub use mock::MockFileSystem;
pub use real::RealFileSystem;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Type of file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }
}

/// Abstraction over read-only file system operations.
///
/// The scanner never reads file contents or writes anything; listing a
/// directory's entries with their names and types is the whole surface.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// List directory contents
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Canonicalize a path
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_entry_accessors() {
        let entry = DirEntry {
            path: PathBuf::from("/repo/settings.gradle"),
            name: "settings.gradle".to_string(),
            file_type: FileType::File,
        };
        assert_eq!(entry.path(), Path::new("/repo/settings.gradle"));
        assert_eq!(entry.file_name(), "settings.gradle");
        assert!(entry.is_file());
        assert!(!entry.is_dir());
    }
}
