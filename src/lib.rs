//! autoinclude - automatic Gradle build and module discovery
//!
//! This library walks a directory tree, finds the marker files that identify
//! independently buildable units, and registers each discovered unit with a
//! host build graph: `settings.gradle[.kts]` marks a standalone build to be
//! linked by reference, `build.gradle[.kts]` marks a module to be absorbed
//! into the host build.
//!
//! # Core Concepts
//!
//! - **Scanner**: depth-first traversal engine; a marker halts descent into
//!   its subtree, hidden and `build` directories are never entered
//! - **Classifier**: pure per-directory decision over listed entries, with
//!   standalone-build markers taking precedence over module markers
//! - **Registrar**: the host collaborator that receives the resulting link
//!   directives in traversal order
//!
//! # Example Usage
//!
//! ```no_run
//! use autoinclude::{RealFileSystem, RecordingRegistrar, Scanner};
//! use std::path::Path;
//!
//! fn discover(root: &Path) -> anyhow::Result<()> {
//!     let fs = RealFileSystem::new();
//!     let mut registrar = RecordingRegistrar::new();
//!
//!     let summary = Scanner::new(&fs).scan(root, &mut registrar)?;
//!
//!     for directive in registrar.directives() {
//!         println!("{}", directive);
//!     }
//!     println!("{} directories visited", summary.directories_visited);
//!
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod paths;
pub mod registrar;
pub mod scanner;
pub mod util;

// Re-export key types for convenient access
pub use classify::{classify_entries, Classification, DirectoryVerdict};
pub use config::ScanConfig;
pub use error::ScanError;
pub use fs::{DirEntry, FileSystem, FileType, MockFileSystem, RealFileSystem};
pub use registrar::{BuildGraphRegistrar, LinkDirective, RecordingRegistrar};
pub use scanner::{RootContext, ScanSummary, Scanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_autoinclude() {
        assert_eq!(NAME, "autoinclude");
    }
}
