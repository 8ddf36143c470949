//! Per-directory marker classification
//!
//! Pure decision logic over an already-listed set of directory entries; all
//! I/O stays in the scanner. A directory classifies as a standalone build
//! (`settings.gradle[.kts]` present), a module (`build.gradle[.kts]`
//! present), or neither. A standalone-build marker always wins over a module
//! marker in the same directory, regardless of listing order.

use crate::fs::DirEntry;

/// Marker for a directory that is the root of an independently configured build
pub const SETTINGS_MARKER: &str = "settings.gradle";

/// Marker for a directory that is a sub-module of the enclosing build
pub const BUILD_MARKER: &str = "build.gradle";

/// Suffix for the Kotlin DSL form of either marker
pub const KOTLIN_DSL_SUFFIX: &str = ".kts";

/// Directories whose name starts with this are never descended into
pub const HIDDEN_PREFIX: char = '.';

/// Reserved build-output directory name, never descended into
pub const BUILD_OUTPUT_DIR: &str = "build";

/// Verdict for a single directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Contains a standalone-build marker; link as an external build
    ExternalBuild,
    /// Contains a module marker; include as a module of the host build
    Module,
    /// No marker; traversal continues into visible subdirectories
    NoMarker,
}

/// Classification of one directory plus the subdirectories eligible for descent
#[derive(Debug)]
pub struct DirectoryVerdict {
    pub classification: Classification,
    pub subdirectories: Vec<DirEntry>,
}

/// True if `name` is `base` or `base` with the Kotlin DSL suffix.
///
/// The two syntaxes are equivalent for classification purposes.
pub fn matches_marker(name: &str, base: &str) -> bool {
    name == base
        || (name.len() == base.len() + KOTLIN_DSL_SUFFIX.len()
            && name.starts_with(base)
            && name.ends_with(KOTLIN_DSL_SUFFIX))
}

/// Entries qualifying for descent: directories that are not hidden and not
/// the reserved build-output directory.
pub fn is_visible_dir(entry: &DirEntry) -> bool {
    entry.is_dir() && !entry.name.starts_with(HIDDEN_PREFIX) && entry.name != BUILD_OUTPUT_DIR
}

/// Classify one directory from its listed children.
///
/// The full child list is always examined: a settings marker appearing after
/// a build marker in listing order must still take precedence.
pub fn classify_entries(entries: &[DirEntry]) -> DirectoryVerdict {
    let mut has_module_marker = false;
    let mut subdirectories = Vec::new();

    for entry in entries {
        if entry.is_file() {
            if matches_marker(&entry.name, SETTINGS_MARKER) {
                return DirectoryVerdict {
                    classification: Classification::ExternalBuild,
                    subdirectories: Vec::new(),
                };
            }
            if matches_marker(&entry.name, BUILD_MARKER) {
                has_module_marker = true;
            }
        } else if is_visible_dir(entry) {
            subdirectories.push(entry.clone());
        }
    }

    if has_module_marker {
        DirectoryVerdict {
            classification: Classification::Module,
            subdirectories: Vec::new(),
        }
    } else {
        DirectoryVerdict {
            classification: Classification::NoMarker,
            subdirectories,
        }
    }
}
