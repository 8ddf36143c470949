//! Recursive build-unit discovery
//!
//! Depth-first walk from a root directory. Each visited directory is
//! classified once; a marker halts descent into that subtree, so a directory
//! contributes at most one directive and nothing beneath a discovered unit is
//! ever looked at. Hidden directories and `build` output directories are
//! skipped entirely. Unreadable directories are treated as empty, the walk
//! never aborts below the root.

use crate::classify::{classify_entries, is_visible_dir, Classification};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::fs::{DirEntry, FileSystem};
use crate::paths::relativize;
use crate::registrar::BuildGraphRegistrar;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Immutable context for one scan run: the canonicalized traversal root and
/// the display name registered for the build graph.
#[derive(Debug, Clone)]
pub struct RootContext {
    root: PathBuf,
    name: String,
}

impl RootContext {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Counters reported after a completed scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    pub directories_visited: usize,
    pub builds_linked: usize,
    pub modules_linked: usize,
    pub scan_time_ms: u64,
}

/// Traversal engine: walks the tree and feeds the registrar
pub struct Scanner<'a> {
    fs: &'a dyn FileSystem,
    config: ScanConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self::with_config(fs, ScanConfig::default())
    }

    pub fn with_config(fs: &'a dyn FileSystem, config: ScanConfig) -> Self {
        Self { fs, config }
    }

    /// Scan the tree under `root`, registering every discovered build unit.
    ///
    /// Directives reach the registrar in depth-first pre-order, siblings in
    /// lexicographic name order (see [`ScanConfig::sort_entries`]). Only a
    /// missing or non-directory root fails the scan.
    pub fn scan(
        &self,
        root: &Path,
        registrar: &mut dyn BuildGraphRegistrar,
    ) -> Result<ScanSummary, ScanError> {
        let context = self.root_context(root)?;
        let start = Instant::now();

        registrar.set_root_name(context.name());

        info!(
            root = %context.root().display(),
            name = context.name(),
            "Starting build-unit scan"
        );

        let mut summary = ScanSummary::default();

        // The root itself is never classified; markers at the top level
        // belong to the host build.
        for entry in self
            .list_entries(context.root())
            .into_iter()
            .filter(is_visible_dir)
        {
            self.visit(&context, entry, registrar, &mut summary);
        }

        summary.scan_time_ms = start.elapsed().as_millis() as u64;

        info!(
            directories_visited = summary.directories_visited,
            builds_linked = summary.builds_linked,
            modules_linked = summary.modules_linked,
            scan_time_ms = summary.scan_time_ms,
            "Scan completed"
        );

        Ok(summary)
    }

    fn root_context(&self, root: &Path) -> Result<RootContext, ScanError> {
        if !self.fs.exists(root) {
            return Err(ScanError::RootMissing(root.to_path_buf()));
        }
        if !self.fs.is_dir(root) {
            return Err(ScanError::RootNotADirectory(root.to_path_buf()));
        }

        let root = self
            .fs
            .canonicalize(root)
            .map_err(|source| ScanError::Canonicalize {
                path: root.to_path_buf(),
                source,
            })?;

        let name = match &self.config.root_name {
            Some(name) => name.clone(),
            None => root
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| root.to_string_lossy().to_string()),
        };

        Ok(RootContext { root, name })
    }

    fn visit(
        &self,
        context: &RootContext,
        dir: DirEntry,
        registrar: &mut dyn BuildGraphRegistrar,
        summary: &mut ScanSummary,
    ) {
        summary.directories_visited += 1;

        let entries = self.list_entries(dir.path());
        let verdict = classify_entries(&entries);

        match verdict.classification {
            Classification::ExternalBuild => {
                let path = relativize(context.root(), dir.path());
                debug!(path = %path, "Linking external build");
                registrar.include_build(&path);
                summary.builds_linked += 1;
            }
            Classification::Module => {
                let path = relativize(context.root(), dir.path());
                debug!(path = %path, name = dir.file_name(), "Including module");
                registrar.include_module(dir.file_name(), &path);
                summary.modules_linked += 1;
            }
            Classification::NoMarker => {
                for subdirectory in verdict.subdirectories {
                    self.visit(context, subdirectory, registrar, summary);
                }
            }
        }
    }

    /// List a directory's children; classification only descends into what
    /// this returns. An unreadable or vanished directory yields no entries
    /// rather than failing the scan.
    fn list_entries(&self, dir: &Path) -> Vec<DirEntry> {
        let mut entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(dir = %dir.display(), error = %error, "Unreadable directory, treating as empty");
                return Vec::new();
            }
        };

        if self.config.sort_entries {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::registrar::{LinkDirective, RecordingRegistrar};

    fn external(path: &str) -> LinkDirective {
        LinkDirective::ExternalBuild {
            path: path.to_string(),
        }
    }

    fn module(name: &str, path: &str) -> LinkDirective {
        LinkDirective::Module {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    fn scan(fs: &MockFileSystem) -> (RecordingRegistrar, ScanSummary) {
        let scanner = Scanner::new(fs);
        let mut registrar = RecordingRegistrar::new();
        let summary = scanner.scan(fs.root(), &mut registrar).unwrap();
        (registrar, summary)
    }

    #[test]
    fn module_marker_yields_module_named_after_directory() {
        let fs = MockFileSystem::new();
        fs.add_file("a/build.gradle");

        let (registrar, summary) = scan(&fs);

        assert_eq!(registrar.directives(), &[module("a", "a")]);
        assert_eq!(summary.modules_linked, 1);
        assert_eq!(summary.builds_linked, 0);
    }

    #[test]
    fn settings_marker_beats_module_marker() {
        let fs = MockFileSystem::new();
        fs.add_file("a/settings.gradle.kts");
        fs.add_file("a/build.gradle.kts");

        let (registrar, _) = scan(&fs);

        assert_eq!(registrar.directives(), &[external("a")]);
    }

    #[test]
    fn marker_halts_descent_into_subtree() {
        let fs = MockFileSystem::new();
        fs.add_file("x/build.gradle");
        fs.add_file("x/y/build.gradle");

        let (registrar, summary) = scan(&fs);

        assert_eq!(registrar.directives(), &[module("x", "x")]);
        // x/y is never visited once x classifies
        assert_eq!(summary.directories_visited, 1);
    }

    #[test]
    fn descends_through_marker_free_directories() {
        let fs = MockFileSystem::new();
        fs.add_file("p/readme.txt");
        fs.add_file("p/q/settings.gradle");

        let (registrar, _) = scan(&fs);

        assert_eq!(registrar.directives(), &[external("p/q")]);
    }

    #[test]
    fn hidden_and_build_directories_are_excluded() {
        let fs = MockFileSystem::new();
        fs.add_file(".hidden/build.gradle");
        fs.add_file("build/build.gradle");
        fs.add_file("out/build/nested/build.gradle");

        let (registrar, _) = scan(&fs);

        assert!(registrar.directives().is_empty());
    }

    #[test]
    fn markers_in_root_emit_nothing() {
        let fs = MockFileSystem::new();
        fs.add_file("settings.gradle");
        fs.add_file("build.gradle");
        fs.add_file("sub/build.gradle");

        let (registrar, _) = scan(&fs);

        assert_eq!(registrar.directives(), &[module("sub", "sub")]);
    }

    #[test]
    fn unreadable_directory_contributes_nothing() {
        let fs = MockFileSystem::new();
        fs.add_file("locked/build.gradle");
        fs.add_file("open/build.gradle");
        fs.deny_dir("locked");

        let (registrar, _) = scan(&fs);

        assert_eq!(registrar.directives(), &[module("open", "open")]);
    }

    #[test]
    fn siblings_emit_in_sorted_order() {
        let fs = MockFileSystem::new();
        fs.add_file("zeta/build.gradle");
        fs.add_file("alpha/build.gradle");
        fs.add_file("mid/settings.gradle");

        let (registrar, _) = scan(&fs);

        assert_eq!(
            registrar.directives(),
            &[
                module("alpha", "alpha"),
                external("mid"),
                module("zeta", "zeta"),
            ]
        );
    }

    #[test]
    fn root_name_defaults_to_directory_name() {
        let fs = MockFileSystem::with_root(PathBuf::from("/work/demo"));

        let (registrar, _) = scan(&fs);

        assert_eq!(registrar.root_name(), Some("demo"));
    }

    #[test]
    fn root_name_override() {
        let fs = MockFileSystem::new();
        let scanner = Scanner::with_config(
            &fs,
            ScanConfig {
                root_name: Some("renamed".to_string()),
                ..ScanConfig::default()
            },
        );
        let mut registrar = RecordingRegistrar::new();
        scanner.scan(fs.root(), &mut registrar).unwrap();

        assert_eq!(registrar.root_name(), Some("renamed"));
    }

    #[test]
    fn missing_root_is_fatal() {
        let fs = MockFileSystem::new();
        let scanner = Scanner::new(&fs);
        let mut registrar = RecordingRegistrar::new();

        let error = scanner
            .scan(Path::new("/mock/nope"), &mut registrar)
            .unwrap_err();

        assert!(matches!(error, ScanError::RootMissing(_)));
    }

    #[test]
    fn file_root_is_fatal() {
        let fs = MockFileSystem::new();
        fs.add_file("settings.gradle");
        let scanner = Scanner::new(&fs);
        let mut registrar = RecordingRegistrar::new();

        let error = scanner
            .scan(Path::new("/mock/settings.gradle"), &mut registrar)
            .unwrap_err();

        assert!(matches!(error, ScanError::RootNotADirectory(_)));
    }
}
