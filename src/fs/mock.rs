use super::{DirEntry, FileSystem, FileType};
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory file system for unit tests.
///
/// Paths added relative are anchored under the mock root (`/mock` by
/// default). `deny_dir` marks a directory as unreadable so the scanner's
/// treat-as-empty resilience path can be exercised without fiddling with
/// real permissions.
pub struct MockFileSystem {
    entries: RwLock<HashMap<PathBuf, FileType>>,
    denied: RwLock<HashSet<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            entries: RwLock::new(HashMap::new()),
            denied: RwLock::new(HashSet::new()),
            root: root.clone(),
        };
        fs.entries.write().unwrap().insert(root, FileType::Directory);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut entries = self.entries.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut entries, parent);
        }
        entries.insert(path, FileType::File);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut entries = self.entries.write().unwrap();

        Self::ensure_parents(&mut entries, &path);
        entries.insert(path, FileType::Directory);
    }

    /// Make read_dir fail for this directory
    pub fn deny_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.denied.write().unwrap().insert(path);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(entries: &mut HashMap<PathBuf, FileType>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            entries.entry(current.clone()).or_insert(FileType::Directory);
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.entries.read().unwrap().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.entries.read().unwrap().get(&path) == Some(&FileType::Directory)
    }

    fn is_file(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.entries.read().unwrap().get(&path) == Some(&FileType::File)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);

        if self.denied.read().unwrap().contains(&path) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }

        let entries = self.entries.read().unwrap();
        if !entries.contains_key(&path) {
            return Err(anyhow!("Directory not found: {:?}", path));
        }

        let mut result = Vec::new();
        for (entry_path, file_type) in entries.iter() {
            if entry_path.parent() == Some(&path) {
                let name = entry_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("")
                    .to_string();

                result.push(DirEntry {
                    path: entry_path.clone(),
                    name,
                    file_type: *file_type,
                });
            }
        }

        Ok(result)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        let normalized = self.normalize_path(path);
        if self.entries.read().unwrap().contains_key(&normalized) {
            Ok(normalized)
        } else {
            Err(anyhow!("Path not found: {:?}", path))
        }
    }
}
