//! Common test utilities for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree whose entries can be joined into path lists.
pub struct DirTree {
    root: TempDir,
}

#[allow(dead_code)]
impl DirTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Creates `relative` (and its parents) and returns its full path.
    pub fn mkdir(&self, relative: &str) -> String {
        let path = self.root.path().join(relative);
        fs::create_dir_all(&path).unwrap();
        path.to_string_lossy().into_owned()
    }

    /// The full path of `relative`, without creating it.
    pub fn path(&self, relative: &str) -> String {
        self.root.path().join(relative).to_string_lossy().into_owned()
    }

    /// A second directory for store databases, kept apart from the entries.
    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join(".data")
    }
}

/// Joins entries with `:`.
#[allow(dead_code)]
pub fn list<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(":")
}
