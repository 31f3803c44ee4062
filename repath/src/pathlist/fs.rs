//! Read-only filesystem queries used by the normalizer.
//!
//! The normalizer only ever asks two questions: "is this a directory?" and
//! "what are the subdirectories of this directory, spelled as stored?". Both
//! go through [`FileSystem`] so case recovery can be exercised against an
//! in-memory, case-insensitive tree on any host.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The filesystem queries the path-list engine depends on.
pub trait FileSystem {
    /// Whether `path` currently resolves to a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the subdirectories of `dir`, in their stored case.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be listed.
    fn child_dir_names(&self, dir: &Path) -> io::Result<Vec<OsString>>;
}

/// The host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn child_dir_names(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Follows symlinks so a linked directory counts as a directory.
            if entry.path().is_dir() {
                names.push(entry.file_name());
            }
        }
        Ok(names)
    }
}

/// An in-memory directory tree with case-insensitive lookups.
///
/// The first spelling registered for a directory is the stored one, the way a
/// case-preserving, case-insensitive filesystem behaves.
///
/// # Examples
///
/// ```
/// use repath::pathlist::{FileSystem, MemoryFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new().with_dir("/Users/Ada/Tools");
/// assert!(fs.is_dir(Path::new("/users/ada/tools")));
/// assert!(!fs.is_dir(Path::new("/users/ada/bin")));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    dirs: Vec<PathBuf>,
}

impl MemoryFileSystem {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path` and all of its ancestors as directories.
    #[must_use]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }

    /// Registers `path` and all of its ancestors as directories.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let mut ancestors: Vec<&Path> = path
            .as_ref()
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        ancestors.reverse();

        for dir in ancestors {
            if self.find(dir).is_none() {
                self.dirs.push(dir.to_path_buf());
            }
        }
    }

    fn key(path: &Path) -> Vec<String> {
        path.components()
            .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
            .collect()
    }

    fn find(&self, path: &Path) -> Option<&PathBuf> {
        let key = Self::key(path);
        self.dirs.iter().find(|dir| Self::key(dir) == key)
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && self.find(path).is_some()
    }

    fn child_dir_names(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        if !self.is_dir(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", dir.display()),
            ));
        }

        let parent_key = Self::key(dir);
        let names: BTreeSet<OsString> = self
            .dirs
            .iter()
            .filter(|candidate| {
                candidate
                    .parent()
                    .is_some_and(|parent| Self::key(parent) == parent_key)
            })
            .filter_map(|candidate| candidate.file_name().map(ToOwned::to_owned))
            .collect();

        Ok(names.into_iter().collect())
    }
}
