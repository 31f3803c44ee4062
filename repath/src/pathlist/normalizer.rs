//! The path-list normalization engine.

use std::collections::HashSet;
use std::path::Path;

use super::case::recover_case;
use super::entry::{case_key, join_entries, trim_entry};
use super::fs::FileSystem;
use crate::error::{Error, Result};
use crate::invocation::Policy;
use crate::logging::{TraceLevel, TraceSink};

/// Result of [`PathNormalizer::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The entry, in its final spelling, is now in the list.
    Added(String),
    /// The entry does not exist on disk and orphans are not kept; the list
    /// is unchanged.
    NotAdded(String),
}

/// Cleans and edits path lists under a fixed [`Policy`].
///
/// Every decision the normalizer makes about an entry (orphan dropped or
/// kept, case corrected, duplicate dropped or kept) is reported to the trace
/// sink at [`TraceLevel::Info`].
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use repath::pathlist::{MemoryFileSystem, PathNormalizer};
/// use repath::{NullSink, Policy};
///
/// let fs = MemoryFileSystem::new().with_dir("/usr/bin").with_dir("/opt/bin");
/// let policy = Policy::default();
/// let normalizer = PathNormalizer::new(&fs, &NullSink, &policy, ':');
///
/// let entries = normalizer.normalize("/usr/bin/:/gone:/opt/bin:/USR/BIN");
/// assert_eq!(entries, vec!["/usr/bin", "/opt/bin"]);
/// # }
/// ```
pub struct PathNormalizer<'a> {
    fs: &'a dyn FileSystem,
    sink: &'a dyn TraceSink,
    policy: &'a Policy,
    delimiter: char,
}

impl<'a> PathNormalizer<'a> {
    /// Creates a normalizer over the given filesystem, sink, and policy.
    #[must_use]
    pub fn new(
        fs: &'a dyn FileSystem,
        sink: &'a dyn TraceSink,
        policy: &'a Policy,
        delimiter: char,
    ) -> Self {
        Self {
            fs,
            sink,
            policy,
            delimiter,
        }
    }

    /// The list delimiter in use.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Cleans a raw variable value into an ordered list of entries.
    ///
    /// Entries are trimmed of trailing separators (empty ones vanish),
    /// checked for existence, case-corrected when the policy asks for it,
    /// and deduplicated case-insensitively with the first occurrence winning.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }

        let mut result = Vec::new();
        let mut seen = HashSet::new();

        for segment in raw.split(self.delimiter) {
            let trimmed = trim_entry(segment);
            if trimmed.is_empty() {
                continue;
            }

            let Some(entry) = self.resolve(trimmed) else {
                continue;
            };

            if seen.insert(case_key(&entry)) {
                result.push(entry);
            } else if self.policy.keep_duplicates {
                self.trace(&format!("Duplicate kept: {entry}"));
                result.push(entry);
            } else {
                self.trace(&format!("Duplicate skipped: {entry}"));
            }
        }

        result
    }

    /// Adds `new_entry` at the end of the list, or at the front when
    /// `at_front` is set.
    ///
    /// An existing directory is case-corrected like any listed entry. A
    /// missing one is only added when orphans are kept. Unless duplicates are
    /// kept, earlier case-equal occurrences are removed so the entry ends up
    /// exactly once, at the requested position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] if the entry is empty after trimming.
    pub fn insert(
        &self,
        mut entries: Vec<String>,
        new_entry: &str,
        at_front: bool,
    ) -> Result<(Vec<String>, InsertOutcome)> {
        let trimmed = trim_entry(new_entry);
        if trimmed.is_empty() {
            return Err(Error::usage("cannot add an empty path"));
        }

        let Some(entry) = self.resolve(trimmed) else {
            return Ok((entries, InsertOutcome::NotAdded(trimmed.to_string())));
        };

        if !self.policy.keep_duplicates {
            let key = case_key(&entry);
            let before = entries.len();
            entries.retain(|existing| case_key(existing) != key);
            if entries.len() != before {
                self.trace(&format!("Existing entry moved: {entry}"));
            }
        }

        if at_front {
            entries.insert(0, entry.clone());
        } else {
            entries.push(entry.clone());
        }

        Ok((entries, InsertOutcome::Added(entry)))
    }

    /// Removes one occurrence of `target` from the list.
    ///
    /// With `match_case` the target must equal an entry exactly; without it
    /// the first case-insensitive match is taken. Returns the removed entry as
    /// it was spelled in the list, or `None` when nothing matched (the list is
    /// then returned unchanged).
    #[must_use]
    pub fn remove(&self, mut entries: Vec<String>, target: &str) -> (Vec<String>, Option<String>) {
        let wanted = trim_entry(target);

        let position = if self.policy.match_case {
            entries.iter().position(|entry| entry == wanted)
        } else {
            let key = case_key(wanted);
            entries.iter().position(|entry| case_key(entry) == key)
        };

        match position {
            Some(index) => {
                let removed = entries.remove(index);
                self.trace(&format!("Removed: {removed}"));
                (entries, Some(removed))
            }
            None => (entries, None),
        }
    }

    /// Whether `entry` currently resolves to a directory.
    #[must_use]
    pub fn exists(&self, entry: &str) -> bool {
        self.fs.is_dir(Path::new(entry))
    }

    /// Joins entries with the delimiter.
    #[must_use]
    pub fn serialize<S: AsRef<str>>(&self, entries: &[S]) -> String {
        join_entries(entries, self.delimiter)
    }

    /// Applies the orphan and case policy to one trimmed entry.
    fn resolve(&self, trimmed: &str) -> Option<String> {
        if !self.exists(trimmed) {
            if self.policy.keep_orphans {
                self.trace(&format!("Orphan kept: {trimmed}"));
                return Some(trimmed.to_string());
            }
            self.trace(&format!("Orphan skipped: {trimmed}"));
            return None;
        }

        if !self.policy.match_case {
            return Some(trimmed.to_string());
        }

        let fixed = recover_case(self.fs, Path::new(trimmed))
            .to_string_lossy()
            .into_owned();
        if fixed != trimmed {
            self.trace(&format!("Case corrected: {trimmed} -> {fixed}"));
        }
        Some(fixed)
    }

    fn trace(&self, message: &str) {
        self.sink.trace(TraceLevel::Info, message);
    }
}
