//! An in-memory store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::invocation::Target;

use super::EnvironmentStore;

/// Variables held in memory, one map per scope.
///
/// Reads and writes can be made to fail, which is how callers exercise the
/// failure paths of [`reconcile`](crate::operations::reconcile).
///
/// # Examples
///
/// ```
/// use repath::store::{EnvironmentStore, MemoryStore};
/// use repath::Target;
///
/// let store = MemoryStore::new().with_value(Target::Machine, "PATH", "/bin");
/// assert_eq!(store.read("PATH", Target::Machine).unwrap(), "/bin");
/// assert_eq!(store.read("PATH", Target::User).unwrap(), "");
///
/// store.fail_writes(true);
/// assert!(store.write("PATH", Target::Machine, "/usr/bin").is_err());
/// assert_eq!(store.write_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<(Target, String), String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value.
    #[must_use]
    pub fn with_value(self, target: Target, variable: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert((target, variable.to_string()), value.to_string());
        self
    }

    /// Makes every following read fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Makes every following write fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl EnvironmentStore for MemoryStore {
    fn read(&self, variable: &str, target: Target) -> Result<String> {
        if self.fail_reads.get() {
            return Err(Error::StoreRead {
                variable: variable.to_string(),
                target,
                reason: "injected read failure".to_string(),
            });
        }
        Ok(self
            .values
            .borrow()
            .get(&(target, variable.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn write(&self, variable: &str, target: Target, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::StoreWrite {
                variable: variable.to_string(),
                target,
                reason: "injected write failure".to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert((target, variable.to_string()), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scopes_are_separate() {
        let store = MemoryStore::new();
        store.write("PATH", Target::User, "/u").unwrap();
        store.write("PATH", Target::Process, "/p").unwrap();
        assert_eq!(store.read("PATH", Target::User).unwrap(), "/u");
        assert_eq!(store.read("PATH", Target::Process).unwrap(), "/p");
        assert_eq!(store.read("PATH", Target::Machine).unwrap(), "");
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_injected_failures() {
        let store = MemoryStore::new().with_value(Target::User, "PATH", "/a");
        store.fail_reads(true);
        assert!(store.read("PATH", Target::User).unwrap_err().is_store_error());
        store.fail_reads(false);

        store.fail_writes(true);
        assert!(store.write("PATH", Target::User, "/b").is_err());
        assert_eq!(store.read("PATH", Target::User).unwrap(), "/a");
    }

    #[test]
    fn test_last_modified_not_tracked() {
        let store = MemoryStore::new();
        assert_eq!(store.last_modified("PATH", Target::User).unwrap(), None);
    }
}
