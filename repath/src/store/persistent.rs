//! User and machine scopes persisted in SQLite.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};
use crate::invocation::Target;

use super::{EnvironmentStore, ProcessStore};

/// The store used by the command-line tool.
///
/// User variables live in `<data_dir>/env.db`, machine variables in
/// `<machine_dir>/env.db`, and process variables in the process environment.
/// A scope whose database does not exist yet reads as unset; the first write
/// creates it. Writing the machine scope typically requires privileges on the
/// machine directory; the failure is reported as a store write error.
///
/// # Examples
///
/// ```no_run
/// use repath::store::{EnvironmentStore, PersistentStore};
/// use repath::Target;
///
/// let store = PersistentStore::new("/home/ada/.repath", "/etc/repath");
/// store.write("PATH", Target::User, "/usr/local/bin:/usr/bin").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PersistentStore {
    data_dir: PathBuf,
    machine_dir: PathBuf,
    busy_timeout: Duration,
    process: ProcessStore,
}

impl PersistentStore {
    /// Creates a store over the given user and machine directories.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>, machine_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            machine_dir: machine_dir.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            process: ProcessStore,
        }
    }

    /// Sets the busy timeout used for every connection.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// The database file backing a persistent scope, or `None` for the
    /// process scope.
    #[must_use]
    pub fn database_path(&self, target: Target) -> Option<PathBuf> {
        match target {
            Target::User => Some(self.data_dir.join(DATABASE_FILE_NAME)),
            Target::Machine => Some(self.machine_dir.join(DATABASE_FILE_NAME)),
            Target::Process => None,
        }
    }

    /// Opens the scope database read-only, or `None` if it does not exist.
    fn open_for_read(&self, path: &Path) -> Result<Option<Database>> {
        if !path.exists() {
            return Ok(None);
        }
        let config = DatabaseConfig::new(path)
            .with_busy_timeout(self.busy_timeout)
            .read_only();
        Database::open(config).map(Some)
    }

    fn read_error(variable: &str, target: Target, err: &Error) -> Error {
        Error::StoreRead {
            variable: variable.to_string(),
            target,
            reason: err.to_string(),
        }
    }
}

impl EnvironmentStore for PersistentStore {
    fn read(&self, variable: &str, target: Target) -> Result<String> {
        let Some(path) = self.database_path(target) else {
            return self.process.read(variable, target);
        };

        let value = self
            .open_for_read(&path)
            .and_then(|db| match db {
                Some(db) => db.get_variable(variable),
                None => Ok(None),
            })
            .map_err(|e| Self::read_error(variable, target, &e))?;

        Ok(value.unwrap_or_default())
    }

    fn write(&self, variable: &str, target: Target, value: &str) -> Result<()> {
        let Some(path) = self.database_path(target) else {
            return self.process.write(variable, target, value);
        };

        let config = DatabaseConfig::new(&path).with_busy_timeout(self.busy_timeout);
        Database::open(config)
            .and_then(|mut db| db.set_variable(variable, value))
            .map_err(|e| Error::StoreWrite {
                variable: variable.to_string(),
                target,
                reason: e.to_string(),
            })
    }

    fn last_modified(&self, variable: &str, target: Target) -> Result<Option<SystemTime>> {
        let Some(path) = self.database_path(target) else {
            return Ok(None);
        };

        self.open_for_read(&path)
            .and_then(|db| match db {
                Some(db) => db.variable_updated_at(variable),
                None => Ok(None),
            })
            .map_err(|e| Self::read_error(variable, target, &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store() -> (tempfile::TempDir, PersistentStore) {
        let dir = tempdir().unwrap();
        let store = PersistentStore::new(dir.path().join("user"), dir.path().join("machine"));
        (dir, store)
    }

    #[test]
    fn test_missing_database_reads_as_unset() {
        let (_dir, store) = store();
        assert_eq!(store.read("PATH", Target::User).unwrap(), "");
        assert_eq!(store.last_modified("PATH", Target::User).unwrap(), None);
        assert!(!store.database_path(Target::User).unwrap().exists());
    }

    #[test]
    fn test_scopes_use_separate_databases() {
        let (_dir, store) = store();
        store.write("PATH", Target::User, "/u").unwrap();
        store.write("PATH", Target::Machine, "/m").unwrap();

        assert_eq!(store.read("PATH", Target::User).unwrap(), "/u");
        assert_eq!(store.read("PATH", Target::Machine).unwrap(), "/m");
        assert!(store.database_path(Target::Machine).unwrap().exists());
        assert!(store.last_modified("PATH", Target::User).unwrap().is_some());
    }

    #[test]
    fn test_process_scope_has_no_database() {
        let (_dir, store) = store();
        assert!(store.database_path(Target::Process).is_none());
        assert_eq!(store.last_modified("PATH", Target::Process).unwrap(), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_unwritable_scope_is_write_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        // The machine directory sits below a regular file, so it cannot be created.
        let store = PersistentStore::new(dir.path().join("user"), blocker.join("machine"));
        let err = store.write("PATH", Target::Machine, "/x").unwrap_err();
        assert!(matches!(err, Error::StoreWrite { target: Target::Machine, .. }));
    }
}
