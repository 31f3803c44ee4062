//! Opening a scope's `env.db`.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// A scope database connection.
///
/// Connections are short-lived: the store opens one per read or write.
///
/// # Examples
///
/// ```
/// use repath::database::{Database, DatabaseConfig};
///
/// let scope_dir = tempfile::tempdir().unwrap();
/// let db = Database::open(DatabaseConfig::in_dir(scope_dir.path())).unwrap();
/// assert!(db.config().path.ends_with("env.db"));
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens the file named by `config`, bootstrapping its schema on first
    /// use.
    ///
    /// Writable handles switch the file to WAL; read-only handles never
    /// create anything, so a missing file is an error for them.
    ///
    /// # Errors
    ///
    /// Fails when the scope directory or file cannot be created or opened, a
    /// PRAGMA is refused, or the stored schema version does not match.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let creating = config.auto_create && !config.read_only;
        if creating && !config.path.exists() {
            if let Some(scope_dir) = config.path.parent() {
                std::fs::create_dir_all(scope_dir)?;
            }
        }

        let conn = Connection::open_with_flags(&config.path, open_flags(&config))?;

        // busy_timeout first so the journal-mode switch waits on a locked file.
        conn.busy_timeout(config.busy_timeout)?;
        if !config.read_only {
            // PRAGMA journal_mode returns a row, so it goes through query_row.
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
            conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        }

        super::migrations::check_schema_compatibility(&conn)?;

        Ok(Self { conn, config })
    }

    /// The configuration this connection was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn open_flags(config: &DatabaseConfig) -> OpenFlags {
    let access = match (config.read_only, config.auto_create) {
        (true, _) => OpenFlags::SQLITE_OPEN_READ_ONLY,
        (false, true) => OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        (false, false) => OpenFlags::SQLITE_OPEN_READ_WRITE,
    };
    access | OpenFlags::SQLITE_OPEN_NO_MUTEX
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writable_open_uses_wal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("env.db");
        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");
    }

    #[test]
    fn test_open_creates_scope_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("machine").join("env.db");
        assert!(!path.parent().unwrap().exists());

        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(db.config().path, path);
    }

    #[test]
    fn test_read_only_handle_rejects_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("env.db");
        Database::open(DatabaseConfig::new(&path)).unwrap();

        let db = Database::open(DatabaseConfig::new(&path).read_only()).unwrap();
        let result = db.connection().execute("CREATE TABLE test (id INTEGER)", []);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_only_missing_database_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.db");
        assert!(Database::open(DatabaseConfig::new(&path).read_only()).is_err());
        assert!(!path.exists());
    }
}
