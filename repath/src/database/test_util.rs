//! Scratch databases for unit tests.

use tempfile::TempDir;

use crate::database::{Database, DatabaseConfig};

/// A freshly bootstrapped `env.db` in its own temporary scope directory.
///
/// The directory is removed when the returned [`TempDir`] drops, so keep it
/// alive for as long as the database is used.
pub fn scratch_database() -> (TempDir, Database) {
    let scope_dir = TempDir::new().unwrap();
    let db = Database::open(DatabaseConfig::in_dir(scope_dir.path())).unwrap();
    (scope_dir, db)
}
