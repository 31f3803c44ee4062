//! Variable reads and writes.

use std::time::{Duration, SystemTime};

use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;
use super::schema::{DELETE_VARIABLE, UPSERT_VARIABLE};

const SELECT_VARIABLE: &str = "SELECT value FROM variables WHERE name = ?";

const SELECT_UPDATED_AT: &str = "SELECT updated_at FROM variables WHERE name = ?";

const LIST_VARIABLES: &str = r"
    SELECT name, value, updated_at
    FROM variables
    ORDER BY name
";

/// Converts a `SystemTime` to Unix epoch seconds for database storage.
///
/// # Errors
///
/// Returns an error if the time is before the Unix epoch.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| Error::Validation {
            field: "timestamp".into(),
            message: format!("Invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs.max(0) as u64)
}

/// A stored variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRecord {
    /// The variable name.
    pub name: String,
    /// The stored value.
    pub value: String,
    /// When the value was last written.
    pub updated_at: SystemTime,
}

impl Database {
    /// Reads a variable, or `None` if it is not stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_variable(&self, name: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(SELECT_VARIABLE, [name], |row| row.get(0))
            .optional()?)
    }

    /// When a variable was last written, or `None` if it is not stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn variable_updated_at(&self, name: &str) -> Result<Option<SystemTime>> {
        let secs: Option<i64> = self
            .conn
            .query_row(SELECT_UPDATED_AT, [name], |row| row.get(0))
            .optional()?;
        Ok(secs.map(unix_secs_to_systemtime))
    }

    /// Stores a variable, replacing any previous value.
    ///
    /// The write runs in an IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction, the insert, or the commit fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use repath::database::{Database, DatabaseConfig};
    ///
    /// let scope_dir = tempfile::tempdir().unwrap();
    /// let mut db = Database::open(DatabaseConfig::in_dir(scope_dir.path())).unwrap();
    /// db.set_variable("PATH", "/usr/bin:/bin").unwrap();
    /// assert_eq!(db.get_variable("PATH").unwrap().as_deref(), Some("/usr/bin:/bin"));
    /// ```
    pub fn set_variable(&mut self, name: &str, value: &str) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let now = systemtime_to_unix_secs(SystemTime::now())?;
        tx.execute(UPSERT_VARIABLE, params![name, value, now])?;
        tx.commit()?;
        Ok(())
    }

    /// Deletes a variable. Returns whether it was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or the delete fails.
    pub fn delete_variable(&mut self, name: &str) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rows = tx.execute(DELETE_VARIABLE, [name])?;
        tx.commit()?;
        Ok(rows > 0)
    }

    /// Lists all stored variables ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_variables(&self) -> Result<Vec<VariableRecord>> {
        let mut stmt = self.conn.prepare(LIST_VARIABLES)?;
        let rows = stmt.query_map([], |row| {
            Ok(VariableRecord {
                name: row.get(0)?,
                value: row.get(1)?,
                updated_at: unix_secs_to_systemtime(row.get(2)?),
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
