//! SQLite storage for the persistent variable scopes.
//!
//! Each persistent scope (user, machine) has its own database file named
//! `env.db` inside the scope directory. A database holds a `metadata` table
//! with the schema version and a `variables` table keyed by variable name.
//!
//! # Examples
//!
//! ```
//! use repath::database::{Database, DatabaseConfig};
//!
//! let scope_dir = tempfile::tempdir().unwrap();
//! let mut db = Database::open(DatabaseConfig::in_dir(scope_dir.path())).unwrap();
//! db.set_variable("PATH", "/usr/local/bin:/usr/bin").unwrap();
//!
//! for record in db.list_variables().unwrap() {
//!     println!("{} = {}", record.name, record.value);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, default_machine_dir, resolve_data_dir, resolve_machine_dir,
    DatabaseConfig, DATA_DIR_ENV, MACHINE_DIR_ENV,
};
pub use connection::Database;
pub use operations::VariableRecord;
pub use schema::DATABASE_FILE_NAME;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
