//! Database schema definitions and SQL constants.
//!
//! One database holds the variables of one persistent scope: the user
//! database lives in the data directory, the machine database in the machine
//! directory.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// File name of a scope database inside its directory.
pub const DATABASE_FILE_NAME: &str = "env.db";

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the variables table.
///
/// Names are stored as given; `updated_at` is Unix epoch seconds of the last
/// write.
pub const CREATE_VARIABLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS variables (
        name TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert or replace a variable.
pub const UPSERT_VARIABLE: &str = r"
    INSERT OR REPLACE INTO variables (name, value, updated_at)
    VALUES (?, ?, ?)
";

/// SQL statement to delete a variable by name.
pub const DELETE_VARIABLE: &str = "DELETE FROM variables WHERE name = ?";
