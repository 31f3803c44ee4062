//! Schema bootstrap and version gate for scope databases.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_METADATA_TABLE, CREATE_VARIABLES_TABLE, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION,
    SELECT_SCHEMA_VERSION,
};

/// Creates the `metadata` and `variables` tables in an empty database and
/// stamps them with [`CURRENT_SCHEMA_VERSION`].
///
/// # Errors
///
/// Fails when a `CREATE` or `INSERT` statement is rejected.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use repath::database::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_VARIABLES_TABLE, [])?;
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION.to_string()])?;
    Ok(())
}

/// Reads the stamped schema version; an unstamped database reports `0`.
///
/// # Errors
///
/// Fails on any query error other than a missing table or row.
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // "no such table" surfaces as a generic SQLITE_ERROR.
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Bootstraps an unstamped database, or rejects one stamped with a version
/// other than [`CURRENT_SCHEMA_VERSION`].
///
/// # Errors
///
/// [`Error::Validation`] on a version mismatch; otherwise any SQL failure.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let found = get_schema_version(conn)?;
    let relation = match found.cmp(&CURRENT_SCHEMA_VERSION) {
        _ if found == 0 => return initialize_schema(conn),
        std::cmp::Ordering::Equal => return Ok(()),
        std::cmp::Ordering::Less => "older",
        std::cmp::Ordering::Greater => "newer",
    };

    Err(Error::Validation {
        field: "schema_version".into(),
        message: format!(
            "env.db uses schema version {found}, which is {relation} than client version {CURRENT_SCHEMA_VERSION}; recreate the file or run a matching repath"
        ),
    })
}
