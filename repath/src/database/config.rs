//! Where each scope's `env.db` lives and how it is opened.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

use super::schema::DATABASE_FILE_NAME;

/// Environment variable overriding the user data directory.
pub const DATA_DIR_ENV: &str = "REPATH_DATA_DIR";

/// Environment variable overriding the machine data directory.
pub const MACHINE_DIR_ENV: &str = "REPATH_MACHINE_DIR";

/// Open parameters for one scope database.
///
/// ```
/// use repath::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/env.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// The `env.db` file.
    pub path: PathBuf,
    /// How long to wait on a file another process has locked.
    pub busy_timeout: Duration,
    /// Create the file and its directory when missing.
    pub auto_create: bool,
    /// Open without write access.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// A writable, self-creating handle on `path` with a five second busy
    /// timeout.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_secs(5),
            auto_create: true,
            read_only: false,
        }
    }

    /// Configuration for the scope database stored in `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Replaces the busy timeout.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Read-only handles never create the file.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// `~/.repath`.
///
/// # Errors
///
/// [`Error::Validation`] when there is no home directory.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".repath"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "no home directory to place ~/.repath in".into(),
        })
}

/// Returns the default machine data directory.
///
/// This is `%PROGRAMDATA%\repath` on Windows (falling back to
/// `C:\ProgramData\repath`) and `/etc/repath` elsewhere.
#[must_use]
pub fn default_machine_dir() -> PathBuf {
    if cfg!(windows) {
        env::var_os("PROGRAMDATA")
            .map_or_else(|| PathBuf::from(r"C:\ProgramData"), PathBuf::from)
            .join("repath")
    } else {
        PathBuf::from("/etc/repath")
    }
}

/// The user scope directory: a non-empty `$REPATH_DATA_DIR`, else
/// [`default_data_dir`].
///
/// # Errors
///
/// Only when falling back and there is no home directory.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the machine data directory.
///
/// An explicit (configured) directory wins, then `$REPATH_MACHINE_DIR`, then
/// [`default_machine_dir`].
#[must_use]
pub fn resolve_machine_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }
    match env::var_os(MACHINE_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => default_machine_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_new() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_in_dir() {
        let config = DatabaseConfig::in_dir("/data");
        assert_eq!(config.path, Path::new("/data").join("env.db"));
    }

    #[test]
    fn test_config_read_only() {
        let config = DatabaseConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

    #[test]
    #[serial]
    fn test_resolve_data_dir() {
        env::remove_var(DATA_DIR_ENV);
        if let Ok(dir) = resolve_data_dir() {
            assert!(dir.ends_with(".repath"));
        }

        env::set_var(DATA_DIR_ENV, "/custom/data");
        assert_eq!(resolve_data_dir().unwrap(), PathBuf::from("/custom/data"));

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_machine_dir() {
        env::remove_var(MACHINE_DIR_ENV);
        assert_eq!(resolve_machine_dir(None), default_machine_dir());

        env::set_var(MACHINE_DIR_ENV, "/custom/machine");
        assert_eq!(resolve_machine_dir(None), PathBuf::from("/custom/machine"));
        assert_eq!(
            resolve_machine_dir(Some(Path::new("/configured"))),
            PathBuf::from("/configured")
        );

        env::remove_var(MACHINE_DIR_ENV);
    }

    #[test]
    fn test_default_machine_dir_ends_with_repath() {
        assert!(default_machine_dir().ends_with("repath"));
    }
}
