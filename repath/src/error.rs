//! Error types for the repath library.
//!
//! This module provides the error hierarchy for option resolution, path-list
//! editing, and environment store access, using `thiserror` for ergonomic
//! error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::invocation::Target;

/// Result type alias for operations that may fail with a repath error.
///
/// # Examples
///
/// ```
/// use repath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the repath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line selected conflicting options or omitted a required
    /// payload. Always raised before the store is touched.
    #[error("usage error: {message}")]
    Usage {
        /// A description of the misuse.
        message: String,
    },

    /// A raw option token did not name a known option.
    ///
    /// The resolver only collects these as warnings; this variant is used
    /// when the caller decides that unknown options are fatal.
    #[error("unrecognized option: {token}")]
    UnrecognizedOption {
        /// The rejected token.
        token: String,
    },

    /// Reading a variable from the environment store failed.
    #[error("cannot read {variable} ({target}): {reason}")]
    StoreRead {
        /// The variable name.
        variable: String,
        /// The scope that was read.
        target: Target,
        /// The underlying failure.
        reason: String,
    },

    /// Writing a variable to the environment store failed.
    #[error("cannot write {variable} ({target}): {reason}")]
    StoreWrite {
        /// The variable name.
        variable: String,
        /// The scope that was written.
        target: Target,
        /// The underlying failure.
        reason: String,
    },

    /// The entry to remove is not part of the list.
    #[error("entry not found: {entry}")]
    NotFound {
        /// The entry that was looked up.
        entry: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Shorthand for building a [`Error::Usage`].
    ///
    /// # Examples
    ///
    /// ```
    /// use repath::Error;
    ///
    /// let err = Error::usage("You can only choose one target");
    /// assert!(err.is_usage());
    /// ```
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Check if the error is a usage error.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. } | Self::UnrecognizedOption { .. })
    }

    /// Check if the error came from the environment store.
    ///
    /// # Examples
    ///
    /// ```
    /// use repath::{Error, Target};
    ///
    /// let err = Error::StoreWrite {
    ///     variable: "PATH".into(),
    ///     target: Target::Machine,
    ///     reason: "permission denied".into(),
    /// };
    /// assert!(err.is_store_error());
    /// ```
    #[must_use]
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::StoreRead { .. } | Self::StoreWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error() {
        let err = Error::usage("You can only choose one operation");
        let display = format!("{err}");
        assert!(display.contains("usage error"));
        assert!(display.contains("one operation"));
        assert!(err.is_usage());
        assert!(!err.is_store_error());
    }

    #[test]
    fn test_unrecognized_option_is_usage() {
        let err = Error::UnrecognizedOption {
            token: "/Bogus".to_string(),
        };
        assert!(format!("{err}").contains("/Bogus"));
        assert!(err.is_usage());
    }

    #[test]
    fn test_store_errors() {
        let read = Error::StoreRead {
            variable: "PATH".to_string(),
            target: Target::User,
            reason: "corrupt".to_string(),
        };
        let display = format!("{read}");
        assert!(display.contains("cannot read PATH"));
        assert!(display.contains("user"));
        assert!(read.is_store_error());

        let write = Error::StoreWrite {
            variable: "PATH".to_string(),
            target: Target::Machine,
            reason: "permission denied".to_string(),
        };
        let display = format!("{write}");
        assert!(display.contains("cannot write PATH"));
        assert!(display.contains("machine"));
        assert!(display.contains("permission denied"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            entry: "/opt/tool/bin".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("entry not found"));
        assert!(display.contains("/opt/tool/bin"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "delimiter".to_string(),
            message: "must be a single character".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("delimiter"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
