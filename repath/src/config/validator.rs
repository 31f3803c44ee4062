//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::pathlist::is_entry_separator;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use repath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { delimiter: Some("/".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref variable) = config.variable {
            Self::validate_variable(variable)?;
        }

        if let Some(ref delimiter) = config.delimiter {
            let c = Self::single_char("delimiter", delimiter)?;
            if is_entry_separator(c) {
                return Err(Error::Validation {
                    field: "delimiter".into(),
                    message: format!("'{c}' is a path separator"),
                });
            }
        }

        if let Some(ref prefixes) = config.option_prefixes {
            if prefixes.chars().any(char::is_whitespace) {
                return Err(Error::Validation {
                    field: "option_prefixes".into(),
                    message: "Cannot contain whitespace".into(),
                });
            }
        }

        if let Some(ref separator) = config.option_separator {
            let c = Self::single_char("option_separator", separator)?;
            if config.option_prefix_chars().contains(&c) {
                return Err(Error::Validation {
                    field: "option_separator".into(),
                    message: format!("'{c}' is also an option prefix"),
                });
            }
        }

        if config.busy_timeout_seconds == Some(0) {
            return Err(Error::Validation {
                field: "busy_timeout_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        Ok(())
    }

    /// Validate a variable name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains `=` or a NUL byte.
    pub fn validate_variable(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                field: "variable".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }
        if name.contains(['=', '\0']) {
            return Err(Error::Validation {
                field: "variable".into(),
                message: "Cannot contain '=' or null bytes".into(),
            });
        }
        Ok(())
    }

    fn single_char(field: &str, value: &str) -> Result<char> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Must be a single character, got '{value}'"),
            }),
        }
    }
}
