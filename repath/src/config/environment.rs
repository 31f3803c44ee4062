//! Environment variable handling for configuration overrides.
//!
//! Every configuration field can be overridden by a `REPATH_*` variable named
//! after it, e.g. `REPATH_KEEP_ORPHANS=yes` or `REPATH_DEFAULT_TARGET=machine`.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, OutputFormat};
use crate::database::MACHINE_DIR_ENV;
use crate::error::{Error, Result};
use crate::invocation::Target;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use repath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric timeout, invalid boolean, unknown target).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(variable) = env::var("REPATH_VARIABLE") {
            config.variable = Some(variable);
        }

        if let Ok(delimiter) = env::var("REPATH_DELIMITER") {
            config.delimiter = Some(delimiter);
        }

        if let Ok(prefixes) = env::var("REPATH_OPTION_PREFIXES") {
            config.option_prefixes = Some(prefixes);
        }

        if let Ok(separator) = env::var("REPATH_OPTION_SEPARATOR") {
            config.option_separator = Some(separator);
        }

        if let Some(dir) = env::var_os(MACHINE_DIR_ENV) {
            if !dir.is_empty() {
                config.machine_dir = Some(PathBuf::from(dir));
            }
        }

        Self::apply_bool("REPATH_CASE_SENSITIVE_OPTIONS", &mut config.case_sensitive_options)?;
        Self::apply_bool("REPATH_STRICT_OPTIONS", &mut config.strict_options)?;
        Self::apply_bool("REPATH_FIX_CASE", &mut config.fix_case)?;
        Self::apply_bool("REPATH_KEEP_ORPHANS", &mut config.keep_orphans)?;
        Self::apply_bool("REPATH_KEEP_DUPLICATES", &mut config.keep_duplicates)?;

        if let Ok(target) = env::var("REPATH_DEFAULT_TARGET") {
            config.default_target = Some(Self::parse_target(&target)?);
        }

        if let Ok(format) = env::var("REPATH_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_output_format(&format)?);
        }

        if let Ok(seconds) = env::var("REPATH_BUSY_TIMEOUT_SECONDS") {
            config.busy_timeout_seconds = Some(seconds.trim().parse().map_err(|_| {
                Error::Validation {
                    field: "REPATH_BUSY_TIMEOUT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                }
            })?);
        }

        Ok(())
    }

    fn apply_bool(name: &str, slot: &mut Option<bool>) -> Result<()> {
        if let Ok(val) = env::var(name) {
            *slot = Some(Self::parse_bool(name, &val)?);
        }
        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_target(s: &str) -> Result<Target> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Target::User),
            "process" => Ok(Target::Process),
            "machine" => Ok(Target::Machine),
            _ => Err(Error::Validation {
                field: "REPATH_DEFAULT_TARGET".into(),
                message: format!("Invalid target: '{s}' (expected user/process/machine)"),
            }),
        }
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::Validation {
                field: "REPATH_OUTPUT_FORMAT".into(),
                message: format!("Invalid output format: '{s}' (expected human/json)"),
            }),
        }
    }
}
