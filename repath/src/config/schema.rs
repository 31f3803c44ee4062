//! Configuration schema definitions.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::invocation::Target;
use crate::options::{DEFAULT_PREFIXES, DEFAULT_SEPARATOR};
use crate::pathlist::platform_delimiter;

/// Variable edited when none is configured.
pub const DEFAULT_VARIABLE: &str = "PATH";

/// Default database busy timeout, in seconds.
pub const DEFAULT_BUSY_TIMEOUT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional; accessors supply the defaults. Values are merged
/// from the user config file, `REPATH_*` environment variables, and
/// programmatic overrides (see [`ConfigBuilder`](super::ConfigBuilder)).
///
/// # Examples
///
/// ```
/// use repath::config::Config;
///
/// let config: Config = serde_yaml::from_str("variable: MANPATH\ndelimiter: ';'\n").unwrap();
/// assert_eq!(config.variable_name(), "MANPATH");
/// assert_eq!(config.delimiter_char(), ';');
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the variable to edit.
    pub variable: Option<String>,

    /// List delimiter (a single character).
    pub delimiter: Option<String>,

    /// Characters stripped around option names.
    pub option_prefixes: Option<String>,

    /// Separator between an option name and its payload (a single character).
    pub option_separator: Option<String>,

    /// Match option names case-sensitively.
    pub case_sensitive_options: Option<bool>,

    /// Treat unrecognized options as errors.
    pub strict_options: Option<bool>,

    /// Scope used when no target option is given.
    pub default_target: Option<Target>,

    /// Fix entries to their on-disk case.
    pub fix_case: Option<bool>,

    /// Keep entries that do not exist.
    pub keep_orphans: Option<bool>,

    /// Keep repeated entries.
    pub keep_duplicates: Option<bool>,

    /// Output format for the command-line tool.
    pub output_format: Option<OutputFormat>,

    /// Maximum time to wait for a locked database (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// Directory holding the machine scope database.
    pub machine_dir: Option<PathBuf>,
}

impl Config {
    /// The variable to edit, `PATH` by default.
    #[must_use]
    pub fn variable_name(&self) -> &str {
        self.variable.as_deref().unwrap_or(DEFAULT_VARIABLE)
    }

    /// The list delimiter, the platform's `PATH` delimiter by default.
    #[must_use]
    pub fn delimiter_char(&self) -> char {
        first_char(self.delimiter.as_deref()).unwrap_or_else(platform_delimiter)
    }

    /// Characters stripped around option names.
    #[must_use]
    pub fn option_prefix_chars(&self) -> Vec<char> {
        self.option_prefixes.as_deref().map_or_else(
            || DEFAULT_PREFIXES.to_vec(),
            |prefixes| prefixes.chars().collect(),
        )
    }

    /// The option name/payload separator.
    #[must_use]
    pub fn option_separator_char(&self) -> char {
        first_char(self.option_separator.as_deref()).unwrap_or(DEFAULT_SEPARATOR)
    }

    /// Database busy timeout.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(
            self.busy_timeout_seconds
                .unwrap_or(DEFAULT_BUSY_TIMEOUT_SECONDS),
        )
    }

    /// Output format, human-readable by default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

fn first_char(value: Option<&str>) -> Option<char> {
    value.and_then(|v| v.chars().next())
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use repath::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// assert_eq!(OutputFormat::default(), OutputFormat::Human);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line.
    #[default]
    Human,
    /// A JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}
