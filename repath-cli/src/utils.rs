//! Utility functions for CLI operations.
//!
//! Configuration loading, option resolution, store construction, and the
//! interactive confirmation prompt shared by the commands.

use crate::cli::Cli;
use crate::error::CliError;
use repath::config::OutputFormat;
use repath::database::{resolve_data_dir, resolve_machine_dir};
use repath::operations::ConfirmationPrompt;
use repath::{
    Config, ConfigBuilder, Invocation, OptionResolver, OptionSet, PersistentStore, Target,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress warnings and non-essential output.
    pub quiet: bool,

    /// Override the user data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the machine data directory location.
    pub machine_dir: Option<PathBuf>,

    /// Variable to edit.
    pub variable: Option<String>,

    /// List delimiter.
    pub delimiter: Option<String>,

    /// Output format.
    pub format: Option<OutputFormat>,

    /// Treat unrecognized options as errors.
    pub strict: bool,

    /// Match option names case-sensitively.
    pub case_sensitive_options: bool,

    /// Override the database busy timeout (in seconds).
    pub busy_timeout: Option<u64>,
}

impl GlobalOptions {
    /// Extracts the global options from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            quiet: cli.quiet,
            data_dir: cli.data_dir.clone(),
            machine_dir: cli.machine_dir.clone(),
            variable: cli.variable.clone(),
            delimiter: cli.delimiter.clone(),
            format: cli.format.map(Into::into),
            strict: cli.strict,
            case_sensitive_options: cli.case_sensitive_options,
            busy_timeout: cli.busy_timeout,
        }
    }

    /// The configuration layer contributed by command-line flags.
    ///
    /// Boolean flags only ever switch behaviour on, so an absent flag leaves
    /// the file or environment setting alone.
    pub fn config_overrides(&self) -> Config {
        Config {
            variable: self.variable.clone(),
            delimiter: self.delimiter.clone(),
            case_sensitive_options: self.case_sensitive_options.then_some(true),
            strict_options: self.strict.then_some(true),
            output_format: self.format,
            busy_timeout_seconds: self.busy_timeout,
            machine_dir: self.machine_dir.clone(),
            ..Config::default()
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The user configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder
        .with_config(global.config_overrides())
        .build()
        .map_err(CliError::from)
}

/// Resolves raw option tokens with the configured prefixes, separator, and
/// case sensitivity.
///
/// In strict mode the first rejected token becomes an error.
pub fn resolve_options(tokens: &[String], config: &Config) -> Result<OptionSet, CliError> {
    let options = OptionResolver::from_config(config).resolve(tokens);

    if config.strict_options.unwrap_or(false) {
        if let Some(token) = options.rejected().first() {
            return Err(repath::Error::UnrecognizedOption {
                token: token.clone(),
            }
            .into());
        }
    }

    Ok(options)
}

/// Derives the invocation, mapping usage errors to exit code 4.
pub fn build_invocation(options: &OptionSet, config: &Config) -> Result<Invocation, CliError> {
    Invocation::from_options(options, config).map_err(CliError::from)
}

/// Opens the store backing every scope.
pub fn open_store(global: &GlobalOptions, config: &Config) -> Result<PersistentStore, CliError> {
    let data_dir = match global.data_dir {
        Some(ref dir) => dir.clone(),
        None => resolve_data_dir()?,
    };
    let machine_dir = resolve_machine_dir(config.machine_dir.as_deref());

    Ok(PersistentStore::new(data_dir, machine_dir).with_busy_timeout(config.busy_timeout()))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Asks on stderr and reads the answer from stdin.
///
/// Anything other than `y` or `yes` declines, including end of input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl StdinPrompt {
    fn ask(question: &str) -> io::Result<bool> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{question} [y/N] ")?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

impl ConfirmationPrompt for StdinPrompt {
    fn confirm(&self, variable: &str, target: Target, current: &str, proposed: &str) -> bool {
        eprintln!("Current {variable} ({target}): {current}");
        eprintln!("Proposed {variable} ({target}): {proposed}");
        Self::ask(&format!("Write {variable} ({target})?")).unwrap_or(false)
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use repath::OptionId;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_format_timestamp() {
        let ts = UNIX_EPOCH + Duration::from_secs(86_400 + 3_661);
        assert_eq!(format_timestamp(ts), "1970-01-02 01:01:01");
    }

    #[test]
    fn test_affirmative_answers() {
        for answer in ["y\n", "Y", " yes \n", "YES"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
        for answer in ["", "\n", "n", "no", "yep"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn test_overrides_leave_unset_flags_alone() {
        let global = GlobalOptions {
            variable: Some("MANPATH".into()),
            ..GlobalOptions::default()
        };
        let overrides = global.config_overrides();
        assert_eq!(overrides.variable.as_deref(), Some("MANPATH"));
        assert_eq!(overrides.strict_options, None);
        assert_eq!(overrides.case_sensitive_options, None);
        assert_eq!(overrides.output_format, None);
    }

    #[test]
    fn test_strict_mode_rejects_unknown_tokens() {
        let tokens = vec!["/Clean".to_string(), "/Bogus".to_string()];

        let lenient = resolve_options(&tokens, &Config::default()).unwrap();
        assert!(lenient.contains(OptionId::Clean));
        assert_eq!(lenient.warnings().len(), 1);

        let strict = Config {
            strict_options: Some(true),
            ..Config::default()
        };
        let err = resolve_options(&tokens, &strict).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("Bogus"));
    }
}
