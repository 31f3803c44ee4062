//! Diagnostics: a leveled stderr [`Logger`] and the [`TraceSink`] seam the
//! path-list engine reports through.

use std::cell::RefCell;
use std::env;
use std::fmt;

/// How much goes to stderr, ordered from `Quiet` up to `Verbose`.
///
/// # Examples
///
/// ```
/// use repath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but the final result.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including per-entry traces.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses `quiet`, `normal` or `verbose`, ignoring case.
    ///
    /// # Errors
    ///
    /// Any other word is rejected with a message naming it.
    ///
    /// # Examples
    ///
    /// ```
    /// use repath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        [Self::Quiet, Self::Normal, Self::Verbose]
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(&level.to_string()))
            .ok_or_else(|| format!("unknown log mode '{s}'"))
    }
}

/// Severity of a single trace message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLevel {
    /// Something failed but the run continues.
    Error,
    /// Something the user should look at.
    Warn,
    /// A change made to the list (case correction, dropped entry).
    Info,
    /// Internal detail.
    Debug,
}

impl TraceLevel {
    /// The logger level at which messages of this severity become visible.
    #[must_use]
    pub const fn threshold(self) -> LogLevel {
        match self {
            Self::Error | Self::Warn => LogLevel::Normal,
            Self::Info | Self::Debug => LogLevel::Verbose,
        }
    }

    const fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

/// Receiver for trace messages emitted while editing a path list.
///
/// The engine never prints; whoever drives it decides whether and where
/// messages are rendered.
pub trait TraceSink {
    /// Record one message.
    fn trace(&self, level: TraceLevel, message: &str);
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn trace(&self, _level: TraceLevel, _message: &str) {}
}

/// A sink that keeps every message in memory.
///
/// # Examples
///
/// ```
/// use repath::{RecordingSink, TraceLevel, TraceSink};
///
/// let sink = RecordingSink::new();
/// sink.trace(TraceLevel::Info, "Orphan skipped: /gone");
/// assert!(sink.contains("Orphan skipped"));
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: RefCell<Vec<(TraceLevel, String)>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded message in order.
    #[must_use]
    pub fn messages(&self) -> Vec<(TraceLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Whether any recorded message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(_, message)| message.contains(needle))
    }
}

impl TraceSink for RecordingSink {
    fn trace(&self, level: TraceLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

/// Prefixes each message with its severity and prints it to stderr when the
/// configured [`LogLevel`] allows.
///
/// ```
/// use repath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("Path not found: /opt/tool");
/// logger.info("dropped at Normal");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger printing at `level` and below.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a message of the given severity would be printed.
    #[must_use]
    pub fn enabled(&self, level: TraceLevel) -> bool {
        self.level >= level.threshold()
    }

    fn emit(&self, level: TraceLevel, message: &str) {
        if self.enabled(level) {
            eprintln!("{}: {message}", level.tag());
        }
    }

    /// Prints `ERROR: message` unless quiet.
    pub fn error(&self, message: &str) {
        self.emit(TraceLevel::Error, message);
    }

    /// Prints `WARN: message` unless quiet.
    pub fn warn(&self, message: &str) {
        self.emit(TraceLevel::Warn, message);
    }

    /// Prints `INFO: message` when verbose.
    pub fn info(&self, message: &str) {
        self.emit(TraceLevel::Info, message);
    }

    /// Prints `DEBUG: message` when verbose.
    pub fn debug(&self, message: &str) {
        self.emit(TraceLevel::Debug, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl TraceSink for Logger {
    fn trace(&self, level: TraceLevel, message: &str) {
        self.emit(level, message);
    }
}

/// Picks the run's logger.
///
/// `/Verbose` beats `--quiet`, and either beats `REPATH_LOG_MODE`. An
/// unparseable `REPATH_LOG_MODE` is ignored in favour of `Normal`.
///
/// # Examples
///
/// ```
/// use repath::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var("REPATH_LOG_MODE")
            .ok()
            .and_then(|mode| LogLevel::parse(&mode).ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}
