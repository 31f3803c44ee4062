//! CLI structure.
//!
//! The tool has no subcommands: everything after the global flags is a raw
//! `/Name[:value]` option token handed to the option resolver unchanged.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Clean and edit PATH-style environment variables.
#[derive(Parser, Debug)]
#[command(name = "repath")]
#[command(
    version,
    about = "Clean and edit PATH-style environment variables",
    long_about = None,
    after_help = "Options are given as /Name[:value] tokens, for example:\n  \
                  repath /Append:/opt/tool/bin /User\n  \
                  repath /Clean /Machine /WhatIf\n\
                  Run `repath /Help` for the full list."
)]
pub struct Cli {
    /// Suppress warnings and non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Override the user data directory location
    #[arg(long, value_name = "PATH", env = "REPATH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the machine data directory location
    #[arg(long, value_name = "PATH", env = "REPATH_MACHINE_DIR")]
    pub machine_dir: Option<PathBuf>,

    /// Variable to edit (defaults to PATH)
    #[arg(long, value_name = "NAME")]
    pub variable: Option<String>,

    /// List delimiter (defaults to the platform's PATH delimiter)
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Treat unrecognized options as errors
    #[arg(long)]
    pub strict: bool,

    /// Match option names case-sensitively
    #[arg(long)]
    pub case_sensitive_options: bool,

    /// Override the database busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub busy_timeout: Option<u64>,

    /// Option tokens such as /List, /Append:<path>, /Machine, /WhatIf
    #[arg(value_name = "OPTION", allow_hyphen_values = true)]
    pub options: Vec<String>,
}

/// Output format selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Plain text, one entry per line
    Human,
    /// A JSON document
    Json,
}

impl From<FormatArg> for repath::config::OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Human => Self::Human,
            FormatArg::Json => Self::Json,
        }
    }
}
