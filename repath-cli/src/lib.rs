//! Library exports for repath-cli.
//!
//! The binary is a thin wrapper over these modules; the CLI structure is also
//! exported for documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
pub use utils::GlobalOptions;
