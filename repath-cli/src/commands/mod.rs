//! CLI command implementations.
//!
//! The operation selected by the option tokens picks the command:
//! - `help`: print usage
//! - `list`: print the cleaned list without writing
//! - `edit`: append, prefix, remove, or clean, then commit

pub mod edit;
pub mod help;
pub mod list;

use crate::error::CliError;
use crate::utils::{build_invocation, load_configuration, resolve_options, GlobalOptions};
use repath::{init_logger, Config, Invocation, Logger, Operation, OptionSet, TraceLevel};

/// Everything a command needs, resolved once per run.
pub struct CommandContext<'a> {
    /// Global command-line options.
    pub global: &'a GlobalOptions,
    /// The effective configuration.
    pub config: Config,
    /// The resolved option tokens.
    pub options: OptionSet,
    /// The validated invocation.
    pub invocation: Invocation,
    /// The logger, also used as the trace sink.
    pub logger: Logger,
}

impl CommandContext<'_> {
    /// The variable being edited.
    pub fn variable(&self) -> &str {
        self.config.variable_name()
    }

    /// Traces the resolved options, one line each.
    pub fn trace_options(&self) {
        if self.logger.enabled(TraceLevel::Debug) {
            for line in self.options.to_string().lines() {
                self.logger.debug(line);
            }
        }
    }
}

/// Resolves `tokens` and runs the selected command.
pub fn execute(tokens: &[String], global: &GlobalOptions) -> Result<(), CliError> {
    let config = load_configuration(global)?;
    let options = resolve_options(tokens, &config)?;

    let invocation = build_invocation(&options, &config);

    // A rejected invocation still reports the token warnings at normal level.
    let verbose = invocation.as_ref().is_ok_and(|inv| inv.policy.verbose);
    let logger = init_logger(verbose, global.quiet);
    for warning in options.warnings() {
        logger.warn(warning);
    }
    for note in options.notes() {
        logger.debug(note);
    }

    let invocation = invocation?;

    let ctx = CommandContext {
        global,
        config,
        options,
        invocation,
        logger,
    };

    match ctx.invocation.operation {
        Operation::Help => help::execute(&ctx),
        Operation::List => list::execute(&ctx),
        Operation::Append(_) | Operation::Prefix(_) | Operation::Remove(_) | Operation::Clean => {
            edit::execute(&ctx)
        }
    }
}
