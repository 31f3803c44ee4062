//! List command implementation.
//!
//! Prints the cleaned list of the selected variable. Cleaning is applied in
//! memory only; the store is never written.

use super::CommandContext;
use crate::error::CliError;
use crate::output::{write_json, write_list, Report};
use crate::utils::{format_timestamp, open_store};
use repath::config::OutputFormat;
use repath::{EnvironmentStore, PathEditor, RealFileSystem};

/// Execute the list command.
pub fn execute(ctx: &CommandContext<'_>) -> Result<(), CliError> {
    ctx.trace_options();

    let store = open_store(ctx.global, &ctx.config)?;
    let editor = PathEditor::new(
        &store,
        &RealFileSystem,
        &ctx.logger,
        ctx.config.delimiter_char(),
    );
    let plan = editor.plan(&ctx.invocation, ctx.variable())?;

    let updated_at = match store.last_modified(&plan.variable, plan.target) {
        Ok(ts) => ts.map(format_timestamp),
        Err(e) => {
            ctx.logger.warn(&e.to_string());
            None
        }
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match ctx.config.output_format() {
        OutputFormat::Human => {
            if let Some(ref ts) = updated_at {
                ctx.logger.info(&format!("Last modified: {ts}"));
            }
            write_list(&mut handle, &plan)?;
        }
        OutputFormat::Json => {
            write_json(&mut handle, &Report::new(&plan).with_updated_at(updated_at))?;
        }
    }

    Ok(())
}
