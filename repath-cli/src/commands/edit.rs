//! Mutating commands: append, prefix, remove, and clean.
//!
//! The edit is planned first; only a ready plan is committed. A refused plan
//! (entry not found, entry not added) and a failed write are semantic
//! failures.

use super::CommandContext;
use crate::error::CliError;
use crate::output::{write_json, write_outcome, Report};
use crate::utils::{open_store, StdinPrompt};
use repath::config::OutputFormat;
use repath::{PathEditor, PlanStatus, RealFileSystem, ReconcileOutcome, Target};

/// Execute a mutating command.
pub fn execute(ctx: &CommandContext<'_>) -> Result<(), CliError> {
    ctx.trace_options();

    let store = open_store(ctx.global, &ctx.config)?;
    let editor = PathEditor::new(
        &store,
        &RealFileSystem,
        &ctx.logger,
        ctx.config.delimiter_char(),
    )
    .with_prompt(&StdinPrompt);

    let plan = editor.plan(&ctx.invocation, ctx.variable())?;
    let outcome = editor.commit(&plan, &ctx.invocation.policy);

    {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match ctx.config.output_format() {
            OutputFormat::Human => write_outcome(&mut handle, &plan, outcome.as_ref())?,
            OutputFormat::Json => {
                write_json(&mut handle, &Report::new(&plan).with_result(outcome.as_ref()))?;
            }
        }
    }

    match outcome {
        Some(ReconcileOutcome::WriteFailed { reason, .. }) => Err(CliError::SemanticFailure(
            format!("Could not write {} ({}): {reason}", plan.variable, plan.target),
        )),
        Some(outcome) => {
            if outcome.wrote() && plan.target == Target::Process {
                ctx.logger
                    .warn("Process scope changes last only until repath exits");
            }
            Ok(())
        }
        None => match plan.status {
            PlanStatus::NotFound { .. } | PlanStatus::NotAdded { .. } => {
                Err(CliError::SemanticFailure(plan.status.to_string()))
            }
            PlanStatus::Ready | PlanStatus::ReadOnly => Ok(()),
        },
    }
}
