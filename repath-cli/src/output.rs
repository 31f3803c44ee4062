//! Rendering of plans and outcomes.
//!
//! Everything here writes to a caller-supplied writer so commands can target
//! stdout and tests can target a buffer.

use repath::{EditPlan, ReconcileOutcome};
use serde::Serialize;
use std::io::{self, Write};

/// The JSON document printed with `--format json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// The plan, flattened into the top level.
    #[serde(flatten)]
    pub plan: &'a EditPlan,

    /// When the variable was last written, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// What committing the plan did; absent for read-only and refused plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a ReconcileOutcome>,
}

impl<'a> Report<'a> {
    /// A report carrying only the plan.
    pub fn new(plan: &'a EditPlan) -> Self {
        Self {
            plan,
            updated_at: None,
            result: None,
        }
    }

    /// Adds the last-modified timestamp.
    #[must_use]
    pub fn with_updated_at(mut self, updated_at: Option<String>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Adds the commit outcome.
    #[must_use]
    pub fn with_result(mut self, result: Option<&'a ReconcileOutcome>) -> Self {
        self.result = result;
        self
    }
}

/// Writes one entry per line, entries that are not directories in brackets.
pub fn write_list<W: Write>(out: &mut W, plan: &EditPlan) -> io::Result<()> {
    for entry in &plan.entries {
        if entry.exists {
            writeln!(out, "{}", entry.path)?;
        } else {
            writeln!(out, "[{}]", entry.path)?;
        }
    }
    Ok(())
}

/// Writes the one-line summary of a mutating run.
///
/// Nothing is written for a failed write or a refused plan; those are
/// reported as errors by the caller.
pub fn write_outcome<W: Write>(
    out: &mut W,
    plan: &EditPlan,
    outcome: Option<&ReconcileOutcome>,
) -> io::Result<()> {
    let scope = format!("{} ({})", plan.variable, plan.target);
    match outcome {
        Some(ReconcileOutcome::NoOp { .. }) => {
            writeln!(out, "No change: {scope} is already up to date")
        }
        Some(ReconcileOutcome::Preview { value }) => {
            writeln!(out, "What if: {scope} would be set to: {value}")
        }
        Some(ReconcileOutcome::Declined { .. }) => {
            writeln!(out, "Declined: {scope} left unchanged")
        }
        Some(ReconcileOutcome::Confirmed { value }) => {
            writeln!(out, "Updated {scope}: {value}")
        }
        Some(ReconcileOutcome::WriteFailed { .. }) | None => Ok(()),
    }
}

/// Writes a report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &Report<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
