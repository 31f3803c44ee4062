//! Edit operations using a plan-then-commit pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning** ([`PathEditor::plan`]): read the current value, normalize
//!    it, apply the requested mutation in memory
//! 2. **Committing** ([`PathEditor::commit`], [`Reconciler::reconcile`]):
//!    write the candidate unless it is unchanged, previewed, or declined,
//!    then read it back to verify

pub mod plan;
pub mod reconcile;

pub use plan::{EditPlan, PathEditor, PlanStatus, PlannedEntry};
pub use reconcile::{ConfirmationPrompt, DeclineAll, ReconcileOutcome, Reconciler};
