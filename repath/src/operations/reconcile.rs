//! Committing a candidate value to the store.

use serde::Serialize;

use crate::invocation::{Policy, Target};
use crate::logging::{TraceLevel, TraceSink};
use crate::store::EnvironmentStore;

/// How a commit ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReconcileOutcome {
    /// The candidate equals the stored value; nothing was written.
    NoOp {
        /// The unchanged value.
        value: String,
    },
    /// What-if mode; the candidate was not written.
    Preview {
        /// The value that would have been written.
        value: String,
    },
    /// Confirmation was requested and refused; nothing was written.
    Declined {
        /// The value that was proposed.
        value: String,
    },
    /// The candidate was written and read back unchanged.
    Confirmed {
        /// The value now stored.
        value: String,
    },
    /// The write failed, or the value read back differs.
    WriteFailed {
        /// The value that was meant to be stored.
        value: String,
        /// Why the commit failed.
        reason: String,
    },
}

impl ReconcileOutcome {
    /// Whether the run should count as successful.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::WriteFailed { .. })
    }

    /// Whether the store was written.
    #[must_use]
    pub const fn wrote(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    /// The candidate value the outcome refers to.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::NoOp { value }
            | Self::Preview { value }
            | Self::Declined { value }
            | Self::Confirmed { value }
            | Self::WriteFailed { value, .. } => value,
        }
    }
}

/// Asks whether a change should be written.
pub trait ConfirmationPrompt {
    /// Returns `true` to write `proposed` over `current`.
    fn confirm(&self, variable: &str, target: Target, current: &str, proposed: &str) -> bool;
}

impl<F> ConfirmationPrompt for F
where
    F: Fn(&str, Target, &str, &str) -> bool,
{
    fn confirm(&self, variable: &str, target: Target, current: &str, proposed: &str) -> bool {
        self(variable, target, current, proposed)
    }
}

/// A prompt that refuses every change.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclineAll;

impl ConfirmationPrompt for DeclineAll {
    fn confirm(&self, _: &str, _: Target, _: &str, _: &str) -> bool {
        false
    }
}

/// Writes a candidate value and verifies it.
///
/// # Examples
///
/// ```
/// use repath::operations::{ReconcileOutcome, Reconciler};
/// use repath::store::{EnvironmentStore, MemoryStore};
/// use repath::{NullSink, Policy, Target};
///
/// let store = MemoryStore::new().with_value(Target::User, "PATH", "/a");
/// let reconciler = Reconciler::new(&store, &NullSink);
///
/// let outcome = reconciler.reconcile("PATH", Target::User, "/a", &Policy::default());
/// assert!(matches!(outcome, ReconcileOutcome::NoOp { .. }));
///
/// let outcome = reconciler.reconcile("PATH", Target::User, "/a:/b", &Policy::default());
/// assert!(outcome.wrote());
/// assert_eq!(store.read("PATH", Target::User).unwrap(), "/a:/b");
/// ```
pub struct Reconciler<'a> {
    store: &'a dyn EnvironmentStore,
    sink: &'a dyn TraceSink,
    prompt: &'a dyn ConfirmationPrompt,
}

impl<'a> Reconciler<'a> {
    /// Creates a reconciler that declines whenever confirmation is requested.
    #[must_use]
    pub fn new(store: &'a dyn EnvironmentStore, sink: &'a dyn TraceSink) -> Self {
        Self {
            store,
            sink,
            prompt: &DeclineAll,
        }
    }

    /// Sets the prompt consulted when the policy asks for confirmation.
    #[must_use]
    pub fn with_prompt(mut self, prompt: &'a dyn ConfirmationPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    /// Commits `candidate` as the value of `variable` in `target`.
    ///
    /// The order of checks is: unchanged value, what-if, confirmation, write,
    /// read-back. Failures never escape as errors; they become
    /// [`ReconcileOutcome::WriteFailed`].
    pub fn reconcile(
        &self,
        variable: &str,
        target: Target,
        candidate: &str,
        policy: &Policy,
    ) -> ReconcileOutcome {
        let current = self.read_or_empty(variable, target);
        let value = candidate.to_string();

        if current == candidate {
            self.sink
                .trace(TraceLevel::Debug, &format!("{variable} ({target}) is unchanged"));
            return ReconcileOutcome::NoOp { value };
        }

        if policy.what_if {
            self.sink.trace(
                TraceLevel::Info,
                &format!("What-if: {variable} ({target}) would be set to {candidate}"),
            );
            return ReconcileOutcome::Preview { value };
        }

        if policy.confirm && !self.prompt.confirm(variable, target, &current, candidate) {
            self.sink
                .trace(TraceLevel::Info, &format!("Change to {variable} ({target}) declined"));
            return ReconcileOutcome::Declined { value };
        }

        if let Err(e) = self.store.write(variable, target, candidate) {
            self.sink.trace(TraceLevel::Error, &e.to_string());
            return ReconcileOutcome::WriteFailed {
                value,
                reason: e.to_string(),
            };
        }

        match self.store.read(variable, target) {
            Ok(stored) if stored == candidate => {
                self.sink
                    .trace(TraceLevel::Debug, &format!("{variable} ({target}) written"));
                ReconcileOutcome::Confirmed { value }
            }
            Ok(_) => ReconcileOutcome::WriteFailed {
                value,
                reason: "the value read back differs from the value written".to_string(),
            },
            Err(e) => ReconcileOutcome::WriteFailed {
                value,
                reason: format!("cannot verify the write: {e}"),
            },
        }
    }

    /// Reads the current value; a failing read is traced and treated as empty.
    pub(crate) fn read_or_empty(&self, variable: &str, target: Target) -> String {
        self.store.read(variable, target).unwrap_or_else(|e| {
            self.sink.trace(
                TraceLevel::Warn,
                &format!("{e}; treating the current value as empty"),
            );
            String::new()
        })
    }
}
