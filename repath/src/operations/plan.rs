//! Planning an edit before anything is written.
//!
//! [`PathEditor::plan`] reads the current value, cleans it, and applies the
//! requested operation in memory. The resulting [`EditPlan`] can be shown to
//! the user as-is (for `List`) or handed to [`PathEditor::commit`].

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::invocation::{Invocation, Operation, Policy, Target};
use crate::logging::{TraceLevel, TraceSink};
use crate::pathlist::{FileSystem, InsertOutcome, PathNormalizer};
use crate::store::EnvironmentStore;

use super::reconcile::{ConfirmationPrompt, DeclineAll, ReconcileOutcome, Reconciler};

/// Whether a plan can be committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanStatus {
    /// The candidate value is ready to be committed.
    Ready,
    /// The operation never writes (`List`, `Help`).
    ReadOnly,
    /// `Remove` found no matching entry.
    NotFound {
        /// The entry that was looked up.
        entry: String,
    },
    /// `Append`/`Prefix` refused a missing directory.
    NotAdded {
        /// The entry that was refused.
        entry: String,
    },
}

impl PlanStatus {
    /// Whether the plan should be committed.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::ReadOnly => write!(f, "read-only"),
            Self::NotFound { entry } => write!(f, "{entry} is not in the list"),
            Self::NotAdded { entry } => {
                write!(f, "{entry} does not exist (use /KeepOrphans to add it anyway)")
            }
        }
    }
}

/// One entry of the planned list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedEntry {
    /// The entry as it will be written.
    pub path: String,
    /// Whether it currently resolves to a directory.
    pub exists: bool,
}

/// The result of planning an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditPlan {
    /// The variable being edited.
    pub variable: String,
    /// The scope being edited.
    pub target: Target,
    /// The operation, as a short name.
    pub operation: String,
    /// The value read from the store.
    pub current: String,
    /// The planned list.
    pub entries: Vec<PlannedEntry>,
    /// The planned list joined with the delimiter.
    pub candidate: String,
    /// Whether the plan can be committed.
    #[serde(flatten)]
    pub status: PlanStatus,
}

impl EditPlan {
    /// Whether the candidate differs from the current value.
    #[must_use]
    pub fn changes_value(&self) -> bool {
        self.current != self.candidate
    }

    /// The planned entry paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }
}

/// Plans and commits edits of one variable.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use repath::config::Config;
/// use repath::operations::{PathEditor, PlanStatus};
/// use repath::options::OptionResolver;
/// use repath::pathlist::MemoryFileSystem;
/// use repath::store::{EnvironmentStore, MemoryStore};
/// use repath::{Invocation, NullSink, Target};
///
/// let fs = MemoryFileSystem::new().with_dir("/usr/bin").with_dir("/opt/bin");
/// let store = MemoryStore::new().with_value(Target::User, "PATH", "/usr/bin:/gone");
/// let editor = PathEditor::new(&store, &fs, &NullSink, ':');
///
/// let options = OptionResolver::new().resolve(["/Append:/opt/bin"]);
/// let invocation = Invocation::from_options(&options, &Config::default()).unwrap();
///
/// let plan = editor.plan(&invocation, "PATH").unwrap();
/// assert_eq!(plan.status, PlanStatus::Ready);
/// assert_eq!(plan.candidate, "/usr/bin:/opt/bin");
///
/// let outcome = editor.commit(&plan, &invocation.policy).unwrap();
/// assert!(outcome.wrote());
/// assert_eq!(store.read("PATH", Target::User).unwrap(), "/usr/bin:/opt/bin");
/// # }
/// ```
pub struct PathEditor<'a> {
    store: &'a dyn EnvironmentStore,
    fs: &'a dyn FileSystem,
    sink: &'a dyn TraceSink,
    prompt: &'a dyn ConfirmationPrompt,
    delimiter: char,
}

impl<'a> PathEditor<'a> {
    /// Creates an editor; confirmation requests are declined until
    /// [`with_prompt`](Self::with_prompt) is called.
    #[must_use]
    pub fn new(
        store: &'a dyn EnvironmentStore,
        fs: &'a dyn FileSystem,
        sink: &'a dyn TraceSink,
        delimiter: char,
    ) -> Self {
        Self {
            store,
            fs,
            sink,
            prompt: &DeclineAll,
            delimiter,
        }
    }

    /// Sets the prompt used when the policy asks for confirmation.
    #[must_use]
    pub fn with_prompt(mut self, prompt: &'a dyn ConfirmationPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    fn reconciler(&self) -> Reconciler<'a> {
        Reconciler::new(self.store, self.sink).with_prompt(self.prompt)
    }

    /// Computes the outcome of `invocation` on `variable` without writing.
    ///
    /// # Errors
    ///
    /// Returns a usage error if the entry to add is empty after trimming.
    pub fn plan(&self, invocation: &Invocation, variable: &str) -> Result<EditPlan> {
        let target = invocation.target;
        let policy = &invocation.policy;
        let operation = &invocation.operation;

        self.sink
            .trace(TraceLevel::Info, &format!("Operation: {operation}"));
        self.sink.trace(TraceLevel::Info, &format!("Target: {target}"));

        if *operation == Operation::Help {
            return Ok(self.build(variable, invocation, String::new(), Vec::new(), PlanStatus::ReadOnly));
        }

        let current = self.reconciler().read_or_empty(variable, target);
        let normalizer = PathNormalizer::new(self.fs, self.sink, policy, self.delimiter);
        let entries = normalizer.normalize(&current);

        let (entries, status) = match operation {
            Operation::List | Operation::Help => (entries, PlanStatus::ReadOnly),
            Operation::Clean => (entries, PlanStatus::Ready),
            Operation::Append(entry) | Operation::Prefix(entry) => {
                let at_front = matches!(operation, Operation::Prefix(_));
                match normalizer.insert(entries, entry, at_front)? {
                    (entries, InsertOutcome::Added(_)) => (entries, PlanStatus::Ready),
                    (entries, InsertOutcome::NotAdded(entry)) => {
                        (entries, PlanStatus::NotAdded { entry })
                    }
                }
            }
            Operation::Remove(entry) => match normalizer.remove(entries, entry) {
                (entries, Some(_)) => (entries, PlanStatus::Ready),
                (entries, None) => (
                    entries,
                    PlanStatus::NotFound {
                        entry: entry.clone(),
                    },
                ),
            },
        };

        Ok(self.build(variable, invocation, current, entries, status))
    }

    fn build(
        &self,
        variable: &str,
        invocation: &Invocation,
        current: String,
        entries: Vec<String>,
        status: PlanStatus,
    ) -> EditPlan {
        let candidate = crate::pathlist::join_entries(&entries, self.delimiter);
        let entries = entries
            .into_iter()
            .map(|path| PlannedEntry {
                exists: self.fs.is_dir(std::path::Path::new(&path)),
                path,
            })
            .collect();

        EditPlan {
            variable: variable.to_string(),
            target: invocation.target,
            operation: invocation.operation.name().to_string(),
            current,
            entries,
            candidate,
            status,
        }
    }

    /// Commits a plan.
    ///
    /// Returns `None` without touching the store unless the plan is
    /// [`PlanStatus::Ready`].
    #[must_use]
    pub fn commit(&self, plan: &EditPlan, policy: &Policy) -> Option<ReconcileOutcome> {
        if !plan.status.is_ready() {
            self.sink.trace(
                TraceLevel::Debug,
                &format!("Nothing to commit: {}", plan.status),
            );
            return None;
        }
        Some(
            self.reconciler()
                .reconcile(&plan.variable, plan.target, &plan.candidate, policy),
        )
    }
}
