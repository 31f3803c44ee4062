//! What one run of the tool does: operation, target scope, and policy.
//!
//! An [`Invocation`] is derived once from an [`OptionSet`] and never changes
//! afterwards. All "exactly one of" rules are checked here, before anything
//! reads or writes the environment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::options::{OptionCategory, OptionId, OptionSet};

/// The scope a variable lives in.
///
/// # Examples
///
/// ```
/// use repath::Target;
///
/// assert_eq!(Target::default(), Target::User);
/// assert_eq!(Target::Machine.to_string(), "machine");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Per-user, persistent.
    #[default]
    User,
    /// The current process only.
    Process,
    /// System-wide, persistent; writing usually needs elevated privileges.
    Machine,
}

impl Target {
    /// Lowercase name used in messages and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Process => "process",
            Self::Machine => "machine",
        }
    }

    fn from_option(id: OptionId) -> Option<Self> {
        match id {
            OptionId::User => Some(Self::User),
            OptionId::Process => Some(Self::Process),
            OptionId::Machine => Some(Self::Machine),
            _ => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with the variable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Operation {
    /// Print the cleaned list; never writes.
    #[default]
    List,
    /// Add an entry at the end.
    Append(String),
    /// Add an entry at the front.
    Prefix(String),
    /// Remove one entry.
    Remove(String),
    /// Write back the cleaned list.
    Clean,
    /// Print usage.
    Help,
}

impl Operation {
    /// Whether this operation may write to the store.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Append(_) | Self::Prefix(_) | Self::Remove(_) | Self::Clean
        )
    }

    /// Short name for messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Append(_) => "append",
            Self::Prefix(_) => "prefix",
            Self::Remove(_) => "remove",
            Self::Clean => "clean",
            Self::Help => "help",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append(entry) | Self::Prefix(entry) | Self::Remove(entry) => {
                write!(f, "{} {entry}", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// How entries are treated while editing.
///
/// Built once per run and passed by reference to everything that edits the
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Policy {
    /// Fix entries to their on-disk case; also makes removal case-sensitive.
    pub match_case: bool,
    /// Keep entries that do not resolve to a directory.
    pub keep_orphans: bool,
    /// Keep case-equal repeats of an earlier entry.
    pub keep_duplicates: bool,
    /// Compute the result but never write it.
    pub what_if: bool,
    /// Emit trace output.
    pub verbose: bool,
    /// Ask before writing.
    pub confirm: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            match_case: true,
            keep_orphans: false,
            keep_duplicates: false,
            what_if: false,
            verbose: false,
            confirm: false,
        }
    }
}

impl Policy {
    /// Policy defaults taken from configuration, before any flag is applied.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            match_case: config.fix_case.unwrap_or(true),
            keep_orphans: config.keep_orphans.unwrap_or(false),
            keep_duplicates: config.keep_duplicates.unwrap_or(false),
            ..Self::default()
        }
    }

    /// Applies one flag option on top of the current policy.
    fn apply(&mut self, flag: OptionId) {
        match flag {
            OptionId::Verbose => self.verbose = true,
            OptionId::IgnoreCase => self.match_case = false,
            OptionId::KeepDuplicates => self.keep_duplicates = true,
            OptionId::KeepOrphans => self.keep_orphans = true,
            OptionId::WhatIf => self.what_if = true,
            OptionId::Confirm => self.confirm = true,
            _ => {}
        }
    }
}

/// A validated request: one operation against one target under one policy.
///
/// # Examples
///
/// ```
/// use repath::config::Config;
/// use repath::options::OptionResolver;
/// use repath::{Invocation, Operation, Target};
///
/// let options = OptionResolver::new().resolve(["/Prefix:/opt/bin", "/Process", "/WhatIf"]);
/// let invocation = Invocation::from_options(&options, &Config::default()).unwrap();
///
/// assert_eq!(invocation.operation, Operation::Prefix("/opt/bin".to_string()));
/// assert_eq!(invocation.target, Target::Process);
/// assert!(invocation.policy.what_if);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The selected operation.
    pub operation: Operation,
    /// The selected scope.
    pub target: Target,
    /// The editing policy.
    pub policy: Policy,
}

impl Invocation {
    /// Derives the invocation from resolved options.
    ///
    /// `Help` wins over everything else. Without an operation the run lists;
    /// without a target it uses the configured default (user scope unless
    /// configured otherwise).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] when more than one operation or more than one
    /// target is selected, or when `Append`, `Prefix`, or `Remove` has no
    /// payload.
    pub fn from_options(options: &OptionSet, config: &Config) -> Result<Self> {
        let mut policy = Policy::from_config(config);
        let mut operations = Vec::new();
        let mut targets = Vec::new();

        for id in options.active() {
            match id.category() {
                OptionCategory::Operation if id == OptionId::Help => {}
                OptionCategory::Operation => operations.push(id),
                OptionCategory::Target => targets.extend(Target::from_option(id)),
                OptionCategory::Flag => policy.apply(id),
            }
        }

        let default_target = config.default_target.unwrap_or_default();

        if options.contains(OptionId::Help) {
            return Ok(Self {
                operation: Operation::Help,
                target: targets.first().copied().unwrap_or(default_target),
                policy,
            });
        }

        if operations.len() > 1 {
            return Err(Error::usage("You can only choose one operation!"));
        }
        if targets.len() > 1 {
            return Err(Error::usage("You can only choose one target!"));
        }

        let operation = operations.first().copied();
        let target = targets.first().copied().unwrap_or(default_target);

        let operation = match operation {
            None | Some(OptionId::List) => Operation::List,
            Some(OptionId::Clean) => Operation::Clean,
            Some(id) => {
                let payload = options.get(id).trim();
                if id.requires_payload() && payload.is_empty() {
                    return Err(Error::usage(format!(
                        "/{id} requires a path, for example /{id}:<path>"
                    )));
                }
                let payload = payload.to_string();
                match id {
                    OptionId::Append => Operation::Append(payload),
                    OptionId::Prefix => Operation::Prefix(payload),
                    _ => Operation::Remove(payload),
                }
            }
        };

        Ok(Self {
            operation,
            target,
            policy,
        })
    }
}
