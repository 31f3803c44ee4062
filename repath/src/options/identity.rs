//! The closed set of options the command line understands.

use std::fmt;

/// Which group an option belongs to.
///
/// The invocation model allows at most one operation and one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionCategory {
    /// Selects what to do with the variable.
    Operation,
    /// Selects which scope of the variable to edit.
    Target,
    /// Adjusts the editing policy.
    Flag,
}

/// A recognized option name.
///
/// # Examples
///
/// ```
/// use repath::options::OptionId;
///
/// assert_eq!(OptionId::from_name("keeporphans", false), Some(OptionId::KeepOrphans));
/// assert_eq!(OptionId::from_name("keeporphans", true), None);
/// assert_eq!(OptionId::from_name("Add", true), Some(OptionId::Append));
/// assert_eq!(OptionId::Append.canonical_name(), "Append");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionId {
    /// Print usage and exit.
    Help,
    /// Print the cleaned list without writing it.
    List,
    /// Add an entry at the end of the list.
    Append,
    /// Add an entry at the front of the list.
    Prefix,
    /// Remove one entry.
    Remove,
    /// Normalize the list and write it back.
    Clean,
    /// Per-user scope.
    User,
    /// Scope of the running process.
    Process,
    /// System-wide scope.
    Machine,
    /// Emit trace output.
    Verbose,
    /// Neither fix on-disk case nor compare case-sensitively.
    IgnoreCase,
    /// Keep repeated entries.
    KeepDuplicates,
    /// Keep entries that do not resolve to a directory.
    KeepOrphans,
    /// Compute and show the result without writing it.
    WhatIf,
    /// Ask before writing.
    Confirm,
}

/// Alternative spellings accepted for some options.
const ALIASES: &[(&str, OptionId)] = &[
    ("Add", OptionId::Append),
    ("DoNotFixCase", OptionId::IgnoreCase),
];

impl OptionId {
    /// Every option, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Help,
        Self::List,
        Self::Append,
        Self::Prefix,
        Self::Remove,
        Self::Clean,
        Self::User,
        Self::Process,
        Self::Machine,
        Self::Verbose,
        Self::IgnoreCase,
        Self::KeepDuplicates,
        Self::KeepOrphans,
        Self::WhatIf,
        Self::Confirm,
    ];

    /// The name used on the command line and in messages.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Help => "Help",
            Self::List => "List",
            Self::Append => "Append",
            Self::Prefix => "Prefix",
            Self::Remove => "Remove",
            Self::Clean => "Clean",
            Self::User => "User",
            Self::Process => "Process",
            Self::Machine => "Machine",
            Self::Verbose => "Verbose",
            Self::IgnoreCase => "IgnoreCase",
            Self::KeepDuplicates => "KeepDuplicates",
            Self::KeepOrphans => "KeepOrphans",
            Self::WhatIf => "WhatIf",
            Self::Confirm => "Confirm",
        }
    }

    /// Looks up an option by name or alias.
    ///
    /// With `case_sensitive` false the comparison ignores ASCII case.
    #[must_use]
    pub fn from_name(name: &str, case_sensitive: bool) -> Option<Self> {
        let matches = |candidate: &str| {
            if case_sensitive {
                candidate == name
            } else {
                candidate.eq_ignore_ascii_case(name)
            }
        };

        Self::ALL
            .iter()
            .copied()
            .find(|id| matches(id.canonical_name()))
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| matches(alias))
                    .map(|(_, id)| *id)
            })
    }

    /// The group this option belongs to.
    ///
    /// `Help` is reported as an operation.
    #[must_use]
    pub const fn category(self) -> OptionCategory {
        match self {
            Self::Help | Self::List | Self::Append | Self::Prefix | Self::Remove | Self::Clean => {
                OptionCategory::Operation
            }
            Self::User | Self::Process | Self::Machine => OptionCategory::Target,
            Self::Verbose
            | Self::IgnoreCase
            | Self::KeepDuplicates
            | Self::KeepOrphans
            | Self::WhatIf
            | Self::Confirm => OptionCategory::Flag,
        }
    }

    /// Whether the operation needs a `:value` payload.
    #[must_use]
    pub const fn requires_payload(self) -> bool {
        matches!(self, Self::Append | Self::Prefix | Self::Remove)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_lookup() {
        for id in OptionId::ALL {
            assert_eq!(OptionId::from_name(id.canonical_name(), true), Some(id));
            assert_eq!(
                OptionId::from_name(&id.canonical_name().to_uppercase(), false),
                Some(id)
            );
        }
    }

    #[test]
    fn test_case_sensitive_lookup_rejects_other_case() {
        assert_eq!(OptionId::from_name("whatif", true), None);
        assert_eq!(OptionId::from_name("whatif", false), Some(OptionId::WhatIf));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(OptionId::from_name("add", false), Some(OptionId::Append));
        assert_eq!(
            OptionId::from_name("DONOTFIXCASE", false),
            Some(OptionId::IgnoreCase)
        );
        assert_eq!(OptionId::from_name("add", true), None);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(OptionId::from_name("Frobnicate", false), None);
        assert_eq!(OptionId::from_name("", false), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(OptionId::Clean.category(), OptionCategory::Operation);
        assert_eq!(OptionId::Help.category(), OptionCategory::Operation);
        assert_eq!(OptionId::Machine.category(), OptionCategory::Target);
        assert_eq!(OptionId::Confirm.category(), OptionCategory::Flag);
    }

    #[test]
    fn test_requires_payload() {
        assert!(OptionId::Append.requires_payload());
        assert!(OptionId::Remove.requires_payload());
        assert!(!OptionId::Clean.requires_payload());
        assert!(!OptionId::List.requires_payload());
    }
}
