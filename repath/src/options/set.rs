//! The resolved set of options for one invocation.

use std::fmt;

use super::identity::OptionId;

/// Options recognized on the command line, each with its payload.
///
/// An option that was not given is inactive: [`OptionSet::get`] returns an
/// empty string for it and [`OptionSet::contains`] returns false. An active
/// option may still have an empty payload (`/Verbose`).
///
/// # Examples
///
/// ```
/// use repath::options::{OptionId, OptionResolver};
///
/// let set = OptionResolver::new().resolve(["/Remove:/opt/bin", "/Verbose"]);
/// assert_eq!(set.get(OptionId::Remove), "/opt/bin");
/// assert!(set.contains(OptionId::Verbose));
/// assert_eq!(set.get(OptionId::Verbose), "");
/// assert!(!set.contains(OptionId::WhatIf));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: Vec<(OptionId, String)>,
    rejected: Vec<String>,
    warnings: Vec<String>,
    notes: Vec<String>,
}

impl OptionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an option. A repeated option keeps its position and takes the
    /// newer payload.
    pub(super) fn insert(&mut self, id: OptionId, payload: String) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            self.notes.push(format!(
                "Option {id} given more than once; using the last value '{payload}'"
            ));
            slot.1 = payload;
        } else {
            self.entries.push((id, payload));
        }
    }

    pub(super) fn reject(&mut self, token: &str, message: String) {
        self.rejected.push(token.to_string());
        self.warnings.push(message);
    }

    /// The payload of `id`, or an empty string when inactive.
    #[must_use]
    pub fn get(&self, id: OptionId) -> &str {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map_or("", |(_, payload)| payload.as_str())
    }

    /// Whether `id` was given at all.
    #[must_use]
    pub fn contains(&self, id: OptionId) -> bool {
        self.entries.iter().any(|(existing, _)| *existing == id)
    }

    /// Active options in the order they first appeared.
    #[must_use]
    pub fn active(&self) -> Vec<OptionId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    /// Number of active options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no option is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw tokens that did not name an option, in order.
    #[must_use]
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Human-readable messages for rejected tokens.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Verbose-level notes produced while resolving (repeated options).
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Replaces the payload of an already active option.
    ///
    /// Returns false and changes nothing when `id` is inactive; this never
    /// activates an option. Intended for fixtures.
    pub fn override_payload(&mut self, id: OptionId, payload: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => {
                slot.1 = payload.into();
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Raw options:")?;
        for id in OptionId::ALL {
            if !self.contains(id) {
                continue;
            }
            let payload = self.get(id);
            if payload.is_empty() {
                writeln!(f, " - {id}")?;
            } else {
                writeln!(f, " - {id}: {payload}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut set = OptionSet::new();
        assert!(set.is_empty());

        set.insert(OptionId::Append, "/usr/bin".to_string());
        set.insert(OptionId::Verbose, String::new());

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(OptionId::Append), "/usr/bin");
        assert!(set.contains(OptionId::Verbose));
        assert_eq!(set.get(OptionId::Verbose), "");
        assert_eq!(set.get(OptionId::Remove), "");
        assert!(!set.contains(OptionId::Remove));
    }

    #[test]
    fn test_repeated_option_last_wins_in_first_position() {
        let mut set = OptionSet::new();
        set.insert(OptionId::Append, "/first".to_string());
        set.insert(OptionId::User, String::new());
        set.insert(OptionId::Append, "/second".to_string());

        assert_eq!(set.get(OptionId::Append), "/second");
        assert_eq!(set.active(), vec![OptionId::Append, OptionId::User]);
        assert_eq!(set.notes().len(), 1);
        assert!(set.notes()[0].contains("Append"));
    }

    #[test]
    fn test_override_only_touches_active_options() {
        let mut set = OptionSet::new();
        set.insert(OptionId::Remove, "/a".to_string());

        assert!(set.override_payload(OptionId::Remove, "/b"));
        assert_eq!(set.get(OptionId::Remove), "/b");

        assert!(!set.override_payload(OptionId::Prefix, "/c"));
        assert!(!set.contains(OptionId::Prefix));
    }

    #[test]
    fn test_display_lists_active_options() {
        let mut set = OptionSet::new();
        set.insert(OptionId::WhatIf, String::new());
        set.insert(OptionId::Append, "/opt/bin".to_string());

        let rendered = set.to_string();
        assert!(rendered.starts_with("Raw options:"));
        assert!(rendered.contains(" - Append: /opt/bin"));
        assert!(rendered.contains(" - WhatIf\n"));
        assert!(!rendered.contains("Remove"));
    }
}
