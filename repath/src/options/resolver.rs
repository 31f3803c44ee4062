//! Turns raw `/Name:value` tokens into an [`OptionSet`].

use super::identity::OptionId;
use super::set::OptionSet;
use crate::config::Config;

/// Default characters stripped from the front and back of an option name.
pub const DEFAULT_PREFIXES: &[char] = &['/'];

/// Default separator between an option name and its payload.
pub const DEFAULT_SEPARATOR: char = ':';

/// Resolves raw argument tokens against the known options.
///
/// Each token has the form `prefix + name [ separator + value ]`. Only the
/// first separator splits, so a payload such as `C:\Tools` survives intact.
/// Tokens that do not name a known option are reported through
/// [`OptionSet::warnings`] and otherwise ignored; resolution never fails.
///
/// # Examples
///
/// ```
/// use repath::options::{OptionId, OptionResolver};
///
/// let set = OptionResolver::new().resolve(["/add:C:\\Tools", "/bogus"]);
/// assert_eq!(set.get(OptionId::Append), "C:\\Tools");
/// assert_eq!(set.warnings().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct OptionResolver {
    prefixes: Vec<char>,
    separator: char,
    case_sensitive: bool,
}

impl Default for OptionResolver {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES.to_vec(),
            separator: DEFAULT_SEPARATOR,
            case_sensitive: false,
        }
    }
}

impl OptionResolver {
    /// Creates a resolver with `/` prefixes, `:` separator, and
    /// case-insensitive names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver using the option settings of a configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            prefixes: config.option_prefix_chars(),
            separator: config.option_separator_char(),
            case_sensitive: config.case_sensitive_options.unwrap_or(false),
        }
    }

    /// Sets the characters stripped around option names.
    #[must_use]
    pub fn with_prefixes(mut self, prefixes: impl IntoIterator<Item = char>) -> Self {
        self.prefixes = prefixes.into_iter().collect();
        self
    }

    /// Sets the name/payload separator.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets whether option names must match case exactly.
    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Splits a token into its option name and payload.
    ///
    /// The payload is empty when the token has no separator.
    #[must_use]
    pub fn split_token<'t>(&self, token: &'t str) -> (&'t str, &'t str) {
        let (head, payload) = token.split_once(self.separator).unwrap_or((token, ""));
        let name = head
            .trim()
            .trim_matches(|c| self.prefixes.contains(&c))
            .trim();
        (name, payload)
    }

    /// Resolves every token, in order.
    pub fn resolve<I, S>(&self, tokens: I) -> OptionSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = OptionSet::new();

        for token in tokens {
            let token = token.as_ref();
            let (name, payload) = self.split_token(token);

            if name.is_empty() {
                set.reject(token, format!("Ignoring empty option: '{token}'"));
                continue;
            }

            match OptionId::from_name(name, self.case_sensitive) {
                Some(id) => set.insert(id, payload.to_string()),
                None => set.reject(token, format!("Ignoring invalid option: {name}")),
            }
        }

        set
    }
}
