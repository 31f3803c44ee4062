//! Splitting, trimming, and joining of delimited path lists.

/// The list delimiter the host platform uses for `PATH`.
///
/// # Examples
///
/// ```
/// use repath::pathlist::platform_delimiter;
///
/// let delimiter = platform_delimiter();
/// assert!(delimiter == ';' || delimiter == ':');
/// ```
#[must_use]
pub const fn platform_delimiter() -> char {
    if cfg!(windows) {
        ';'
    } else {
        ':'
    }
}

/// Whether `c` is a path separator in a list entry.
///
/// Both slash styles count on every platform, so a list written on Windows
/// trims the same way everywhere.
#[must_use]
pub const fn is_entry_separator(c: char) -> bool {
    matches!(c, '/' | '\\')
}

/// Removes trailing path separators from an entry.
///
/// All of them are removed, so trimming an already trimmed entry is a no-op.
/// An entry made only of separators trims to the empty string.
///
/// # Examples
///
/// ```
/// use repath::pathlist::trim_entry;
///
/// assert_eq!(trim_entry("C:\\Temp\\"), "C:\\Temp");
/// assert_eq!(trim_entry("/usr/bin//"), "/usr/bin");
/// assert_eq!(trim_entry("/"), "");
/// ```
#[must_use]
pub fn trim_entry(entry: &str) -> &str {
    entry.trim_end_matches(is_entry_separator)
}

/// The key under which entries are compared for duplicates.
#[must_use]
pub fn case_key(entry: &str) -> String {
    entry.to_lowercase()
}

/// Joins entries into a single variable value.
///
/// # Examples
///
/// ```
/// use repath::pathlist::join_entries;
///
/// assert_eq!(join_entries(&["/a", "/b"], ':'), "/a:/b");
/// assert_eq!(join_entries::<&str>(&[], ':'), "");
/// ```
#[must_use]
pub fn join_entries<S: AsRef<str>>(entries: &[S], delimiter: char) -> String {
    let mut joined = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            joined.push(delimiter);
        }
        joined.push_str(entry.as_ref());
    }
    joined
}
