//! Path-list cleaning and editing.
//!
//! A path list is a single string of directory entries joined by a delimiter,
//! like the `PATH` variable. This module turns such a value into an ordered,
//! cleaned list of entries and back again.
//!
//! # Normalization
//!
//! [`PathNormalizer::normalize`] applies, entry by entry:
//!
//! - trailing separators (`/` or `\`) are trimmed; empty entries vanish
//! - entries that are not directories are dropped, unless orphans are kept
//! - existing entries are re-spelled in their on-disk case, unless case
//!   fixing is off (see [`recover_case`])
//! - case-insensitive repeats of an earlier entry are dropped, unless
//!   duplicates are kept
//!
//! Normalizing an already normalized list yields the same list.
//!
//! # Filesystem access
//!
//! All directory queries go through [`FileSystem`]. [`RealFileSystem`] asks
//! the host; [`MemoryFileSystem`] is a case-insensitive in-memory tree.

mod case;
mod entry;
mod fs;
mod normalizer;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use case::recover_case;
pub use entry::{case_key, is_entry_separator, join_entries, platform_delimiter, trim_entry};
pub use fs::{FileSystem, MemoryFileSystem, RealFileSystem};
pub use normalizer::{InsertOutcome, PathNormalizer};
