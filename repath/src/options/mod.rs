//! Command-option resolution.
//!
//! Raw tokens such as `/Append:C:\Tools` or `/WhatIf` are resolved against a
//! closed set of option names into an [`OptionSet`]. Resolution is purely
//! textual: it never touches the environment or the filesystem, and it never
//! fails. Unknown tokens end up in [`OptionSet::warnings`] so the caller can
//! decide whether to abort.
//!
//! Deciding what the options *mean* (one operation, one target, a policy) is
//! the job of [`crate::invocation`].

mod identity;
mod resolver;
mod set;

pub use identity::{OptionCategory, OptionId};
pub use resolver::{OptionResolver, DEFAULT_PREFIXES, DEFAULT_SEPARATOR};
pub use set::OptionSet;
