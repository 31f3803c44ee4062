//! Where variable values live.
//!
//! The [`EnvironmentStore`] trait is the only way the editor reads or writes
//! a variable. Three implementations ship with the crate:
//!
//! - [`ProcessStore`]: the environment of the running process
//! - [`PersistentStore`]: user and machine scopes in SQLite, process scope
//!   delegated to [`ProcessStore`]
//! - [`MemoryStore`]: an in-memory map with failure injection

mod memory;
mod persistent;
mod process;

use std::time::SystemTime;

use crate::error::Result;
use crate::invocation::Target;

pub use memory::MemoryStore;
pub use persistent::PersistentStore;
pub use process::ProcessStore;

/// Reads and writes named variables per scope.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentStore {
    /// The current value of `variable` in `target`; `""` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`](crate::Error::StoreRead) if the scope
    /// cannot be read.
    fn read(&self, variable: &str, target: Target) -> Result<String>;

    /// Replaces the value of `variable` in `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreWrite`](crate::Error::StoreWrite) if the scope
    /// cannot be written, typically for lack of privilege.
    fn write(&self, variable: &str, target: Target, value: &str) -> Result<()>;

    /// When `variable` was last written, if the store tracks it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`](crate::Error::StoreRead) if the scope
    /// cannot be read.
    fn last_modified(&self, variable: &str, target: Target) -> Result<Option<SystemTime>> {
        let _ = (variable, target);
        Ok(None)
    }
}
