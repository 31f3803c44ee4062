//! The process environment.

use std::env;

use crate::error::{Error, Result};
use crate::invocation::Target;

use super::EnvironmentStore;

/// Reads and writes the environment of the running process.
///
/// Only [`Target::Process`] is served; other scopes are rejected. Writes are
/// visible to this process and its future children, nothing else.
///
/// # Examples
///
/// ```
/// use repath::store::{EnvironmentStore, ProcessStore};
/// use repath::Target;
///
/// let store = ProcessStore;
/// assert_eq!(store.read("REPATH_DOC_UNSET", Target::Process).unwrap(), "");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessStore;

impl ProcessStore {
    fn check_target(variable: &str, target: Target, write: bool) -> Result<()> {
        if target == Target::Process {
            return Ok(());
        }
        let reason = format!("the process store cannot hold {target} variables");
        Err(if write {
            Error::StoreWrite {
                variable: variable.to_string(),
                target,
                reason,
            }
        } else {
            Error::StoreRead {
                variable: variable.to_string(),
                target,
                reason,
            }
        })
    }
}

impl EnvironmentStore for ProcessStore {
    fn read(&self, variable: &str, target: Target) -> Result<String> {
        Self::check_target(variable, target, false)?;
        if variable.is_empty() || variable.contains(['=', '\0']) {
            return Ok(String::new());
        }
        match env::var(variable) {
            Ok(value) => Ok(value),
            Err(env::VarError::NotPresent) => Ok(String::new()),
            Err(env::VarError::NotUnicode(_)) => Err(Error::StoreRead {
                variable: variable.to_string(),
                target,
                reason: "value is not valid Unicode".to_string(),
            }),
        }
    }

    fn write(&self, variable: &str, target: Target, value: &str) -> Result<()> {
        Self::check_target(variable, target, true)?;
        // std::env::set_var panics on these.
        if variable.is_empty() || variable.contains(['=', '\0']) || value.contains('\0') {
            return Err(Error::StoreWrite {
                variable: variable.to_string(),
                target,
                reason: "name or value not allowed in the process environment".to_string(),
            });
        }
        env::set_var(variable, value);
        Ok(())
    }
}
