#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # repath
//!
//! A library for cleaning and editing `PATH`-style environment variables.
//!
//! A run takes raw option tokens (`/Append:C:\Tools`, `/Machine`, `/WhatIf`),
//! resolves them into an [`Invocation`], plans the edit against the current
//! value of the variable, and commits the result to an environment store.
//!
//! ## Core Types
//!
//! - [`options::OptionResolver`] and [`options::OptionSet`]: raw token resolution
//! - [`Invocation`], [`Operation`], [`Target`], and [`Policy`]: what one run does
//! - [`pathlist::PathNormalizer`]: cleaning, case recovery, insertion, removal
//! - [`operations::PathEditor`] and [`operations::Reconciler`]: plan and commit
//! - [`store::EnvironmentStore`]: where values live
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use repath::config::Config;
//! use repath::operations::PathEditor;
//! use repath::options::OptionResolver;
//! use repath::pathlist::MemoryFileSystem;
//! use repath::store::MemoryStore;
//! use repath::{Invocation, NullSink, Target};
//!
//! let fs = MemoryFileSystem::new().with_dir("/usr/bin");
//! let store = MemoryStore::new().with_value(Target::User, "PATH", "/usr/bin/:/USR/BIN:/gone");
//!
//! let options = OptionResolver::new().resolve(["/Clean"]);
//! let invocation = Invocation::from_options(&options, &Config::default()).unwrap();
//!
//! let editor = PathEditor::new(&store, &fs, &NullSink, ':');
//! let plan = editor.plan(&invocation, "PATH").unwrap();
//! assert_eq!(plan.candidate, "/usr/bin");
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod invocation;
pub mod logging;
pub mod operations;
pub mod options;
pub mod pathlist;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use invocation::{Invocation, Operation, Policy, Target};
pub use logging::{init_logger, LogLevel, Logger, NullSink, RecordingSink, TraceLevel, TraceSink};
pub use operations::{EditPlan, PathEditor, PlanStatus, ReconcileOutcome, Reconciler};
pub use options::{OptionId, OptionResolver, OptionSet};
pub use pathlist::{PathNormalizer, RealFileSystem};
pub use store::{EnvironmentStore, PersistentStore};
