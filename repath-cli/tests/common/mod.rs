//! Common test utilities for CLI integration tests.
//!
//! Every test runs the binary against its own temporary user and machine
//! directories and edits a dedicated variable, so nothing touches the real
//! `PATH` or the developer's data directory.

use assert_cmd::Command;
use repath::store::{EnvironmentStore, PersistentStore};
use repath::Target;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The variable every test edits.
pub const VARIABLE: &str = "REPATH_CLI_TEST";

/// Environment variables that would leak host settings into a run.
const HOST_OVERRIDES: &[&str] = &[
    "REPATH_DATA_DIR",
    "REPATH_MACHINE_DIR",
    "REPATH_LOG_MODE",
    "REPATH_VARIABLE",
    "REPATH_DELIMITER",
    "REPATH_OUTPUT_FORMAT",
    "REPATH_STRICT_OPTIONS",
    "REPATH_DEFAULT_TARGET",
    "REPATH_OPTION_PREFIXES",
    "REPATH_OPTION_SEPARATOR",
    "REPATH_CASE_SENSITIVE_OPTIONS",
    "REPATH_FIX_CASE",
    "REPATH_KEEP_ORPHANS",
    "REPATH_KEEP_DUPLICATES",
    "REPATH_BUSY_TIMEOUT_SECONDS",
];

/// Test environment with isolated data directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// User scope data directory
    pub data_dir: PathBuf,
    /// Machine scope data directory
    pub machine_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment. The data directories are not created;
    /// the first write does that.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("user-data");
        let machine_dir = temp_path.join("machine-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
            machine_dir,
        }
    }

    /// A command with only the binary and a scrubbed environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("repath").expect("Failed to find repath binary");
        for name in HOST_OVERRIDES {
            cmd.env_remove(name);
        }
        cmd
    }

    /// A command pointed at this environment's directories and variable.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--machine-dir")
            .arg(&self.machine_dir)
            .arg("--variable")
            .arg(VARIABLE)
            .arg("--delimiter")
            .arg(":");
        cmd
    }

    /// The store the binary reads and writes.
    pub fn store(&self) -> PersistentStore {
        PersistentStore::new(&self.data_dir, &self.machine_dir)
    }

    /// Sets the test variable in `target`.
    pub fn seed(&self, target: Target, value: &str) {
        self.store()
            .write(VARIABLE, target, value)
            .expect("Failed to seed variable");
    }

    /// Reads the test variable from `target`.
    pub fn value(&self, target: Target) -> String {
        self.store()
            .read(VARIABLE, target)
            .expect("Failed to read variable")
    }

    /// Creates a directory under the temporary directory and returns its
    /// path as a string.
    pub fn mkdir(&self, name: &str) -> String {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path_string(&path)
    }

    /// A path under the temporary directory that does not exist.
    pub fn missing(&self, name: &str) -> String {
        path_string(&self.temp_path.join(name))
    }
}

fn path_string(path: &Path) -> String {
    path.to_str().expect("Non UTF-8 temp path").to_string()
}
