//! Integration tests for the repath CLI surface: help, version, usage
//! errors, and configuration errors.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_cli_version_flag() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repath"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Clean and edit PATH-style environment variables",
        ));
}

#[test]
fn test_help_option_prints_usage() {
    let env = TestEnv::new();
    env.command()
        .arg("/Help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operations (choose one):"))
        .stdout(predicate::str::contains("/Append:<path>"))
        .stdout(predicate::str::contains("/KeepOrphans"));
}

#[test]
fn test_help_wins_over_conflicting_operations() {
    let env = TestEnv::new();
    env.command()
        .args(["/Clean", "/Remove:/x", "/help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Targets (choose one):"));
    assert!(!env.data_dir.exists());
}

#[test]
fn test_two_operations_is_usage_error() {
    let env = TestEnv::new();
    env.command()
        .args(["/Clean", "/List"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("You can only choose one operation!"))
        .stderr(predicate::str::contains("repath /Help"));
}

#[test]
fn test_two_targets_is_usage_error() {
    let env = TestEnv::new();
    env.command()
        .args(["/User", "/Machine"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("You can only choose one target!"));
}

#[test]
fn test_missing_payload_is_usage_error() {
    let env = TestEnv::new();
    env.command()
        .arg("/Append")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("requires a path"));
    assert!(!env.data_dir.exists());
}

#[test]
fn test_unknown_option_is_a_warning() {
    let env = TestEnv::new();
    env.command()
        .args(["/List", "/Bogus"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring invalid option: Bogus"));
}

#[test]
fn test_quiet_hides_warnings() {
    let env = TestEnv::new();
    env.command()
        .args(["--quiet", "/List", "/Bogus"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Bogus").not());
}

#[test]
fn test_strict_rejects_unknown_option() {
    let env = TestEnv::new();
    env.command()
        .args(["--strict", "/List", "/Bogus"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unrecognized option"));
}

#[test]
fn test_case_sensitive_options() {
    let env = TestEnv::new();
    env.command()
        .args(["--case-sensitive-options", "--strict", "/list"])
        .assert()
        .code(4);

    env.command()
        .args(["--case-sensitive-options", "--strict", "/List"])
        .assert()
        .success();
}

#[test]
fn test_invalid_delimiter_is_config_error() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--data-dir")
        .arg(&env.data_dir)
        .args(["--delimiter", "/", "/List"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("delimiter"));
}

#[test]
fn test_malformed_config_file_is_config_error() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(env.data_dir.join("config.yaml"), "no_such_field: true\n").unwrap();

    env.command()
        .arg("/List")
        .assert()
        .code(7);
}

#[test]
fn test_config_file_changes_option_syntax() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(
        env.data_dir.join("config.yaml"),
        "option_prefixes: \"-\"\noption_separator: \"=\"\n",
    )
    .unwrap();

    env.command()
        .args(["--", "-Help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-Append=<path>"));
}

#[test]
fn test_verbose_traces_to_stderr() {
    let env = TestEnv::new();
    env.command()
        .args(["/List", "/Verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Operation: list"))
        .stderr(predicate::str::contains("Target: user"))
        .stderr(predicate::str::contains("Raw options:"));
}

#[test]
fn test_verbosity_follows_the_validated_invocation() {
    let env = TestEnv::new();
    env.command()
        .args(["/List", "/Verbose", "/Verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG:"))
        .stderr(predicate::str::contains("given more than once"));

    env.command()
        .args(["/Clean", "/List", "/Verbose", "/Verbose", "/Bogus"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("WARN:"))
        .stderr(predicate::str::contains("Bogus"))
        .stderr(predicate::str::contains("DEBUG:").not());
}
