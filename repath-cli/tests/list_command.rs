//! Integration tests for listing.

#![cfg(unix)]

mod common;

use common::{TestEnv, VARIABLE};
use predicates::prelude::*;
use repath::Target;

#[test]
fn test_list_of_unset_variable_is_empty() {
    let env = TestEnv::new();
    env.command().assert().success().stdout("");
    assert!(!env.data_dir.exists(), "listing must not create the database");
}

#[test]
fn test_list_cleans_without_writing() {
    let env = TestEnv::new();
    let a = env.mkdir("a");
    let b = env.mkdir("b");
    let gone = env.missing("gone");
    let stored = format!("{a}/:{gone}:{b}:{a}");
    env.seed(Target::User, &stored);

    env.command()
        .arg("/List")
        .assert()
        .success()
        .stdout(format!("{a}\n{b}\n"));

    assert_eq!(env.value(Target::User), stored);
}

#[test]
fn test_list_brackets_kept_orphans() {
    let env = TestEnv::new();
    let a = env.mkdir("a");
    let gone = env.missing("gone");
    env.seed(Target::User, &format!("{gone}:{a}"));

    env.command()
        .args(["/List", "/KeepOrphans"])
        .assert()
        .success()
        .stdout(format!("[{gone}]\n{a}\n"));
}

#[test]
fn test_list_keeps_duplicates_on_request() {
    let env = TestEnv::new();
    let a = env.mkdir("a");
    env.seed(Target::User, &format!("{a}:{a}"));

    env.command()
        .args(["/KeepDuplicates"])
        .assert()
        .success()
        .stdout(format!("{a}\n{a}\n"));
}

#[test]
fn test_list_machine_scope() {
    let env = TestEnv::new();
    let a = env.mkdir("a");
    let b = env.mkdir("b");
    env.seed(Target::User, &a);
    env.seed(Target::Machine, &b);

    env.command()
        .arg("/Machine")
        .assert()
        .success()
        .stdout(format!("{b}\n"));
}

#[test]
fn test_list_process_scope_reads_environment() {
    let env = TestEnv::new();
    let a = env.mkdir("a");

    env.command()
        .env(VARIABLE, format!("{a}:{a}/"))
        .arg("/Process")
        .assert()
        .success()
        .stdout(format!("{a}\n"));
}

#[test]
fn test_list_json() {
    let env = TestEnv::new();
    let a = env.mkdir("a");
    let gone = env.missing("gone");
    env.seed(Target::User, &format!("{a}:{gone}"));

    let output = env
        .command()
        .args(["--format", "json", "/KeepOrphans"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variable"], VARIABLE);
    assert_eq!(json["target"], "user");
    assert_eq!(json["operation"], "list");
    assert_eq!(json["status"], "read_only");
    assert_eq!(json["entries"][0]["path"], a.as_str());
    assert_eq!(json["entries"][0]["exists"], true);
    assert_eq!(json["entries"][1]["exists"], false);
    assert!(json["updated_at"].is_string());
    assert!(json.get("result").is_none());
}

#[test]
fn test_verbose_traces_decisions() {
    let env = TestEnv::new();
    let a = env.mkdir("a");
    let gone = env.missing("gone");
    env.seed(Target::User, &format!("{a}:{gone}:{a}"));

    env.command()
        .arg("/Verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("Orphan skipped: {gone}")))
        .stderr(predicate::str::contains("Duplicate skipped"))
        .stderr(predicate::str::contains("Last modified:"));
}
