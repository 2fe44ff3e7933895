//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--cors-localhost"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.env_remove("GRADEBOOK_BIND")
        .arg("serve")
        .arg("--bind")
        .arg("not-an-address");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}

#[test]
fn test_serve_fails_without_database() {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("serve")
        .arg("--bind")
        .arg("127.0.0.1:0")
        .arg("--database-url")
        .arg("postgres://nobody@127.0.0.1:1/none");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database pool"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gradebook"));
}
