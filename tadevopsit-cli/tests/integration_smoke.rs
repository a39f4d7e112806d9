//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn tadevopsit() -> Command {
    let mut cmd = Command::cargo_bin("tadevopsit").unwrap();
    // Keep a developer's .env and shell config out of the picture
    let dir = tempfile::tempdir().unwrap();
    cmd.current_dir(dir.into_path())
        .env_remove("DATABASE_URL")
        .env_remove("TADEVOPSIT_API_URL")
        .env_remove("TADEVOPSIT_HOST")
        .env_remove("PORT")
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_serve_help() {
    tadevopsit()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PostgreSQL connection string"));
}

#[test]
fn test_progress_complete_help() {
    tadevopsit()
        .args(["progress", "complete", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What you learned that day"));
}

#[test]
fn test_voting_list_help() {
    tadevopsit()
        .args(["voting", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Only show this category"));
}

#[test]
fn test_quotes_help_lists_subcommands() {
    tadevopsit()
        .args(["quotes", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("random"))
        .stdout(predicate::str::contains("favorite"));
}

// === Startup Failures ===

#[test]
fn test_serve_without_database_url_fails() {
    tadevopsit()
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_client_reports_unreachable_api() {
    tadevopsit()
        .args(["voting", "list", "--endpoint", "http://127.0.0.1:9/api"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to API"));
}

#[test]
fn test_progress_rejects_non_numeric_day() {
    tadevopsit()
        .args(["progress", "toggle", "five"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
