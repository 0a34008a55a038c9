//! Integration tests for basic CLI behavior.
//!
//! Tests that the binary exists, accepts standard flags, and each subcommand
//! responds to `--help` with appropriate text. None of these touch the network.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `doctab` binary.
fn doctab() -> Command {
    Command::cargo_bin("doctab").expect("binary 'doctab' should be built")
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    doctab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: doctab"))
        .stdout(predicate::str::contains("tables"))
        .stdout(predicate::str::contains("grid"))
        .stdout(predicate::str::contains("doc-id"));
}

#[test]
fn version_flag_shows_semver() {
    doctab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^doctab \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    doctab()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: doctab"));
}

#[test]
fn invalid_subcommand_fails() {
    doctab()
        .arg("this-is-not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─── Subcommand help ─────────────────────────────────────────────────────────

#[test]
fn tables_help() {
    doctab()
        .args(["tables", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(x, y, char)"))
        .stdout(predicate::str::contains("[DOCUMENT]"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--credentials"));
}

#[test]
fn tables_rejects_unknown_format() {
    doctab()
        .args(["tables", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn grid_help() {
    doctab()
        .args(["grid", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("character grid"));
}

// ─── doc-id ──────────────────────────────────────────────────────────────────

#[test]
fn doc_id_extracts_from_url() {
    doctab()
        .args([
            "doc-id",
            "https://docs.google.com/document/d/1yiZrWz0-1bqhvk4Rsrcj1TU5SjPn3_KKoYRNA40gJa4/edit",
        ])
        .assert()
        .success()
        .stdout("1yiZrWz0-1bqhvk4Rsrcj1TU5SjPn3_KKoYRNA40gJa4\n");
}

#[test]
fn doc_id_rejects_garbage() {
    doctab()
        .args(["doc-id", "not a document"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("extraction failed"));
}

#[test]
fn missing_credentials_fail_with_generic_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    doctab()
        .args(["tables", "abc", "--config"])
        .arg(&config)
        .arg("--credentials")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("extraction failed"))
        .stderr(predicate::str::contains("failed to read credentials"));
}
