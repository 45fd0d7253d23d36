//! CLI integration tests for the runlink binary.
//!
//! These tests verify argument parsing, fail-fast validation, and help
//! output. They do not require network access: every scenario here is
//! rejected before any API call.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the runlink binary with a clean environment.
fn runlink() -> Command {
    let mut cmd = Command::cargo_bin("runlink").unwrap();
    for var in [
        "GITHUB_TOKEN",
        "GITHUB_REPOSITORY",
        "GITHUB_ACTOR",
        "GITHUB_API_URL",
        "GITHUB_OUTPUT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn with_required_args(cmd: &mut Command) -> &mut Command {
    cmd.args([
        "--workflow",
        "deploy.yml",
        "--token",
        "t",
        "--repo",
        "acme/widgets",
        "--actor",
        "octocat",
    ])
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    runlink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("workflow run"))
        .stdout(predicate::str::contains("--workflow"))
        .stdout(predicate::str::contains("--wait-for-completion"))
        .stdout(predicate::str::contains("--display-workflow-run-url"));
}

#[test]
fn test_version_displays() {
    runlink()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("runlink"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Argument Validation Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_workflow_is_required() {
    runlink()
        .args(["--token", "t", "--repo", "acme/widgets", "--actor", "octocat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--workflow"));
}

#[test]
fn test_malformed_repo_is_rejected() {
    let mut cmd = runlink();
    cmd.args([
        "--workflow",
        "deploy.yml",
        "--token",
        "t",
        "--repo",
        "not-a-slug",
        "--actor",
        "octocat",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("owner/name"));
}

#[test]
fn test_malformed_duration_fails_fast() {
    let mut cmd = runlink();
    with_required_args(&mut cmd)
        .args(["--wait-for-completion-timeout", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration 'bogus'"));
}

#[test]
fn test_malformed_interval_fails_fast() {
    let mut cmd = runlink();
    with_required_args(&mut cmd)
        .args(["--display-workflow-run-url-interval", "10x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration '10x'"));
}

#[test]
fn test_malformed_inputs_json_is_rejected() {
    let mut cmd = runlink();
    with_required_args(&mut cmd)
        .args(["--inputs", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn test_non_string_input_values_are_rejected() {
    let mut cmd = runlink();
    with_required_args(&mut cmd)
        .args(["--inputs", r#"{"count": 3}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}
