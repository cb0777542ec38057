//! End-to-end CLI tests using `assert_cmd`
#![cfg_attr(
    test,
    allow(
        dead_code,
        deprecated,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::tests_outside_test_module,
        reason = "Test allows"
    )
)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, from_slice};
use std::fs;
use tempfile::TempDir;

/// Helper to get cargo binary or fail test
fn cargo_bin() -> Command {
    let mut command =
        Command::cargo_bin("querylens").unwrap_or_else(|err| panic!("Binary not found: {err}"));
    command.env("RUST_LOG", "off");
    command
}

/// Helper to create temp dir or fail test
fn temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|err| panic!("Failed to create temp dir: {err}"))
}

/// Run the binary and parse its stdout as JSON
fn run_json(args: &[&str], expect_success: bool) -> Value {
    let assert = cargo_bin().args(args).assert();
    let assert = if expect_success {
        assert.success()
    } else {
        assert.failure()
    };
    from_slice(&assert.get_output().stdout).unwrap()
}

#[test]
fn test_cli_help() {
    cargo_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_invalid_command() {
    cargo_bin().arg("invalid-command-xyz").assert().failure();
}

#[test]
fn test_classify_understand_entity() {
    let output = run_json(&["classify", "What is the UserService class?"], true);

    assert_eq!(output["status"], "success");
    assert_eq!(output["metadata"]["tool_name"], "classify_query");
    assert_eq!(output["data"]["intent"]["primary"]["kind"], "UNDERSTAND_ENTITY");
    assert_eq!(
        output["data"]["analysis"]["question_patterns"]["primary_pattern"],
        "WHAT"
    );
}

#[test]
fn test_classify_with_session_and_context() {
    let output = run_json(
        &[
            "classify",
            "Compare OrderService and PaymentService",
            "--context",
            "repo=shop",
            "--session",
            "s-1",
        ],
        true,
    );

    assert_eq!(output["data"]["intent"]["primary"]["kind"], "COMPARE_ENTITIES");
    assert_eq!(output["metadata"]["context_keys"][0], "repo");
}

#[test]
fn test_empty_query_is_validation_error() {
    let output = run_json(&["analyze", ""], false);

    assert_eq!(output["status"], "error");
    assert_eq!(output["kind"], "VALIDATION_ERROR");
    assert!(output.get("data").is_none());
}

#[test]
fn test_analyze_then_resolve() {
    let temp = temp_dir();
    let analysis = run_json(
        &["analyze", "Why does OrderProcessor throw a NullPointerException?"],
        true,
    );
    let path = temp.path().join("analysis.json");
    fs::write(&path, analysis["data"].to_string()).unwrap();

    let output = run_json(&["resolve", path.to_str().unwrap()], true);
    assert_eq!(output["metadata"]["tool_name"], "resolve_intent");
    assert_eq!(output["data"]["primary"]["kind"], "DEBUG_ISSUE");
}

#[test]
fn test_resolve_malformed_file() {
    let temp = temp_dir();
    let path = temp.path().join("broken.json");
    fs::write(&path, "{\"query\": ").unwrap();

    let output = run_json(&["resolve", path.to_str().unwrap()], false);
    assert_eq!(output["kind"], "STRUCTURAL_ERROR");
}

#[test]
fn test_custom_config_changes_outcome() {
    let temp = temp_dir();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[scoring.weights.understand_entity]\nbase = 0.0\nwhat_question = 0.0\n\n\
         [scoring.weights.explore_architecture]\narchitecture_keywords = 2.0\n",
    )
    .unwrap();

    let output = run_json(
        &[
            "--config",
            path.to_str().unwrap(),
            "classify",
            "What is the UserService class?",
        ],
        true,
    );
    assert_eq!(
        output["data"]["intent"]["primary"]["kind"],
        "EXPLORE_ARCHITECTURE"
    );
}

#[test]
fn test_invalid_config_is_configuration_error() {
    let temp = temp_dir();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[scoring.resolution]\nscore_weight = -2.0\n").unwrap();

    let output = run_json(
        &["--config", path.to_str().unwrap(), "analyze", "hello"],
        false,
    );
    assert_eq!(output["kind"], "CONFIGURATION_ERROR");
}

#[test]
fn test_config_full_shows_defaults() {
    let temp = temp_dir();
    let path = temp.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let output = run_json(
        &["--config", path.to_str().unwrap(), "config", "--full"],
        true,
    );
    assert_eq!(output["exists"], true);
    assert_eq!(output["config"]["scoring"]["resolution"]["max_secondary"], 2);
}
