//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data directory and
//! verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a CLI command with `home` as data directory and optional stdin.
fn run_cli_with_input(home: &TempDir, args: &[&str], input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_keepchain"))
        .args(args)
        .env("KEEPCHAIN_HOME", home.path())
        .env_remove("KEEPCHAIN_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    run_cli_with_input(home, args, "")
}

fn run_json(home: &TempDir, args: &[&str]) -> serde_json::Value {
    let mut all = vec!["--json"];
    all.extend_from_slice(args);
    let (stdout, stderr, code) = run_cli(home, &all);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_status_on_fresh_install() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["status"]);
    assert_eq!(code, 0, "Status failed");
    assert!(stdout.contains("Status: Pending"));
    assert!(stdout.contains("Chain 0 (longest 0)"));
}

#[test]
fn test_status_json_shape() {
    let home = TempDir::new().unwrap();
    let dash = run_json(&home, &["status"]);
    assert_eq!(dash["status"], "pending");
    assert_eq!(dash["chain"]["current"], 0);
    assert_eq!(dash["grid"].as_array().unwrap().len(), 60);
    assert_eq!(dash["body"]["target"], 1800);
}

#[test]
fn test_kept_requires_promises() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["day", "kept"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("No promises set"));
}

#[test]
fn test_promise_lifecycle_and_kept_day() {
    let home = TempDir::new().unwrap();
    let added = run_json(&home, &["promise", "add", "Read 20 pages", "--tag", "growth"]);
    assert_eq!(added["type"], "promise_added");
    assert_eq!(added["promise"]["tag"], "growth");

    let (_, stderr, code) = run_cli(&home, &["day", "kept"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Not all promises are completed (0/1)"));

    let toggled = run_json(&home, &["promise", "done", "1"]);
    assert_eq!(toggled["done"], true);

    let closed = run_json(&home, &["day", "kept"]);
    assert_eq!(closed["type"], "day_closed");
    assert_eq!(closed["status"], "kept");
    assert_eq!(closed["chain"]["current"], 1);
    assert_eq!(closed["chain"]["longest"], 1);

    let dash = run_json(&home, &["status"]);
    assert_eq!(dash["status"], "kept");
}

#[test]
fn test_fourth_promise_rejected() {
    let home = TempDir::new().unwrap();
    for text in ["one", "two", "three"] {
        let (_, _, code) = run_cli(&home, &["promise", "add", text]);
        assert_eq!(code, 0);
    }
    let (_, stderr, code) = run_cli(&home, &["promise", "add", "four"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Max 3 promises"));
}

#[test]
fn test_broken_declined_then_confirmed() {
    let home = TempDir::new().unwrap();

    let (stdout, stderr, code) = run_cli_with_input(&home, &["day", "broken"], "n\n");
    assert_eq!(code, 0);
    assert!(stderr.contains("RESET your chain"));
    assert!(stdout.contains("cancelled"));
    assert_eq!(run_json(&home, &["status"])["status"], "pending");

    let (stdout, _, code) = run_cli_with_input(&home, &["day", "broken"], "y\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("closed as broken"));
    assert_eq!(run_json(&home, &["status"])["status"], "broken");
}

#[test]
fn test_money_add_and_show() {
    let home = TempDir::new().unwrap();
    run_json(&home, &["money", "add", "12.5", "--cat", "food", "--note", "lunch"]);
    run_json(&home, &["money", "add", "3", "--cat", "coffee"]);
    let money = run_json(&home, &["money", "show"]);
    assert_eq!(money["month_total"], 15.5);
    assert_eq!(money["transactions"][0]["cat"], "coffee");

    let (_, _, code) = run_cli(&home, &["money", "add", "0"]);
    assert_eq!(code, 1);

    let cleared = run_json(&home, &["--yes", "money", "clear"]);
    assert_eq!(cleared["removed"], 2);
}

#[test]
fn test_config_get_and_set() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["config", "get", "promises.max"]);
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim(), "3");

    let (_, _, code) = run_cli(&home, &["config", "set", "streak.grid_days", "14"]);
    assert_eq!(code, 0, "Config set failed");
    let dash = run_json(&home, &["status"]);
    assert_eq!(dash["grid"].as_array().unwrap().len(), 14);

    let (_, stderr, code) = run_cli(&home, &["config", "set", "streak.nope", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key"));
}

#[test]
fn test_notes_roundtrip() {
    let home = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&home, &["note", "save", "weekly-plan", "Ship v1"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(&home, &["note", "show", "weekly-plan"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Ship v1");
}

#[test]
fn test_body_keeps_omitted_values() {
    let home = TempDir::new().unwrap();
    run_json(&home, &["body", "calories", "--consumed", "500"]);
    let saved = run_json(&home, &["body", "calories", "--target", "2000"]);
    assert_eq!(saved["target"], 2000);
    assert_eq!(saved["consumed"], 500);
    assert_eq!(saved["left"], 1500);
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&home, &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("keepchain"));
}

#[test]
fn test_limits_are_enforced() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&home, &["config", "set", "promises.max", "10"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("promises.max"));

    let (_, _, code) = run_cli(&home, &["config", "set", "streak.grid_days", "4294967295"]);
    assert_eq!(code, 1);

    let (_, _, code) = run_cli(&home, &["grid", "--days", "367"]);
    assert_ne!(code, 0);
    let grid = run_json(&home, &["grid", "--days", "366"]);
    assert_eq!(grid.as_array().unwrap().len(), 366);
}
