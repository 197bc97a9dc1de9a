//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a stock command isolated from the caller's environment
pub fn stock() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("stock"));
    for var in [
        "STOCKMASTER_ROOT",
        "STOCKMASTER_LOG",
        "STOCKMASTER_API_KEY",
        "GEMINI_API_KEY",
        "STOCKMASTER_MODEL",
        "STOCKMASTER_ENDPOINT",
        "STOCKMASTER_TIMEOUT_SECS",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Helper to create an empty test project in a temp directory
pub fn setup_test_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    stock().current_dir(tmp.path()).arg("init").assert().success();
    tmp
}

/// Helper to create a project holding the demo inventory
///
/// IPhones 50 at Warehouse A, Office Chairs 120 at Showroom, Steel Rods 500
/// at Zone B.
pub fn setup_seeded_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    stock()
        .current_dir(tmp.path())
        .args(["init", "--seed"])
        .assert()
        .success();
    tmp
}

/// Run a command in the project and parse its JSON output
pub fn json_output(tmp: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = stock()
        .current_dir(tmp.path())
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Current quantity of a product by exact name
pub fn quantity_of(tmp: &TempDir, name: &str) -> Option<u64> {
    json_output(tmp, &["list"])
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .and_then(|p| p["qty"].as_u64())
}

/// Number of entries in the activity log
pub fn log_len(tmp: &TempDir) -> usize {
    json_output(tmp, &["log"]).as_array().unwrap().len()
}
