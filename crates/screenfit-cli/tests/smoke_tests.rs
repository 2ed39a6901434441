//! Smoke tests for the screenfit CLI
//!
//! These tests verify basic CLI functionality works correctly.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the screenfit binary
fn screenfit() -> Command {
    let mut cmd = Command::cargo_bin("screenfit").expect("screenfit binary should exist");
    cmd.env_remove("SCREENFIT_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    screenfit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    screenfit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("matrix"));
}

#[test]
fn test_no_args_shows_help() {
    screenfit().assert().failure(); // Requires a subcommand
}

// ============================================================================
// Classify
// ============================================================================

#[test]
fn test_classify_small_phone() {
    screenfit()
        .args(["--color", "never", "classify", "--width", "320", "--height", "568"])
        .args(["--scale", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category:     small"))
        .stdout(predicate::str::contains("orientation:  portrait"));
}

#[test]
fn test_classify_tablet_landscape_json() {
    let output = screenfit()
        .args(["classify", "--width", "1024", "--height", "768", "--scale", "2"])
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["classification"]["category"], "tablet");
    assert_eq!(value["classification"]["orientation"], "landscape");
}

#[test]
fn test_classify_invalid_metrics_fails() {
    screenfit()
        .args(["classify", "--width", "0", "--height", "568"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid metrics: width"));
}

#[test]
fn test_classify_negative_height_fails() {
    screenfit()
        .args(["classify", "--width", "320", "--height", "-568"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("height"));
}

#[test]
fn test_quiet_suppresses_output() {
    screenfit()
        .args(["-q", "classify", "--width", "320", "--height", "568"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_preset_landscape() {
    screenfit()
        .args(["--color", "never", "preset", "iPhone 11", "--landscape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iPhone 11"))
        .stdout(predicate::str::contains("orientation:  landscape"))
        .stdout(predicate::str::contains("category:     large"));
}

#[test]
fn test_unknown_preset_fails() {
    screenfit()
        .args(["preset", "Nokia 3310"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown device preset: Nokia 3310"));
}

#[test]
fn test_presets_android() {
    screenfit()
        .args(["presets", "--platform", "android"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pixel 7"))
        .stdout(predicate::str::contains("iPad").not());
}

#[test]
fn test_matrix_tablets() {
    screenfit()
        .args(["--color", "never", "matrix", "--category", "tablet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEVICE"))
        .stdout(predicate::str::contains("Galaxy Tab S8"))
        .stdout(predicate::str::contains("iPhone").not());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_changes_thresholds() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("screenfit.yaml");
    fs::write(&path, "policy:\n  small_max_width: 300\n").unwrap();

    screenfit()
        .arg("--config")
        .arg(&path)
        .args(["--color", "never", "classify", "--width", "320", "--height", "568"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category:     medium"));
}

#[test]
fn test_config_env_var() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("screenfit.yaml");
    fs::write(
        &path,
        "devices:\n  - {name: Fold, width: 280, height: 653, scale: 3, platform: android}\n",
    )
    .unwrap();

    screenfit()
        .env("SCREENFIT_CONFIG", &path)
        .args(["presets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fold"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("screenfit.yaml");
    fs::write(&path, "policy:\n  small_max_width: 5000\n").unwrap();

    screenfit()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("small_max_width"));
}

#[test]
fn test_config_check() {
    screenfit()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK"));
}
