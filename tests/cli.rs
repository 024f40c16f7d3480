//! Binary smoke tests
//!
//! Drive the trailhead binary end to end against a temp data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trailhead(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trailhead").unwrap();
    cmd.env("TRAILHEAD_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_help_runs() {
    let temp = TempDir::new().unwrap();
    trailhead(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trek"));
}

#[test]
fn test_init_creates_data_files() {
    let temp = TempDir::new().unwrap();
    trailhead(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(temp.path().join("config.json").exists());
    assert!(temp.path().join("data").join("treks.json").exists());
}

#[test]
fn test_config_shows_paths() {
    let temp = TempDir::new().unwrap();
    trailhead(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"));
}

#[test]
fn test_trek_list_empty() {
    let temp = TempDir::new().unwrap();
    trailhead(&temp).arg("init").assert().success();

    trailhead(&temp)
        .args(["trek", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No treks found"));
}

#[test]
fn test_trek_create_requires_verified_vendor() {
    let temp = TempDir::new().unwrap();
    trailhead(&temp).arg("init").assert().success();

    trailhead(&temp)
        .args([
            "trek", "create", "Summit Trails", "Valley of Flowers", "--region", "Garhwal",
            "--days", "6", "--price", "14500",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vendor not found"));
}

#[test]
fn test_coupon_lifecycle() {
    let temp = TempDir::new().unwrap();
    trailhead(&temp).arg("init").assert().success();

    trailhead(&temp)
        .args([
            "coupon", "create", "MONSOON15", "--percent", "15", "--from", "2026-06-01",
            "--until", "2026-09-30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("MONSOON15"));

    trailhead(&temp)
        .args(["coupon", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15% off"));

    trailhead(&temp)
        .args(["coupon", "deactivate", "monsoon15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deactivated"));
}

#[test]
fn test_ticket_flow() {
    let temp = TempDir::new().unwrap();
    trailhead(&temp).arg("init").assert().success();

    trailhead(&temp)
        .args([
            "ticket", "open", "Refund not received", "--body", "Batch was cancelled",
            "--email", "c@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket opened"));

    trailhead(&temp)
        .args(["ticket", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refund not received"));
}
