//! Integration tests for the `booking` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the blocked, check,
//! and quote subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, and rejection exit codes.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the snapshot.json fixture.
fn snapshot_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/snapshot.json")
}

/// Helper: read the snapshot.json fixture as a string.
fn snapshot_json() -> String {
    std::fs::read_to_string(snapshot_path()).expect("snapshot.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Blocked subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn blocked_stdin_to_stdout() {
    // The approved and pending records produce ranges; the cancelled one
    // does not.
    Command::cargo_bin("booking")
        .unwrap()
        .arg("blocked")
        .write_stdin(snapshot_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-10"))
        .stdout(predicate::str::contains("2024-06-20"))
        .stdout(predicate::str::contains("2024-06-14").not());
}

#[test]
fn blocked_filters_by_listing() {
    Command::cargo_bin("booking")
        .unwrap()
        .args(["blocked", "-i", snapshot_path(), "--listing", "listing-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-10"))
        .stdout(predicate::str::contains("2024-06-20").not());
}

#[test]
fn blocked_file_to_file() {
    let output_path = "/tmp/booking-test-blocked-output.json";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("booking")
        .unwrap()
        .args(["blocked", "-i", snapshot_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.contains("approved"), "output should carry the status");
    assert!(content.contains("2024-06-12"));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn blocked_empty_snapshot_yields_empty_array() {
    Command::cargo_bin("booking")
        .unwrap()
        .arg("blocked")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn blocked_malformed_record_fails_with_index() {
    let bad = r#"[{"listingId": "listing-1", "status": "approved"}]"#;

    Command::cargo_bin("booking")
        .unwrap()
        .arg("blocked")
        .write_stdin(bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid record at index 0"));
}

#[test]
fn blocked_invalid_json_fails() {
    Command::cargo_bin("booking")
        .unwrap()
        .arg("blocked")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_rejects_overlapping_window() {
    // 2024-06-11 falls inside the approved rental.
    Command::cargo_bin("booking")
        .unwrap()
        .args([
            "check",
            "-i",
            snapshot_path(),
            "--listing",
            "listing-1",
            "--start",
            "2024-06-11T09:00:00Z",
            "--end",
            "2024-06-11T17:00:00Z",
            "--now",
            "2024-06-01T00:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date conflict"))
        .stderr(predicate::str::contains("2024-06-11"));
}

#[test]
fn check_accepts_free_window_and_echoes_it() {
    Command::cargo_bin("booking")
        .unwrap()
        .args([
            "check",
            "-i",
            snapshot_path(),
            "--listing",
            "listing-1",
            "--start",
            "2024-06-20T09:00:00Z",
            "--end",
            "2024-06-22T17:00:00Z",
            "--now",
            "2024-06-01T00:00:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-20T09:00:00Z"))
        .stdout(predicate::str::contains("2024-06-22T17:00:00Z"));
}

#[test]
fn check_rejects_zero_duration_window() {
    Command::cargo_bin("booking")
        .unwrap()
        .args([
            "check",
            "-i",
            snapshot_path(),
            "--start",
            "2024-06-20T09:00:00Z",
            "--end",
            "2024-06-20T09:00:00Z",
            "--now",
            "2024-06-01T00:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}

#[test]
fn check_rejects_past_start() {
    Command::cargo_bin("booking")
        .unwrap()
        .args([
            "check",
            "-i",
            snapshot_path(),
            "--start",
            "2024-05-20T09:00:00Z",
            "--end",
            "2024-05-21T09:00:00Z",
            "--now",
            "2024-06-01T00:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("in the past"));
}

#[test]
fn check_invalid_datetime_flag_fails() {
    Command::cargo_bin("booking")
        .unwrap()
        .args([
            "check",
            "-i",
            snapshot_path(),
            "--start",
            "sometime tomorrow",
            "--end",
            "2024-06-21T09:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid datetime for --start"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Quote subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn quote_daily_rate_applies_ceiling() {
    // 2 days 8 hours at $25/day bills 3 days.
    Command::cargo_bin("booking")
        .unwrap()
        .args([
            "quote",
            "--start",
            "2024-06-20T09:00:00Z",
            "--end",
            "2024-06-22T17:00:00Z",
            "--rate",
            "25.0",
            "--unit",
            "day",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("75.00"));
}

#[test]
fn quote_hourly_rate_rounds_up_partial_hours() {
    Command::cargo_bin("booking")
        .unwrap()
        .args([
            "quote",
            "--start",
            "2024-06-20T10:00:00Z",
            "--end",
            "2024-06-20T11:30:00Z",
            "--rate",
            "10.0",
            "--unit",
            "hour",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("20.00"));
}

#[test]
fn quote_unknown_unit_fails() {
    Command::cargo_bin("booking")
        .unwrap()
        .args([
            "quote",
            "--start",
            "2024-06-20T10:00:00Z",
            "--end",
            "2024-06-20T11:30:00Z",
            "--rate",
            "10.0",
            "--unit",
            "fortnight",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rate unit"));
}

#[test]
fn quote_zero_duration_fails() {
    Command::cargo_bin("booking")
        .unwrap()
        .args([
            "quote",
            "--start",
            "2024-06-20T10:00:00Z",
            "--end",
            "2024-06-20T10:00:00Z",
            "--rate",
            "10.0",
            "--unit",
            "hour",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}
