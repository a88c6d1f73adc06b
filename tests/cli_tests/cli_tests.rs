//! Tests for the seatbit binary
//!
//! These tests verify:
//! - SUCCESS / FAIL output for book and cancel
//! - Malformed argument lists print FAIL instead of a usage error
//! - The data file is created once and reused across invocations

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn run_cli(data_file: &Path, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_seatbit"))
        .arg("--data-file")
        .arg(data_file)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success(), "exit status {:?}", output.status);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

fn setup_temp_data_file() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seats.dat");
    (temp_dir, path)
}

// =============================================================================
// Success Path Tests
// =============================================================================

#[test]
fn test_valid_booking() {
    let (_temp, path) = setup_temp_data_file();
    assert_eq!(run_cli(&path, &["BOOK", "A1", "2"]), "SUCCESS");
}

#[test]
fn test_valid_cancellation() {
    let (_temp, path) = setup_temp_data_file();

    assert_eq!(run_cli(&path, &["BOOK", "A1", "3"]), "SUCCESS");
    assert_eq!(run_cli(&path, &["CANCEL", "A1", "3"]), "SUCCESS");
}

#[test]
fn test_action_is_case_insensitive() {
    let (_temp, path) = setup_temp_data_file();

    assert_eq!(run_cli(&path, &["book", "B0", "1"]), "SUCCESS");
    assert_eq!(run_cli(&path, &["Cancel", "B0", "1"]), "SUCCESS");
}

#[test]
fn test_state_persists_between_invocations() {
    let (_temp, path) = setup_temp_data_file();

    assert_eq!(run_cli(&path, &["BOOK", "C4", "2"]), "SUCCESS");
    assert_eq!(std::fs::read(&path).unwrap()[2], 0b0011_0000);
    assert_eq!(run_cli(&path, &["BOOK", "C5", "1"]), "FAIL");
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 20);
}

// =============================================================================
// Failure Path Tests
// =============================================================================

#[test]
fn test_cancel_without_booking_fails() {
    let (_temp, path) = setup_temp_data_file();
    assert_eq!(run_cli(&path, &["CANCEL", "A1", "2"]), "FAIL");
}

#[test]
fn test_booking_already_booked_seats_fails() {
    let (_temp, path) = setup_temp_data_file();

    assert_eq!(run_cli(&path, &["BOOK", "A1", "2"]), "SUCCESS");
    assert_eq!(run_cli(&path, &["BOOK", "A1", "2"]), "FAIL");
}

#[test]
fn test_invalid_requests_fail() {
    let (_temp, path) = setup_temp_data_file();

    assert_eq!(run_cli(&path, &["BOOK", "A9", "2"]), "FAIL");
    assert_eq!(run_cli(&path, &["BOOK", "Z1", "2"]), "FAIL");
    assert_eq!(run_cli(&path, &["BOOK", "A6", "3"]), "FAIL");
    assert_eq!(run_cli(&path, &["BOOK", "A1", "0"]), "FAIL");
    assert_eq!(run_cli(&path, &["BOOK", "A1", "-2"]), "FAIL");
    assert_eq!(run_cli(&path, &["BOOK", "Axx", "2"]), "FAIL");
    assert_eq!(run_cli(&path, &["BOOK", "A1", "two"]), "FAIL");
    assert_eq!(run_cli(&path, &["RESERVE", "A1", "2"]), "FAIL");
}

#[test]
fn test_wrong_argument_count_fails() {
    let (_temp, path) = setup_temp_data_file();

    assert_eq!(run_cli(&path, &[""]), "FAIL");
    assert_eq!(run_cli(&path, &["BOOK", "A1"]), "FAIL");
    assert_eq!(run_cli(&path, &["BOOK", "A1", "2", "EXTRA"]), "FAIL");
}

#[test]
fn test_failures_leave_file_untouched() {
    let (_temp, path) = setup_temp_data_file();

    assert_eq!(run_cli(&path, &["BOOK", "A6", "3"]), "FAIL");
    assert_eq!(std::fs::read(&path).unwrap(), vec![0u8; 20]);
}
