//! Integration tests for Escalas CLI commands.
//!
//! Uses tempfile for testing file-based operations.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use escalas::cli::{cmd_init, cmd_instruments, cmd_status, log_summary};
use escalas_core::{
    records_for, AnswerSheet, BlockId, CsvLog, Instrument, RecordSink, ResponseRecord,
    SessionContext, Timestamp,
};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Scored rows for one fully answered sheet.
fn sheet_rows(instrument: Instrument, participant: &str, block: u32) -> Vec<ResponseRecord> {
    let mut sheet = AnswerSheet::new(instrument);
    for item in 0..instrument.definition().item_count() {
        sheet.select(item, 0).unwrap();
    }
    let context = SessionContext::new(participant, "Baseline", BlockId::new(block).unwrap()).unwrap();
    records_for(&sheet.score().unwrap(), &context, Timestamp::now())
}

/// A log holding one PSS screen for P01 and one manikin screen for P02.
fn create_populated_log(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("log.csv");
    let mut log = CsvLog::open(&path).unwrap();
    log.append_batch(&sheet_rows(Instrument::Pss, "P01", 1)).unwrap();
    log.append_batch(&sheet_rows(Instrument::SamManikin, "P02", 4)).unwrap();
    path
}

// =============================================================================
// INIT COMMAND TESTS
// =============================================================================

#[test]
fn test_init_creates_log_with_header() {
    let temp = create_temp_dir();
    let path = temp.path().join("log.csv");

    assert!(cmd_init(&path, false).is_ok());
    assert!(path.exists());

    let records = CsvLog::open(&path).unwrap().read_all().unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_init_keeps_existing_rows() {
    let temp = create_temp_dir();
    let path = create_populated_log(&temp);

    cmd_init(&path, false).unwrap();

    let records = CsvLog::open(&path).unwrap().read_all().unwrap();
    assert_eq!(records.len(), 18);
}

#[test]
fn test_init_force_discards_rows() {
    let temp = create_temp_dir();
    let path = create_populated_log(&temp);

    cmd_init(&path, true).unwrap();

    let records = CsvLog::open(&path).unwrap().read_all().unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_init_fails_in_missing_directory() {
    let temp = create_temp_dir();
    let path = temp.path().join("missing").join("log.csv");

    assert!(cmd_init(&path, false).is_err());
}

// =============================================================================
// INSTRUMENTS COMMAND TESTS
// =============================================================================

#[test]
fn test_instruments_text_and_json() {
    assert!(cmd_instruments(false).is_ok());
    assert!(cmd_instruments(true).is_ok());
}

// =============================================================================
// STATUS COMMAND TESTS
// =============================================================================

#[test]
fn test_status_missing_log_fails() {
    let temp = create_temp_dir();
    let path = temp.path().join("absent.csv");

    let result = cmd_status(&path, false);
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_status_empty_log() {
    let temp = create_temp_dir();
    let path = temp.path().join("log.csv");
    cmd_init(&path, false).unwrap();

    let summary = log_summary(&path).unwrap();
    assert_eq!(summary.rows, 0);
    assert!(cmd_status(&path, false).is_ok());
}

#[test]
fn test_status_counts_rows() {
    let temp = create_temp_dir();
    let path = create_populated_log(&temp);

    let summary = log_summary(&path).unwrap();
    assert_eq!(summary.rows, 18);
    assert_eq!(summary.summary_rows, 1);
    assert_eq!(summary.participants.len(), 2);
    assert_eq!(summary.per_instrument.get("PSS"), Some(&14));
    assert_eq!(summary.per_instrument.get("PSS_TOTAL"), Some(&1));
    assert_eq!(summary.per_instrument.get("SAM_Manikin"), Some(&3));
    assert_eq!(summary.blocks.iter().copied().collect::<Vec<_>>(), vec![1, 4]);
}

#[test]
fn test_status_json_mode() {
    let temp = create_temp_dir();
    let path = create_populated_log(&temp);

    assert!(cmd_status(&path, true).is_ok());
}
