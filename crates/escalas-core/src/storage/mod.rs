//! # Storage Module
//!
//! Persistence of response records as a flat CSV file.
//!
//! The log is append-only:
//! - header row written once, when the file is created
//! - one batch of rows per completed screen
//! - no update, no delete, no cross-process locking (single writer)

mod csv_log;

pub use csv_log::{CsvLog, LogSummary, DEFAULT_LOG_FILE};
