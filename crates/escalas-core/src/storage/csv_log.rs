//! Append-only CSV log.
//!
//! Layout on disk:
//! - UTF-8 byte-order mark, written once when the file is created
//! - header row ([`LOG_HEADER`]), written once
//! - one row per [`ResponseRecord`], appended in batches
//! - rows end in CRLF
//!
//! Existing rows are never rewritten. Each append opens the file, writes the
//! batch and flushes; a failure aborts that append and is returned as is.

use crate::error::{EscalasError, Result};
use crate::record::{RecordSink, ResponseRecord, LOG_HEADER};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "respuestas_cuestionarios.csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Handle to the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvLog {
    path: PathBuf,
}

impl CsvLog {
    /// Open the log, creating it with its header if it is absent or empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let log = Self { path: path.into() };
        log.ensure_header()?;
        Ok(log)
    }

    /// Create a fresh log, discarding any existing file.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let log = Self { path: path.into() };
        let file = File::create(&log.path)?;
        write_header(file)?;
        Ok(log)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the BOM and header if the file does not exist yet or is empty.
    ///
    /// Returns `true` when the header was written. A path that exists but is
    /// not a regular file, or an existing log that cannot be opened for
    /// appending, is an error.
    pub fn ensure_header(&self) -> Result<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) if !meta.is_file() => {
                return Err(EscalasError::NotAFile(self.path.clone()));
            }
            Ok(meta) if meta.len() > 0 => {
                OpenOptions::new().append(true).open(&self.path)?;
                return Ok(false);
            }
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write_header(file)?;
        Ok(true)
    }

    /// Read every record back. The byte-order mark is tolerated.
    pub fn read_all(&self) -> Result<Vec<ResponseRecord>> {
        let bytes = std::fs::read(&self.path)?;
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(body);

        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }
}

impl RecordSink for CsvLog {
    fn append_batch(&mut self, records: &[ResponseRecord]) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn write_header(mut file: File) -> Result<()> {
    file.write_all(UTF8_BOM)?;
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);
    writer.write_record(LOG_HEADER)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Counts over the contents of a log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    /// Number of data rows (header excluded).
    pub rows: usize,
    /// Rows that are synthetic totals.
    pub summary_rows: usize,
    /// Distinct participant identifiers.
    pub participants: BTreeSet<String>,
    /// Rows per value of the `instrument` column.
    pub per_instrument: BTreeMap<String, usize>,
    /// Distinct block numbers seen.
    pub blocks: BTreeSet<u8>,
}

impl LogSummary {
    #[must_use]
    pub fn from_records(records: &[ResponseRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.rows += 1;
            if record.is_summary() {
                summary.summary_rows += 1;
            }
            summary.participants.insert(record.participant_id.clone());
            *summary
                .per_instrument
                .entry(record.instrument.clone())
                .or_default() += 1;
            summary.blocks.insert(record.block_id.get());
        }
        summary
    }
}

// =============================================================================
// TESTS
// =============================================================================
