//! # Response Records
//!
//! The rows of the persisted log and the seam through which they leave the
//! flow.
//!
//! A completed screen becomes one [`ResponseRecord`] per item, plus one
//! summary record for instruments that report a total. All records of a
//! screen share the same timestamp and session context.

use crate::error::Result;
use crate::scoring::ScoredScreen;
use crate::session::{BlockId, SessionContext};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column names of the log, in order.
pub const LOG_HEADER: [&str; 9] = [
    "timestamp",
    "participant_id",
    "block_id",
    "stage_label",
    "instrument",
    "item_code",
    "item_text",
    "response",
    "score",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// =============================================================================
// TIMESTAMP
// =============================================================================

/// Local wall-clock time with second precision (`2026-10-16T09:30:00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The current local time, truncated to whole seconds.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// Wrap a datetime, dropping sub-second precision.
    #[must_use]
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        use chrono::Timelike;
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }

    /// Parse the log representation.
    pub fn parse(s: &str) -> std::result::Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map(Self)
    }

    #[must_use]
    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl TryFrom<String> for Timestamp {
    type Error = chrono::ParseError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_string()
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// One row of the log. Field order matches [`LOG_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub timestamp: Timestamp,
    pub participant_id: String,
    pub block_id: BlockId,
    pub stage_label: String,
    pub instrument: String,
    pub item_code: String,
    pub item_text: String,
    pub response: String,
    pub score: u32,
}

impl ResponseRecord {
    /// Whether this is a synthetic summary row rather than an answered item.
    #[must_use]
    pub fn is_summary(&self) -> bool {
        self.instrument.ends_with("_TOTAL")
    }
}

/// Expand a scored screen into log rows.
#[must_use]
pub fn records_for(
    screen: &ScoredScreen,
    context: &SessionContext,
    timestamp: Timestamp,
) -> Vec<ResponseRecord> {
    let def = screen.instrument.definition();
    let row = |instrument: &str, code: &str, text: &str, response: &str, score: u32| {
        ResponseRecord {
            timestamp,
            participant_id: context.participant_id().to_string(),
            block_id: context.block(),
            stage_label: context.stage_label().to_string(),
            instrument: instrument.to_string(),
            item_code: code.to_string(),
            item_text: text.to_string(),
            response: response.to_string(),
            score,
        }
    };

    let mut records: Vec<ResponseRecord> = screen
        .items
        .iter()
        .map(|item| {
            row(
                screen.instrument.log_name(),
                &item.item_code,
                &item.item_text,
                &item.response,
                item.score,
            )
        })
        .collect();

    if let (Some(total_row), Some(total)) = (def.total, screen.total) {
        records.push(row(total_row.instrument, total_row.code, total_row.text, "", total));
    }

    records
}

// =============================================================================
// SINK
// =============================================================================

/// Destination for the records of completed screens.
///
/// The flow only moves past a screen once its sink accepted the batch.
pub trait RecordSink {
    /// Append a batch of records. Records are never modified once appended.
    fn append_batch(&mut self, records: &[ResponseRecord]) -> Result<()>;
}

impl RecordSink for Vec<ResponseRecord> {
    fn append_batch(&mut self, records: &[ResponseRecord]) -> Result<()> {
        self.extend_from_slice(records);
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn append_batch(&mut self, records: &[ResponseRecord]) -> Result<()> {
        (**self).append_batch(records)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::answers::AnswerSheet;
    use crate::Instrument;
    use chrono::NaiveDate;

    fn fixed_time() -> Timestamp {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(9, 30, 5))
            .unwrap();
        Timestamp::from_datetime(dt)
    }

    fn context() -> SessionContext {
        SessionContext::new("P07", "Baseline", BlockId::new(3).unwrap()).unwrap()
    }

    #[test]
    fn timestamp_format_round_trips() {
        let ts = fixed_time();
        assert_eq!(ts.to_string(), "2026-10-16T09:30:05");
        assert_eq!(Timestamp::parse("2026-10-16T09:30:05").ok(), Some(ts));
        assert!(Timestamp::parse("16/10/2026").is_err());
    }

    #[test]
    fn now_has_whole_seconds() {
        use chrono::Timelike;
        assert_eq!(Timestamp::now().as_datetime().nanosecond(), 0);
    }

    #[test]
    fn pss_screen_gets_summary_row() {
        let mut sheet = AnswerSheet::new(Instrument::Pss);
        for i in 0..14 {
            sheet.select(i, 2).unwrap();
        }
        let screen = sheet.score().unwrap();
        let records = records_for(&screen, &context(), fixed_time());

        assert_eq!(records.len(), 15);
        let total = records.last().unwrap();
        assert!(total.is_summary());
        assert_eq!(total.instrument, "PSS_TOTAL");
        assert_eq!(total.item_code, "sum");
        assert_eq!(total.item_text, "Suma de 14 ítems (con inversión)");
        assert_eq!(total.response, "");
        // 2 reversed is still 2 on a 0..=4 scale
        assert_eq!(total.score, 28);
    }

    #[test]
    fn context_is_threaded_into_every_row() {
        let mut sheet = AnswerSheet::new(Instrument::SamStress);
        for i in 0..10 {
            sheet.select(i, 1).unwrap();
        }
        let records = records_for(&sheet.score().unwrap(), &context(), fixed_time());

        assert_eq!(records.len(), 10);
        assert!(records.iter().all(|r| r.participant_id == "P07"
            && r.stage_label == "Baseline"
            && r.block_id.get() == 3
            && r.instrument == "SAM_Stress"
            && r.timestamp == fixed_time()));
        assert_eq!(records[0].item_code, "Q2");
        assert_eq!(records[0].response, "1 Poco");
    }

    #[test]
    fn vec_sink_appends_in_order() {
        let mut sink: Vec<ResponseRecord> = Vec::new();
        let mut sheet = AnswerSheet::new(Instrument::SamManikin);
        for i in 0..3 {
            sheet.select(i, 0).unwrap();
        }
        let records = records_for(&sheet.score().unwrap(), &context(), fixed_time());
        sink.append_batch(&records).unwrap();
        sink.append_batch(&records).unwrap();
        assert_eq!(sink.len(), 6);
        assert_eq!(sink[1].item_code, "Activación");
        assert_eq!(sink[1].score, 9);
        assert_eq!(sink[1].response, "9");
    }
}
