//! # Escalas Core
//!
//! Questionnaire administration logic for Escalas.
//!
//! This crate holds everything that does not depend on a presentation layer:
//!
//! - [`instrument`]: the five instrument tables (items, options, reversals)
//! - [`scoring`]: option -> score, reverse scoring, totals
//! - [`session`]: participant / stage / block context, validated once per flow
//! - [`answers`]: per-screen selections with the "all answered" guard
//! - [`flow`]: the screen state machine
//! - [`record`]: log rows and the [`RecordSink`] seam
//! - [`storage`]: the append-only CSV log
//! - [`assets`]: scale images and icon, with placeholders for missing files
//!
//! ## Example
//!
//! ```rust
//! use escalas_core::{BlockId, Flow, FlowPath, ResponseRecord, SessionContext, Timestamp};
//!
//! let mut flow = Flow::new();
//! let context = SessionContext::new("P01", "Baseline", BlockId::FIRST)?;
//! flow.begin(FlowPath::Block, context)?;
//!
//! let mut log: Vec<ResponseRecord> = Vec::new();
//! flow.advance(&mut log, Timestamp::now())?; // block intro
//! for dimension in 0..3 {
//!     flow.select(dimension, 4)?;
//! }
//! let step = flow.advance(&mut log, Timestamp::now())?;
//! assert_eq!(step.records.len(), 3);
//! # Ok::<(), escalas_core::EscalasError>(())
//! ```

pub mod answers;
pub mod assets;
pub mod error;
pub mod flow;
pub mod instrument;
pub mod record;
pub mod scoring;
pub mod session;
pub mod storage;
mod tables;

pub use answers::AnswerSheet;
pub use assets::{Asset, AssetCatalog};
pub use error::{EscalasError, Result};
pub use flow::{Advance, Flow, FlowPath, Screen, ScreenKind};
pub use instrument::{
    definition, stress_bank_question, Instrument, InstrumentDef, Item, ResponseOption, TotalRow,
};
pub use record::{records_for, RecordSink, ResponseRecord, Timestamp, LOG_HEADER};
pub use scoring::{ScoredItem, ScoredScreen};
pub use session::{BlockId, SessionContext, DEFAULT_STAGE_LABEL, MAX_BLOCK};
pub use storage::{CsvLog, LogSummary};
pub use tables::{PSS_REVERSED, STRESS_BANK, STRESS_SUBSET};
