//! # Error Module
//!
//! The single error type of the core crate.
//!
//! Two families of errors exist:
//! - Validation errors (missing participant, incomplete screen, bad index).
//!   They block the flow and are meant to be shown to the operator.
//! - Storage errors (I/O, CSV). They abort the current write attempt and are
//!   never retried.

use crate::Instrument;
use thiserror::Error;

/// Errors raised by the questionnaire core.
#[derive(Debug, Error)]
pub enum EscalasError {
    /// The participant identifier was empty after trimming.
    #[error("participant identifier is required")]
    MissingParticipant,

    /// The block number is outside `1..=MAX_BLOCK`.
    #[error("block number {0} is out of range (1..={max})", max = crate::MAX_BLOCK)]
    BlockOutOfRange(u32),

    /// A forward transition was attempted with unanswered items.
    ///
    /// `missing` holds the 1-based item numbers that lack a selection.
    #[error("{instrument} screen is incomplete: {} item(s) unanswered", .missing.len())]
    IncompleteScreen {
        instrument: Instrument,
        missing: Vec<usize>,
    },

    /// An item index does not exist on the current screen.
    #[error("item {index} does not exist on the {instrument} screen ({count} items)")]
    ItemOutOfRange {
        instrument: Instrument,
        index: usize,
        count: usize,
    },

    /// An option index does not exist in the instrument's option set.
    #[error("option {index} does not exist for {instrument} ({count} options)")]
    OptionOutOfRange {
        instrument: Instrument,
        index: usize,
        count: usize,
    },

    /// The requested operation is not valid on the current screen.
    #[error("cannot {action} on the {screen} screen")]
    InvalidTransition {
        action: &'static str,
        screen: &'static str,
    },

    /// The log path exists but is not a regular file.
    #[error("log path {} is not a regular file", .0.display())]
    NotAFile(std::path::PathBuf),

    /// The log file could not be opened, created or appended to.
    #[error("log I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be written or parsed.
    #[error("log CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl EscalasError {
    /// Whether this is a validation error the operator can fix on screen.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParticipant
                | Self::BlockOutOfRange(_)
                | Self::IncompleteScreen { .. }
                | Self::ItemOutOfRange { .. }
                | Self::OptionOutOfRange { .. }
        )
    }
}

/// Result alias used across the core crate.
pub type Result<T> = std::result::Result<T, EscalasError>;
