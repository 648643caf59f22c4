//! # Session Context
//!
//! Who is answering, in which experimental phase, in which block.
//!
//! A [`SessionContext`] is validated once when a flow begins and is then
//! threaded unchanged into every record of that flow. There are no setters:
//! a different participant or block means a new flow.

use crate::error::{EscalasError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest block number the operator can select.
pub const MAX_BLOCK: u8 = 20;

/// Stage label recorded when the operator leaves the field blank.
pub const DEFAULT_STAGE_LABEL: &str = "SinEtiqueta";

// =============================================================================
// BLOCK NUMBER
// =============================================================================

/// A block number in `1..=MAX_BLOCK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BlockId(u8);

impl BlockId {
    /// The first block.
    pub const FIRST: BlockId = BlockId(1);

    /// Validate a block number.
    pub fn new(value: u32) -> Result<Self> {
        if (1..=u32::from(MAX_BLOCK)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(EscalasError::BlockOutOfRange(value))
        }
    }

    /// The numeric value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u32> for BlockId {
    type Error = EscalasError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BlockId> for u32 {
    fn from(block: BlockId) -> Self {
        u32::from(block.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SESSION CONTEXT
// =============================================================================

/// Participant, stage and block for one flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    participant_id: String,
    stage_label: String,
    block: BlockId,
}

impl SessionContext {
    /// Build a context from operator input.
    ///
    /// The participant identifier is trimmed and must not be empty. A blank
    /// stage label becomes [`DEFAULT_STAGE_LABEL`].
    pub fn new(participant_id: &str, stage_label: &str, block: BlockId) -> Result<Self> {
        let participant_id = participant_id.trim();
        if participant_id.is_empty() {
            return Err(EscalasError::MissingParticipant);
        }

        let stage_label = match stage_label.trim() {
            "" => DEFAULT_STAGE_LABEL,
            s => s,
        };

        Ok(Self {
            participant_id: participant_id.to_string(),
            stage_label: stage_label.to_string(),
            block,
        })
    }

    #[must_use]
    pub fn participant_id(&self) -> &str {
        &self.participant_id
    }

    #[must_use]
    pub fn stage_label(&self) -> &str {
        &self.stage_label
    }

    #[must_use]
    pub fn block(&self) -> BlockId {
        self.block
    }
}

// =============================================================================
// TESTS
// =============================================================================
