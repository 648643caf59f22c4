//! # Scoring Module
//!
//! Turns option selections into scores.
//!
//! Rules:
//! - Standard items score the value attached to the chosen option.
//! - Reverse-scored items score `min + max - raw`, with min/max taken from the
//!   instrument's option set. For the PSS (0..=4) this is `4 - raw`; for the
//!   manikin activation dimension (1..=9) it is `10 - raw`.
//! - Manikin rows record the scored value in the response column as well.
//! - Instruments with a [`TotalRow`](crate::TotalRow) also produce the sum of
//!   all item scores after reversal.

use crate::error::{EscalasError, Result};
use crate::instrument::InstrumentDef;
use crate::Instrument;
use serde::Serialize;

/// A single scored answer, ready to become a log row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredItem {
    pub item_code: String,
    pub item_text: String,
    /// Label of the selected option, or the scored value on manikin dimensions.
    pub response: String,
    pub score: u32,
}

/// All scored answers of one completed screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredScreen {
    pub instrument: Instrument,
    pub items: Vec<ScoredItem>,
    /// Sum of item scores, present only for instruments with a summary row.
    pub total: Option<u32>,
}

impl ScoredScreen {
    /// Sum of all item scores, whether or not the instrument reports it.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.items.iter().map(|i| i.score).sum()
    }
}

/// Reverse a raw value within the `min..=max` scale.
#[must_use]
pub fn reverse(raw: u8, min: u8, max: u8) -> u8 {
    min.saturating_add(max).saturating_sub(raw)
}

/// Score one item given the index of the chosen option.
pub fn score_item(def: &InstrumentDef, item_index: usize, option_index: usize) -> Result<ScoredItem> {
    let item = def
        .items
        .get(item_index)
        .ok_or(EscalasError::ItemOutOfRange {
            instrument: def.instrument,
            index: item_index,
            count: def.item_count(),
        })?;
    let option = def.option(option_index).ok_or(EscalasError::OptionOutOfRange {
        instrument: def.instrument,
        index: option_index,
        count: def.options.len(),
    })?;

    let score = if item.reversed {
        reverse(option.score, def.min_score(), def.max_score())
    } else {
        option.score
    };

    let response = if def.scored_response {
        score.to_string()
    } else {
        option.label.to_string()
    };

    Ok(ScoredItem {
        item_code: item.code.clone(),
        item_text: item.text.to_string(),
        response,
        score: u32::from(score),
    })
}

/// Score a full screen. `selections[i]` is the option chosen for item `i`.
pub fn score_screen(def: &InstrumentDef, selections: &[usize]) -> Result<ScoredScreen> {
    if selections.len() > def.item_count() {
        return Err(EscalasError::ItemOutOfRange {
            instrument: def.instrument,
            index: def.item_count(),
            count: def.item_count(),
        });
    }
    if selections.len() < def.item_count() {
        let missing = (selections.len() + 1..=def.item_count()).collect();
        return Err(EscalasError::IncompleteScreen {
            instrument: def.instrument,
            missing,
        });
    }

    let items = selections
        .iter()
        .enumerate()
        .map(|(i, &opt)| score_item(def, i, opt))
        .collect::<Result<Vec<_>>>()?;

    let total = def
        .total
        .map(|_| items.iter().map(|item| item.score).sum::<u32>());

    Ok(ScoredScreen {
        instrument: def.instrument,
        items,
        total,
    })
}

// =============================================================================
// TESTS
// =============================================================================
