//! # Answer Sheets
//!
//! The selections made on one questionnaire screen.
//!
//! One slot per item, each holding at most one option index, the same
//! exclusivity a group of radio buttons gives. A sheet only scores when
//! every slot is filled.

use crate::error::{EscalasError, Result};
use crate::instrument::{Instrument, InstrumentDef};
use crate::scoring::{score_screen, ScoredScreen};

/// Selections for one instrument's screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    instrument: Instrument,
    selections: Vec<Option<usize>>,
}

impl AnswerSheet {
    /// An empty sheet for the instrument.
    #[must_use]
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            selections: vec![None; instrument.definition().item_count()],
        }
    }

    #[must_use]
    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    #[must_use]
    pub fn definition(&self) -> &'static InstrumentDef {
        self.instrument.definition()
    }

    /// Select option `option` (0-based) for item `item` (0-based).
    ///
    /// Replaces any earlier selection for that item.
    pub fn select(&mut self, item: usize, option: usize) -> Result<()> {
        let def = self.definition();
        if option >= def.options.len() {
            return Err(EscalasError::OptionOutOfRange {
                instrument: self.instrument,
                index: option,
                count: def.options.len(),
            });
        }
        let count = self.selections.len();
        let slot = self
            .selections
            .get_mut(item)
            .ok_or(EscalasError::ItemOutOfRange {
                instrument: self.instrument,
                index: item,
                count,
            })?;
        *slot = Some(option);
        Ok(())
    }

    /// The option selected for an item, if any.
    #[must_use]
    pub fn selection(&self, item: usize) -> Option<usize> {
        self.selections.get(item).copied().flatten()
    }

    /// 1-based numbers of the items without a selection.
    #[must_use]
    pub fn missing(&self) -> Vec<usize> {
        self.selections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Every item has a selection.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selections.iter().all(Option::is_some)
    }

    /// Score the sheet. Fails with `IncompleteScreen` while items are missing.
    pub fn score(&self) -> Result<ScoredScreen> {
        let selections: Option<Vec<usize>> = self.selections.iter().copied().collect();
        match selections {
            Some(selections) => score_screen(self.definition(), &selections),
            None => Err(EscalasError::IncompleteScreen {
                instrument: self.instrument,
                missing: self.missing(),
            }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sheet_is_empty() {
        let sheet = AnswerSheet::new(Instrument::SamManikin);
        assert!(!sheet.is_complete());
        assert_eq!(sheet.missing(), vec![1, 2, 3]);
    }

    #[test]
    fn selecting_replaces_previous_choice() {
        let mut sheet = AnswerSheet::new(Instrument::Bai);
        assert!(sheet.select(0, 1).is_ok());
        assert!(sheet.select(0, 2).is_ok());
        assert_eq!(sheet.selection(0), Some(2));
    }

    #[test]
    fn incomplete_sheet_does_not_score() {
        let mut sheet = AnswerSheet::new(Instrument::SamManikin);
        assert!(sheet.select(0, 4).is_ok());
        assert!(sheet.select(2, 4).is_ok());

        match sheet.score() {
            Err(EscalasError::IncompleteScreen { instrument, missing }) => {
                assert_eq!(instrument, Instrument::SamManikin);
                assert_eq!(missing, vec![2]);
            }
            other => unreachable!("expected incomplete screen, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_selections_are_rejected() {
        let mut sheet = AnswerSheet::new(Instrument::Pss);
        assert!(matches!(
            sheet.select(14, 0),
            Err(EscalasError::ItemOutOfRange { count: 14, .. })
        ));
        assert!(matches!(
            sheet.select(0, 5),
            Err(EscalasError::OptionOutOfRange { count: 5, .. })
        ));
    }
}
