//! # Instrument Registry
//!
//! The five questionnaires as explicit tables: ordered items, the option set
//! shared by those items (label -> score), and which items are reverse-scored.
//!
//! Given an [`Instrument`], [`definition`] returns its [`InstrumentDef`].
//! Lookups are deterministic and side-effect free; the definitions are built
//! once from the static tables in `tables.rs`.

use crate::tables::{
    BAI_INSTRUCTIONS, BAI_ITEMS, BAI_OPTIONS, BAI_TITLE, MANIKIN_DIMENSIONS,
    MANIKIN_INSTRUCTIONS, MANIKIN_OPTIONS, MANIKIN_TITLE, MSG_ANSWER_ALL, MSG_ANSWER_DIMENSIONS,
    MSG_ANSWER_ITEMS, PANAS_INSTRUCTIONS, PANAS_ITEMS, PANAS_OPTIONS, PANAS_TITLE,
    PSS_INSTRUCTIONS, PSS_ITEMS, PSS_OPTIONS, PSS_REVERSED, PSS_TITLE, PSS_TOTAL_CODE,
    PSS_TOTAL_INSTRUMENT, PSS_TOTAL_TEXT, STRESS_BANK, STRESS_INSTRUCTIONS, STRESS_OPTIONS,
    STRESS_SUBSET, STRESS_TITLE,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// =============================================================================
// INSTRUMENT IDENTIFIER
// =============================================================================

/// Identifier of a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    /// Beck Anxiety Inventory.
    Bai,
    /// Perceived Stress Scale.
    Pss,
    /// Positive and Negative Affect Schedule.
    Panas,
    /// Self-Assessment Manikin (valence, activation, dominance).
    SamManikin,
    /// Stress Appraisal Measure, 10-item subset.
    SamStress,
}

impl Instrument {
    /// All instruments in administration order.
    pub const ALL: [Instrument; 5] = [
        Instrument::Bai,
        Instrument::Pss,
        Instrument::Panas,
        Instrument::SamManikin,
        Instrument::SamStress,
    ];

    /// The value written to the `instrument` column of the log.
    #[must_use]
    pub fn log_name(self) -> &'static str {
        match self {
            Self::Bai => "BAI",
            Self::Pss => "PSS",
            Self::Panas => "PANAS",
            Self::SamManikin => "SAM_Manikin",
            Self::SamStress => "SAM_Stress",
        }
    }

    /// Shorthand for [`definition`].
    #[must_use]
    pub fn definition(self) -> &'static InstrumentDef {
        definition(self)
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.log_name())
    }
}

// =============================================================================
// DEFINITION TYPES
// =============================================================================

/// One selectable answer and the score it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseOption {
    pub label: &'static str,
    pub score: u8,
}

/// One question on a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Value of the `item_code` column (`BAI_5`, `Q14`, `Activación`...).
    pub code: String,
    /// Value of the `item_text` column.
    pub text: &'static str,
    /// What the screen shows for this item.
    pub prompt: String,
    /// Reverse-scored: records `min + max - raw`.
    pub reversed: bool,
    /// Scale image file shown with the item, if any.
    pub image: Option<&'static str>,
}

/// The synthetic summary row emitted after an instrument's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalRow {
    pub instrument: &'static str,
    pub code: &'static str,
    pub text: &'static str,
}

/// A complete questionnaire definition.
#[derive(Debug, Clone, Serialize)]
pub struct InstrumentDef {
    pub instrument: Instrument,
    pub title: &'static str,
    pub instructions: &'static str,
    /// Message shown when advancing with unanswered items.
    pub incomplete_message: &'static str,
    pub options: Vec<ResponseOption>,
    pub items: Vec<Item>,
    pub total: Option<TotalRow>,
    /// The `response` column carries the scored value instead of the
    /// option label (manikin dimensions).
    pub scored_response: bool,
}

impl InstrumentDef {
    /// Number of items on the screen.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Lowest score any option carries.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        self.options.iter().map(|o| o.score).min().unwrap_or(0)
    }

    /// Highest score any option carries.
    #[must_use]
    pub fn max_score(&self) -> u8 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }

    /// Look up an option by its position in the option set.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&ResponseOption> {
        self.options.get(index)
    }

    /// 1-based positions of the reverse-scored items.
    #[must_use]
    pub fn reversed_positions(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.reversed)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

static BAI: LazyLock<InstrumentDef> = LazyLock::new(|| {
    numbered(
        Instrument::Bai,
        BAI_TITLE,
        BAI_INSTRUCTIONS,
        MSG_ANSWER_ALL,
        "BAI_",
        &BAI_ITEMS,
        &BAI_OPTIONS,
        &[],
    )
});

static PSS: LazyLock<InstrumentDef> = LazyLock::new(|| {
    let mut def = numbered(
        Instrument::Pss,
        PSS_TITLE,
        PSS_INSTRUCTIONS,
        MSG_ANSWER_ALL,
        "PSS_",
        &PSS_ITEMS,
        &PSS_OPTIONS,
        &PSS_REVERSED,
    );
    def.total = Some(TotalRow {
        instrument: PSS_TOTAL_INSTRUMENT,
        code: PSS_TOTAL_CODE,
        text: PSS_TOTAL_TEXT,
    });
    def
});

static PANAS: LazyLock<InstrumentDef> = LazyLock::new(|| {
    numbered(
        Instrument::Panas,
        PANAS_TITLE,
        PANAS_INSTRUCTIONS,
        MSG_ANSWER_ALL,
        "PANAS_",
        &PANAS_ITEMS,
        &PANAS_OPTIONS,
        &[],
    )
});

static SAM_MANIKIN: LazyLock<InstrumentDef> = LazyLock::new(|| InstrumentDef {
    instrument: Instrument::SamManikin,
    title: MANIKIN_TITLE,
    instructions: MANIKIN_INSTRUCTIONS,
    incomplete_message: MSG_ANSWER_DIMENSIONS,
    options: options(&MANIKIN_OPTIONS),
    items: MANIKIN_DIMENSIONS
        .iter()
        .map(|&(name, label, image, inverted)| Item {
            code: name.to_string(),
            text: name,
            prompt: label.to_string(),
            reversed: inverted,
            image: Some(image),
        })
        .collect(),
    total: None,
    scored_response: true,
});

static SAM_STRESS: LazyLock<InstrumentDef> = LazyLock::new(|| InstrumentDef {
    instrument: Instrument::SamStress,
    title: STRESS_TITLE,
    instructions: STRESS_INSTRUCTIONS,
    incomplete_message: MSG_ANSWER_ITEMS,
    options: options(&STRESS_OPTIONS),
    items: STRESS_SUBSET
        .iter()
        .filter_map(|&k| {
            stress_bank_question(k).map(|text| Item {
                code: format!("Q{k}"),
                text,
                prompt: text.to_string(),
                reversed: false,
                image: None,
            })
        })
        .collect(),
    total: None,
    scored_response: false,
});

/// Return the definition of an instrument.
#[must_use]
pub fn definition(instrument: Instrument) -> &'static InstrumentDef {
    match instrument {
        Instrument::Bai => &*BAI,
        Instrument::Pss => &*PSS,
        Instrument::Panas => &*PANAS,
        Instrument::SamManikin => &*SAM_MANIKIN,
        Instrument::SamStress => &*SAM_STRESS,
    }
}

/// Look up a question of the 28-item stress appraisal bank by its 1-based index.
#[must_use]
pub fn stress_bank_question(index: usize) -> Option<&'static str> {
    index
        .checked_sub(1)
        .and_then(|i| STRESS_BANK.get(i))
        .copied()
}

fn options(table: &[(&'static str, u8)]) -> Vec<ResponseOption> {
    table
        .iter()
        .map(|&(label, score)| ResponseOption { label, score })
        .collect()
}

/// Build a definition whose item codes are `<prefix><n>` and whose prompts
/// are numbered `n. text`.
fn numbered(
    instrument: Instrument,
    title: &'static str,
    instructions: &'static str,
    incomplete_message: &'static str,
    prefix: &str,
    texts: &[&'static str],
    table: &[(&'static str, u8)],
    reversed: &[usize],
) -> InstrumentDef {
    let items = texts
        .iter()
        .enumerate()
        .map(|(i, &text)| {
            let n = i + 1;
            Item {
                code: format!("{prefix}{n}"),
                text,
                prompt: format!("{n}. {text}"),
                reversed: reversed.contains(&n),
                image: None,
            }
        })
        .collect();

    InstrumentDef {
        instrument,
        title,
        instructions,
        incomplete_message,
        options: options(table),
        items,
        total: None,
        scored_response: false,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_counts_match_instruments() {
        assert_eq!(definition(Instrument::Bai).item_count(), 21);
        assert_eq!(definition(Instrument::Pss).item_count(), 14);
        assert_eq!(definition(Instrument::Panas).item_count(), 20);
        assert_eq!(definition(Instrument::SamManikin).item_count(), 3);
        assert_eq!(definition(Instrument::SamStress).item_count(), 10);
    }

    #[test]
    fn scale_ranges() {
        let ranges: Vec<(u8, u8)> = Instrument::ALL
            .iter()
            .map(|i| (i.definition().min_score(), i.definition().max_score()))
            .collect();
        assert_eq!(ranges, vec![(0, 3), (0, 4), (1, 5), (1, 9), (0, 4)]);
    }

    #[test]
    fn bai_codes_are_prefixed_and_numbered() {
        let def = definition(Instrument::Bai);
        let codes: Vec<&str> = def.items.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes.first(), Some(&"BAI_1"));
        assert_eq!(codes.last(), Some(&"BAI_21"));
        assert_eq!(def.items[4].text, "Miedo a que suceda lo peor");
        assert_eq!(def.items[4].prompt, "5. Miedo a que suceda lo peor");
    }

    #[test]
    fn option_labels_map_to_scores() {
        let score = |instrument: Instrument, label: &str| {
            definition(instrument)
                .options
                .iter()
                .find(|o| o.label == label)
                .map(|o| o.score)
        };
        assert_eq!(score(Instrument::Bai, "Bastante"), Some(3));
        assert_eq!(score(Instrument::Bai, "Nada"), Some(0));
        assert_eq!(score(Instrument::Bai, "Extremadamente"), None);
        assert_eq!(score(Instrument::Panas, "5 Extremadamente"), Some(5));
    }

    #[test]
    fn pss_reversed_positions_are_fixed() {
        let pss = definition(Instrument::Pss);
        assert_eq!(pss.reversed_positions(), vec![4, 5, 6, 7, 9, 10, 13]);
        assert!(pss.total.is_some());
    }

    #[test]
    fn only_activation_is_inverted_on_the_manikin() {
        let sam = definition(Instrument::SamManikin);
        let flags: Vec<(&str, bool)> = sam.items.iter().map(|i| (i.text, i.reversed)).collect();
        assert_eq!(
            flags,
            vec![("Valencia", false), ("Activación", true), ("Dominio", false)]
        );
        assert!(sam.items.iter().all(|i| i.image.is_some()));
    }

    #[test]
    fn stress_subset_follows_bank_order() {
        let def = definition(Instrument::SamStress);
        let expected = [2usize, 8, 14, 20, 16, 5, 22, 19, 24, 26];
        assert_eq!(def.items.len(), expected.len());
        for (item, &k) in def.items.iter().zip(expected.iter()) {
            assert_eq!(item.code, format!("Q{k}"));
            assert_eq!(Some(item.text), stress_bank_question(k));
            assert_eq!(item.prompt, item.text);
        }
        assert_eq!(def.items[0].text, "¿Esta situación te crea tensión?");
    }

    #[test]
    fn stress_bank_is_one_based() {
        assert_eq!(STRESS_BANK.len(), 28);
        assert_eq!(stress_bank_question(0), None);
        assert_eq!(stress_bank_question(29), None);
        assert_eq!(
            stress_bank_question(28),
            Some("¿Esto iba a tener un impacto negativo en mí?")
        );
    }

    #[test]
    fn log_names() {
        let names: Vec<String> = Instrument::ALL.iter().map(|i| i.to_string()).collect();
        assert_eq!(names, vec!["BAI", "PSS", "PANAS", "SAM_Manikin", "SAM_Stress"]);
    }
}
