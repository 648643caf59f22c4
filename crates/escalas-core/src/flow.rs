//! # Flow State Machine
//!
//! The screen sequence of the application as an explicit state machine.
//!
//! ```text
//!            ┌──► Bai ──► Pss ──► Panas ──► InitialDone ──┐
//!   Start ───┤                                             ├──► Start
//!            └──► BlockIntro ──► Manikin ──► StressIntro   │
//!                                  ──► StressSubset ──► BlockDone
//! ```
//!
//! Forward transitions out of a questionnaire screen are guarded: every item
//! must carry a selection, the screen is scored, and its records are handed
//! to a [`RecordSink`]. The flow only moves on once the sink accepted them.
//! `previous` steps back exactly one screen; from the first screen of a path
//! it returns to `Start`. Terminal screens return to `Start` and drop the
//! session context. Nothing here knows about widgets or terminals.

use crate::answers::AnswerSheet;
use crate::error::{EscalasError, Result};
use crate::instrument::Instrument;
use crate::record::{records_for, RecordSink, ResponseRecord, Timestamp};
use crate::session::SessionContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// PATHS AND SCREENS
// =============================================================================

/// The two flows an operator can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPath {
    /// BAI, PSS and PANAS, administered once.
    Initial,
    /// Manikin and stress appraisal, administered once per block.
    Block,
}

impl FlowPath {
    /// Screens of the path, in order, excluding `Start`.
    #[must_use]
    pub fn screens(self) -> &'static [Screen] {
        match self {
            Self::Initial => &[Screen::Bai, Screen::Pss, Screen::Panas, Screen::InitialDone],
            Self::Block => &[
                Screen::BlockIntro,
                Screen::Manikin,
                Screen::StressIntro,
                Screen::StressSubset,
                Screen::BlockDone,
            ],
        }
    }

    /// Instruments administered on the path.
    pub fn instruments(self) -> impl Iterator<Item = Instrument> {
        self.screens().iter().filter_map(|s| s.instrument())
    }
}

/// Every screen the application can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Start,
    Bai,
    Pss,
    Panas,
    InitialDone,
    BlockIntro,
    Manikin,
    StressIntro,
    StressSubset,
    BlockDone,
}

/// What a screen asks of the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Identifier, stage and block entry.
    Start,
    /// A questionnaire to answer.
    Questionnaire(Instrument),
    /// A message with a continue button.
    Transition,
    /// A closing message; continuing returns to `Start`.
    Terminal,
}

impl Screen {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Bai => "bai",
            Self::Pss => "pss",
            Self::Panas => "panas",
            Self::InitialDone => "initial_done",
            Self::BlockIntro => "block_intro",
            Self::Manikin => "manikin",
            Self::StressIntro => "stress_intro",
            Self::StressSubset => "stress_subset",
            Self::BlockDone => "block_done",
        }
    }

    #[must_use]
    pub fn kind(self) -> ScreenKind {
        match self {
            Self::Start => ScreenKind::Start,
            Self::Bai => ScreenKind::Questionnaire(Instrument::Bai),
            Self::Pss => ScreenKind::Questionnaire(Instrument::Pss),
            Self::Panas => ScreenKind::Questionnaire(Instrument::Panas),
            Self::Manikin => ScreenKind::Questionnaire(Instrument::SamManikin),
            Self::StressSubset => ScreenKind::Questionnaire(Instrument::SamStress),
            Self::BlockIntro | Self::StressIntro => ScreenKind::Transition,
            Self::InitialDone | Self::BlockDone => ScreenKind::Terminal,
        }
    }

    /// The instrument answered on this screen, if it is a questionnaire.
    #[must_use]
    pub fn instrument(self) -> Option<Instrument> {
        match self.kind() {
            ScreenKind::Questionnaire(instrument) => Some(instrument),
            _ => None,
        }
    }

    /// The path this screen belongs to. `Start` belongs to none.
    #[must_use]
    pub fn path(self) -> Option<FlowPath> {
        [FlowPath::Initial, FlowPath::Block]
            .into_iter()
            .find(|p| p.screens().contains(&self))
    }

    /// The screen after this one. Terminal screens lead back to `Start`.
    #[must_use]
    pub fn next(self) -> Screen {
        self.neighbour(1).unwrap_or(Screen::Start)
    }

    /// The screen before this one. First screens lead back to `Start`.
    #[must_use]
    pub fn previous(self) -> Screen {
        self.neighbour(-1).unwrap_or(Screen::Start)
    }

    fn neighbour(self, offset: isize) -> Option<Screen> {
        let screens = self.path()?.screens();
        let pos = screens.iter().position(|&s| s == self)?;
        pos.checked_add_signed(offset)
            .and_then(|i| screens.get(i))
            .copied()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// FLOW
// =============================================================================

/// Result of a successful forward transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance {
    pub from: Screen,
    pub to: Screen,
    /// Records appended while leaving `from`. Empty for non-questionnaire screens.
    pub records: Vec<ResponseRecord>,
}

/// The wizard: current screen, session context and per-screen answers.
#[derive(Debug, Clone, Default)]
pub struct Flow {
    screen: Screen,
    context: Option<SessionContext>,
    sheets: BTreeMap<Instrument, AnswerSheet>,
}

impl Flow {
    /// A flow waiting on the start screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The active session context. `None` on the start screen.
    #[must_use]
    pub fn context(&self) -> Option<&SessionContext> {
        self.context.as_ref()
    }

    /// The answer sheet of the current screen, if it is a questionnaire.
    #[must_use]
    pub fn current_sheet(&self) -> Option<&AnswerSheet> {
        self.screen.instrument().and_then(|i| self.sheets.get(&i))
    }

    /// Leave `Start` and enter the first screen of `path`.
    pub fn begin(&mut self, path: FlowPath, context: SessionContext) -> Result<Screen> {
        if self.screen != Screen::Start {
            return Err(self.invalid("begin a flow"));
        }

        self.sheets = path.instruments().map(|i| (i, AnswerSheet::new(i))).collect();
        self.context = Some(context);
        self.screen = path.screens().first().copied().unwrap_or(Screen::Start);
        Ok(self.screen)
    }

    /// Select option `option` for item `item` on the current questionnaire.
    pub fn select(&mut self, item: usize, option: usize) -> Result<()> {
        let invalid = self.invalid("select an answer");
        let sheet = self
            .screen
            .instrument()
            .and_then(|i| self.sheets.get_mut(&i))
            .ok_or(invalid)?;
        sheet.select(item, option)
    }

    /// Move forward one screen.
    ///
    /// On a questionnaire this scores the sheet, stamps the records with `now`
    /// and appends them to `sink`; if the sheet is incomplete or the sink
    /// fails, the flow stays where it is. Terminal screens return to `Start`.
    pub fn advance<S: RecordSink>(&mut self, sink: &mut S, now: Timestamp) -> Result<Advance> {
        let from = self.screen;
        let records = match from.kind() {
            ScreenKind::Start => return Err(self.invalid("advance without a participant")),
            ScreenKind::Questionnaire(instrument) => {
                let context = self
                    .context
                    .as_ref()
                    .ok_or_else(|| self.invalid("advance without a session"))?;
                let sheet = self
                    .sheets
                    .get(&instrument)
                    .ok_or_else(|| self.invalid("advance without answers"))?;
                let scored = sheet.score()?;
                let records = records_for(&scored, context, now);
                sink.append_batch(&records)?;
                records
            }
            ScreenKind::Transition | ScreenKind::Terminal => Vec::new(),
        };

        let to = from.next();
        if to == Screen::Start {
            self.reset();
        } else {
            self.screen = to;
        }

        Ok(Advance { from, to, records })
    }

    /// Step back exactly one screen. Answers on the screen left are kept.
    pub fn previous(&mut self) -> Result<Screen> {
        match self.screen.kind() {
            ScreenKind::Start | ScreenKind::Terminal => Err(self.invalid("go back")),
            ScreenKind::Questionnaire(_) | ScreenKind::Transition => {
                let to = self.screen.previous();
                if to == Screen::Start {
                    self.reset();
                } else {
                    self.screen = to;
                }
                Ok(to)
            }
        }
    }

    /// Abandon the current flow and return to `Start`. Appended records stay.
    pub fn reset(&mut self) {
        self.screen = Screen::Start;
        self.context = None;
        self.sheets.clear();
    }

    /// Text of the current transition or terminal screen.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let block = self.context.as_ref().map(|c| c.block());
        let text = match self.screen {
            Screen::InitialDone => "¡Gracias! Terminaste la evaluación inicial.\n\n\
                 Pulsa continuar para volver a la pantalla inicial."
                .to_string(),
            Screen::BlockIntro => format!(
                "Bloque {}\n\nResponda la Escala de Autoevaluación con Maniquí \
                 (SAM: Valencia, Activación, Dominio).",
                block?
            ),
            Screen::StressIntro => {
                "Ahora responde el Cuestionario de Evaluación de Estrés (SAM).".to_string()
            }
            Screen::BlockDone => format!(
                "Bloque {} completado.\n\nEspere indicaciones y pulse continuar\n\
                 cuando sea momento se pasará al siguiente bloque.",
                block?
            ),
            _ => return None,
        };
        Some(text)
    }

    fn invalid(&self, action: &'static str) -> EscalasError {
        EscalasError::InvalidTransition {
            action,
            screen: self.screen.name(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::session::BlockId;
    use chrono::NaiveDate;

    fn at(second: u32) -> Timestamp {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(10, 0, second))
            .unwrap();
        Timestamp::from_datetime(dt)
    }

    fn context(block: u32) -> SessionContext {
        SessionContext::new("P01", "", BlockId::new(block).unwrap()).unwrap()
    }

    fn answer_all(flow: &mut Flow, option: usize) {
        let count = flow.current_sheet().unwrap().definition().item_count();
        for item in 0..count {
            flow.select(item, option).unwrap();
        }
    }

    /// A sink that refuses every batch.
    struct FailingSink;

    impl RecordSink for FailingSink {
        fn append_batch(&mut self, _records: &[ResponseRecord]) -> Result<()> {
            Err(std::io::Error::other("read-only file system").into())
        }
    }

    #[test]
    fn path_neighbours() {
        assert_eq!(Screen::Bai.next(), Screen::Pss);
        assert_eq!(Screen::Panas.next(), Screen::InitialDone);
        assert_eq!(Screen::InitialDone.next(), Screen::Start);
        assert_eq!(Screen::BlockDone.next(), Screen::Start);
        assert_eq!(Screen::Bai.previous(), Screen::Start);
        assert_eq!(Screen::StressSubset.previous(), Screen::StressIntro);
        assert_eq!(Screen::Start.path(), None);
        assert_eq!(Screen::Manikin.path(), Some(FlowPath::Block));
    }

    #[test]
    fn initial_path_runs_to_completion() {
        let mut flow = Flow::new();
        let mut log: Vec<ResponseRecord> = Vec::new();

        assert_eq!(flow.begin(FlowPath::Initial, context(1)).unwrap(), Screen::Bai);

        answer_all(&mut flow, 0);
        let step = flow.advance(&mut log, at(1)).unwrap();
        assert_eq!((step.from, step.to), (Screen::Bai, Screen::Pss));
        assert_eq!(step.records.len(), 21);

        answer_all(&mut flow, 0);
        let step = flow.advance(&mut log, at(2)).unwrap();
        assert_eq!(step.records.len(), 15);

        answer_all(&mut flow, 0);
        let step = flow.advance(&mut log, at(3)).unwrap();
        assert_eq!(step.to, Screen::InitialDone);
        assert!(flow.message().unwrap().contains("evaluación inicial"));

        let step = flow.advance(&mut log, at(4)).unwrap();
        assert_eq!(step.to, Screen::Start);
        assert!(step.records.is_empty());
        assert!(flow.context().is_none());

        assert_eq!(log.len(), 21 + 15 + 20);
        assert!(log.iter().all(|r| r.stage_label == "SinEtiqueta"));
        assert!(log.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn incomplete_screen_blocks_advance() {
        let mut flow = Flow::new();
        let mut log: Vec<ResponseRecord> = Vec::new();
        flow.begin(FlowPath::Initial, context(1)).unwrap();

        for item in 0..20 {
            flow.select(item, 1).unwrap();
        }
        match flow.advance(&mut log, at(1)) {
            Err(EscalasError::IncompleteScreen { instrument, missing }) => {
                assert_eq!(instrument, Instrument::Bai);
                assert_eq!(missing, vec![21]);
            }
            other => panic!("expected incomplete screen, got {other:?}"),
        }
        assert_eq!(flow.screen(), Screen::Bai);
        assert!(log.is_empty());

        flow.select(20, 1).unwrap();
        assert!(flow.advance(&mut log, at(1)).is_ok());
        assert_eq!(log.len(), 21);
    }

    #[test]
    fn bai_rows_carry_codes_in_order() {
        let mut flow = Flow::new();
        let mut log: Vec<ResponseRecord> = Vec::new();
        flow.begin(FlowPath::Initial, context(1)).unwrap();
        answer_all(&mut flow, 0);
        flow.select(4, 3).unwrap();
        flow.advance(&mut log, at(0)).unwrap();

        let codes: Vec<String> = log.iter().map(|r| r.item_code.clone()).collect();
        let expected: Vec<String> = (1..=21).map(|n| format!("BAI_{n}")).collect();
        assert_eq!(codes, expected);

        let fifth = &log[4];
        assert_eq!(fifth.instrument, "BAI");
        assert_eq!(fifth.item_text, "Miedo a que suceda lo peor");
        assert_eq!(fifth.response, "Bastante");
        assert_eq!(fifth.score, 3);
        assert_eq!(log.iter().filter(|r| r.score == 0).count(), 20);
    }

    #[test]
    fn failed_write_keeps_the_screen() {
        let mut flow = Flow::new();
        flow.begin(FlowPath::Initial, context(1)).unwrap();
        answer_all(&mut flow, 2);

        let err = flow.advance(&mut FailingSink, at(0)).unwrap_err();
        assert!(matches!(err, EscalasError::Io(_)));
        assert_eq!(flow.screen(), Screen::Bai);
        assert!(flow.current_sheet().unwrap().is_complete());
    }

    #[test]
    fn block_path_with_messages() {
        let mut flow = Flow::new();
        let mut log: Vec<ResponseRecord> = Vec::new();
        flow.begin(FlowPath::Block, context(4)).unwrap();

        assert_eq!(flow.screen(), Screen::BlockIntro);
        assert!(flow.message().unwrap().starts_with("Bloque 4\n"));
        assert!(flow.select(0, 0).is_err());

        flow.advance(&mut log, at(0)).unwrap();
        assert_eq!(flow.screen(), Screen::Manikin);
        flow.select(0, 4).unwrap();
        flow.select(1, 2).unwrap();
        flow.select(2, 8).unwrap();
        let step = flow.advance(&mut log, at(1)).unwrap();
        let scores: Vec<u32> = step.records.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![5, 7, 9]);

        assert_eq!(flow.screen(), Screen::StressIntro);
        flow.advance(&mut log, at(2)).unwrap();
        answer_all(&mut flow, 4);
        flow.advance(&mut log, at(3)).unwrap();

        assert_eq!(flow.screen(), Screen::BlockDone);
        assert!(flow.message().unwrap().starts_with("Bloque 4 completado."));
        flow.advance(&mut log, at(4)).unwrap();
        assert_eq!(flow.screen(), Screen::Start);

        assert_eq!(log.len(), 13);
        assert!(log.iter().all(|r| r.block_id.get() == 4));
    }

    #[test]
    fn previous_steps_back_one_screen_and_keeps_answers() {
        let mut flow = Flow::new();
        let mut log: Vec<ResponseRecord> = Vec::new();
        flow.begin(FlowPath::Initial, context(1)).unwrap();
        answer_all(&mut flow, 1);
        flow.advance(&mut log, at(0)).unwrap();
        flow.select(0, 3).unwrap();

        assert_eq!(flow.previous().unwrap(), Screen::Bai);
        assert!(flow.current_sheet().unwrap().is_complete());

        // re-advancing appends the screen again
        flow.advance(&mut log, at(1)).unwrap();
        assert_eq!(log.len(), 42);
        assert_eq!(flow.screen(), Screen::Pss);
        assert_eq!(flow.current_sheet().unwrap().selection(0), Some(3));
    }

    #[test]
    fn previous_from_first_screen_returns_to_start() {
        let mut flow = Flow::new();
        flow.begin(FlowPath::Block, context(2)).unwrap();
        assert_eq!(flow.previous().unwrap(), Screen::Start);
        assert!(flow.context().is_none());
        assert!(flow.previous().is_err());
    }

    #[test]
    fn start_rejects_advance_and_double_begin() {
        let mut flow = Flow::new();
        let mut log: Vec<ResponseRecord> = Vec::new();
        assert!(matches!(
            flow.advance(&mut log, at(0)),
            Err(EscalasError::InvalidTransition { screen: "start", .. })
        ));
        flow.begin(FlowPath::Initial, context(1)).unwrap();
        assert!(flow.begin(FlowPath::Block, context(1)).is_err());
    }

    #[test]
    fn terminal_screens_cannot_go_back() {
        let mut flow = Flow::new();
        let mut log: Vec<ResponseRecord> = Vec::new();
        flow.begin(FlowPath::Initial, context(1)).unwrap();
        for _ in 0..3 {
            answer_all(&mut flow, 0);
            flow.advance(&mut log, at(0)).unwrap();
        }
        assert_eq!(flow.screen(), Screen::InitialDone);
        assert!(flow.previous().is_err());
    }
}
