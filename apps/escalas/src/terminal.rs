//! # Terminal Wizard
//!
//! Line-based presentation of the questionnaire flow.
//!
//! The wizard renders whatever screen the core [`Flow`] is on and turns typed
//! lines into flow operations:
//! - start screen: participant id, stage label, block number, path choice
//! - questionnaire: one numbered option per item (`<` back, `q` abandon)
//! - transition/terminal pages: Enter continues (`<` back on transitions)
//!
//! Input comes through the [`Prompt`] trait so the same wizard runs on a
//! rustyline editor or on scripted input in tests.

use escalas_core::{
    AssetCatalog, BlockId, EscalasError, Flow, FlowPath, Instrument, MAX_BLOCK, RecordSink,
    Screen, ScreenKind, SessionContext, Timestamp,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Title shown on the start screen.
pub const APP_TITLE: &str = "Cuestionarios (BAI, PSS, PANAS, SAM-manikin, SAM-estrés)";

const CMD_BACK: &str = "<";
const CMD_QUIT: &str = "q";

// =============================================================================
// PROMPT
// =============================================================================

/// Source of operator input and sink of screen text.
pub trait Prompt {
    /// Show `prompt` and read one line. `Ok(None)` means input ended.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print a block of text.
    fn show(&mut self, text: &str) -> io::Result<()>;
}

/// Prompt over any buffered reader and writer (stdin/stdout, or a script).
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

/// Interactive prompt with line editing and history.
pub struct EditorPrompt {
    editor: rustyline::DefaultEditor,
}

impl EditorPrompt {
    pub fn new() -> io::Result<Self> {
        let editor = rustyline::DefaultEditor::new().map_err(readline_to_io)?;
        Ok(Self { editor })
    }
}

impl Prompt for EditorPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        use rustyline::error::ReadlineError;

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!(error = %e, "history entry not recorded");
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(readline_to_io(e)),
        }
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }
}

fn readline_to_io(err: rustyline::error::ReadlineError) -> io::Error {
    match err {
        rustyline::error::ReadlineError::Io(e) => e,
        other => io::Error::other(other.to_string()),
    }
}

// =============================================================================
// WIZARD
// =============================================================================

/// Errors that end a wizard run.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The terminal could not be read or written.
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] io::Error),

    /// The core rejected an operation or the log could not be written.
    #[error(transparent)]
    Core(#[from] EscalasError),
}

/// Counters for one wizard run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WizardReport {
    /// Flows that reached their terminal screen.
    pub flows_completed: usize,
    /// Screens whose records were appended.
    pub screens_saved: usize,
    /// Records appended in total.
    pub rows_written: usize,
}

/// What the operator chose on a screen.
enum Step {
    Continue,
    Quit,
}

/// Drives a [`Flow`] from a [`Prompt`], appending records to a sink.
pub struct Wizard<P, S> {
    prompt: P,
    sink: S,
    flow: Flow,
    assets: AssetCatalog,
    report: WizardReport,
}

impl<P: Prompt, S: RecordSink> Wizard<P, S> {
    pub fn new(prompt: P, sink: S, assets: AssetCatalog) -> Self {
        Self {
            prompt,
            sink,
            flow: Flow::new(),
            assets,
            report: WizardReport::default(),
        }
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    /// Run until the operator quits on the start screen or input ends.
    ///
    /// A failed log write ends the run with the error; the flow stays on the
    /// screen whose records could not be written.
    pub fn run(&mut self) -> Result<WizardReport, WizardError> {
        loop {
            let step = match self.flow.screen().kind() {
                ScreenKind::Start => self.start_screen()?,
                ScreenKind::Questionnaire(instrument) => self.questionnaire(instrument)?,
                ScreenKind::Transition => self.page(true)?,
                ScreenKind::Terminal => self.page(false)?,
            };
            if matches!(step, Step::Quit) {
                break;
            }
        }
        info!(
            flows = self.report.flows_completed,
            rows = self.report.rows_written,
            "wizard finished"
        );
        Ok(self.report)
    }

    // -------------------------------------------------------------------------
    // Start screen
    // -------------------------------------------------------------------------

    fn start_screen(&mut self) -> Result<Step, WizardError> {
        self.prompt.show(&format!("\n=== {APP_TITLE} ===\n"))?;

        let participant = loop {
            let Some(line) = self.prompt.read_line("ID del participante: ")? else {
                return Ok(Step::Quit);
            };
            if line.trim().is_empty() {
                self.prompt.show("Dato faltante: Introduce el ID del participante.")?;
                continue;
            }
            break line;
        };

        let Some(stage) = self
            .prompt
            .read_line("Etiqueta de etapa (p. ej., Baseline, Ruta 1, etc.): ")?
        else {
            return Ok(Step::Quit);
        };

        let block = loop {
            let Some(line) = self
                .prompt
                .read_line(&format!("Bloque # (1-{MAX_BLOCK}) [1]: "))?
            else {
                return Ok(Step::Quit);
            };
            match parse_block(&line) {
                Some(block) => break block,
                None => self
                    .prompt
                    .show(&format!("Elige un bloque entre 1 y {MAX_BLOCK}."))?,
            }
        };

        let path = loop {
            self.prompt.show(
                "  1) Evaluación inicial (BAI + PSS + PANAS)\n  \
                 2) Iniciar Bloque Inter-etapas (SAM-manikin + SAM-estrés)\n  \
                 q) Salir",
            )?;
            let Some(line) = self.prompt.read_line("Flujo: ")? else {
                return Ok(Step::Quit);
            };
            match line.trim() {
                "1" => break FlowPath::Initial,
                "2" => break FlowPath::Block,
                CMD_QUIT => return Ok(Step::Quit),
                other => debug!(input = other, "unrecognised flow choice"),
            }
        };

        match SessionContext::new(&participant, &stage, block) {
            Ok(context) => {
                info!(
                    participant = context.participant_id(),
                    stage = context.stage_label(),
                    block = context.block().get(),
                    ?path,
                    "flow started"
                );
                self.flow.begin(path, context)?;
            }
            Err(e) if e.is_validation() => {
                self.prompt.show(&format!("Dato faltante: {e}"))?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Step::Continue)
    }

    // -------------------------------------------------------------------------
    // Questionnaire screens
    // -------------------------------------------------------------------------

    fn questionnaire(&mut self, instrument: Instrument) -> Result<Step, WizardError> {
        let def = instrument.definition();
        let screen = self.flow.screen();

        self.prompt.show(&format!("\n=== {} ===\n{}\n", def.title, def.instructions))?;
        self.prompt.show(&format!(
            "(Escribe el número de la opción; Enter deja la respuesta como está, \
             '{CMD_BACK}' vuelve a la pantalla anterior, '{CMD_QUIT}' abandona el flujo.)"
        ))?;

        let options = def
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("{}) {}", i + 1, o.label))
            .collect::<Vec<_>>()
            .join("   ");

        for (index, item) in def.items.iter().enumerate() {
            let mut text = format!("\n{}", item.prompt);
            if let Some(image) = item.image {
                text.push_str(&format!("\n{}", self.assets.resolve(image).describe()));
            }
            text.push_str(&format!("\n  {options}"));
            self.prompt.show(&text)?;

            loop {
                let current = self
                    .flow
                    .current_sheet()
                    .and_then(|sheet| sheet.selection(index));
                let hint = match current {
                    Some(opt) => format!("Respuesta [{}]: ", opt + 1),
                    None => "Respuesta: ".to_string(),
                };
                let Some(line) = self.prompt.read_line(&hint)? else {
                    return Ok(Step::Quit);
                };

                match line.trim() {
                    CMD_BACK => {
                        let to = self.flow.previous()?;
                        debug!(from = %screen, %to, "stepped back");
                        return Ok(Step::Continue);
                    }
                    CMD_QUIT => {
                        warn!(%screen, "flow abandoned by operator");
                        self.flow.reset();
                        return Ok(Step::Continue);
                    }
                    "" => break,
                    choice => match parse_option(choice, def.options.len()) {
                        Some(option) => {
                            self.flow.select(index, option)?;
                            break;
                        }
                        None => self.prompt.show(&format!(
                            "Opción no válida. Elige un número entre 1 y {}.",
                            def.options.len()
                        ))?,
                    },
                }
            }
        }

        match self.flow.advance(&mut self.sink, Timestamp::now()) {
            Ok(step) => {
                self.report.screens_saved += 1;
                self.report.rows_written += step.records.len();
                info!(
                    %instrument,
                    rows = step.records.len(),
                    next = %step.to,
                    "screen saved"
                );
                Ok(Step::Continue)
            }
            Err(e) if e.is_validation() => {
                debug!(%instrument, error = %e, "screen incomplete");
                self.prompt.show(def.incomplete_message)?;
                Ok(Step::Continue)
            }
            Err(e) => {
                error!(%instrument, error = %e, "failed to append screen to log");
                Err(e.into())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Transition and terminal pages
    // -------------------------------------------------------------------------

    fn page(&mut self, can_go_back: bool) -> Result<Step, WizardError> {
        if let Some(message) = self.flow.message() {
            self.prompt.show(&format!("\n{message}\n"))?;
        }
        let hint = if can_go_back {
            "[Enter] Continuar   [<] Anterior: "
        } else {
            "[Enter] Continuar: "
        };
        let Some(line) = self.prompt.read_line(hint)? else {
            return Ok(Step::Quit);
        };

        if can_go_back && line.trim() == CMD_BACK {
            self.flow.previous()?;
            return Ok(Step::Continue);
        }

        let step = self.flow.advance(&mut self.sink, Timestamp::now())?;
        if step.to == Screen::Start {
            self.report.flows_completed += 1;
            info!(from = %step.from, "flow completed");
        }
        Ok(Step::Continue)
    }
}

/// Parse a block selection. Blank means block 1.
fn parse_block(input: &str) -> Option<BlockId> {
    let input = input.trim();
    if input.is_empty() {
        return Some(BlockId::FIRST);
    }
    input.parse::<u32>().ok().and_then(|n| BlockId::new(n).ok())
}

/// Parse a 1-based option number into a 0-based option index.
fn parse_option(input: &str, count: usize) -> Option<usize> {
    input
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
}
