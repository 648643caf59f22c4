//! # CLI Module
//!
//! Command-line interface for Escalas.
//!
//! Commands:
//! - `run`: administer questionnaires in the terminal (default)
//! - `init`: create the response log with its header
//! - `instruments`: list the instrument registry
//! - `status`: summarize the response log

use crate::config::{AppConfig, ENV_ASSETS, ENV_LOG};
use crate::terminal::{EditorPrompt, Prompt, Wizard, WizardReport};
use clap::{Parser, Subcommand};
use escalas_core::assets::DEFAULT_ASSETS_DIR;
use escalas_core::storage::DEFAULT_LOG_FILE;
use escalas_core::{CsvLog, Instrument, LogSummary};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "escalas")]
#[command(author, version, about = "Administer BAI, PSS, PANAS and SAM questionnaires")]
pub struct Cli {
    /// Response log (CSV, appended to)
    #[arg(short, long, global = true, env = ENV_LOG, default_value = DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// Directory with the scale images and the icon
    #[arg(short, long, global = true, env = ENV_ASSETS, default_value = DEFAULT_ASSETS_DIR)]
    pub assets: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> AppConfig {
        AppConfig::new(&self.log, &self.assets)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Administer questionnaires interactively (default)
    Run,

    /// Create the response log with its header
    Init {
        /// Discard an existing log and start an empty one
        #[arg(short, long)]
        force: bool,
    },

    /// List the instruments, their items and scale ranges
    Instruments {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the response log
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Run the interactive wizard on the current terminal.
pub fn cmd_run(config: &AppConfig) -> Result<(), String> {
    let prompt = EditorPrompt::new().map_err(|e| format!("Failed to open terminal: {}", e))?;
    let report = run_session(prompt, config)?;

    println!(
        "Flujos completados: {}  Filas guardadas: {}",
        report.flows_completed, report.rows_written
    );
    Ok(())
}

/// Run the wizard on any prompt, appending to the configured log.
pub fn run_session<P: Prompt>(prompt: P, config: &AppConfig) -> Result<WizardReport, String> {
    let log = config.open_log()?;
    let assets = config.assets();

    if !assets.icon().is_found() {
        warn!(dir = %assets.root().display(), "application icon not found");
    }
    info!(log = %log.path().display(), "response log ready");

    let mut wizard = Wizard::new(prompt, log, assets);
    wizard.run().map_err(|e| {
        format!(
            "Session ended: could not save responses to {}: {}",
            config.log_path.display(),
            e
        )
    })
}

/// Create the log file. Without `force` an existing log is left untouched.
pub fn cmd_init(path: &Path, force: bool) -> Result<(), String> {
    let existed = path.exists();

    if force {
        CsvLog::create(path).map_err(|e| format!("Failed to create log: {}", e))?;
    } else {
        CsvLog::open(path).map_err(|e| format!("Failed to open log: {}", e))?;
    }

    if existed && !force {
        println!("Log already present at {:?}", path);
    } else {
        println!("Initialized response log at {:?}", path);
    }
    Ok(())
}

/// Registry entry as printed by `instruments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstrumentSummary {
    pub instrument: &'static str,
    pub title: &'static str,
    pub items: usize,
    pub min_score: u8,
    pub max_score: u8,
    /// 1-based positions of reverse-scored items.
    pub reversed: Vec<usize>,
    pub total_row: Option<&'static str>,
}

/// Summaries of every instrument, in presentation order.
#[must_use]
pub fn instrument_summaries() -> Vec<InstrumentSummary> {
    Instrument::ALL
        .iter()
        .map(|instrument| {
            let def = instrument.definition();
            InstrumentSummary {
                instrument: instrument.log_name(),
                title: def.title,
                items: def.item_count(),
                min_score: def.min_score(),
                max_score: def.max_score(),
                reversed: def.reversed_positions(),
                total_row: def.total.map(|t| t.instrument),
            }
        })
        .collect()
}

/// Print the instrument registry.
pub fn cmd_instruments(json: bool) -> Result<(), String> {
    let summaries = instrument_summaries();

    if json {
        let out = serde_json::to_string_pretty(&summaries)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        println!("{}", out);
    } else {
        println!("=== Instruments ===");
        for s in &summaries {
            println!("{:<12} {:>3} items  scores {}-{}", s.instrument, s.items, s.min_score, s.max_score);
            if !s.reversed.is_empty() {
                println!("             reversed: {:?}", s.reversed);
            }
            if let Some(total) = s.total_row {
                println!("             total row: {}", total);
            }
        }
    }
    Ok(())
}

/// Read the log and count its contents.
pub fn log_summary(path: &Path) -> Result<LogSummary, String> {
    if !path.exists() {
        return Err(format!("No response log at {:?}. Run `escalas init` first.", path));
    }
    let log = CsvLog::open(path).map_err(|e| format!("Failed to open log: {}", e))?;
    let records = log
        .read_all()
        .map_err(|e| format!("Failed to read log: {}", e))?;
    Ok(LogSummary::from_records(&records))
}

/// Print a summary of the log.
pub fn cmd_status(path: &Path, json: bool) -> Result<(), String> {
    let summary = log_summary(path)?;

    if json {
        let out = serde_json::json!({
            "log": path.display().to_string(),
            "rows": summary.rows,
            "summary_rows": summary.summary_rows,
            "participants": summary.participants,
            "blocks": summary.blocks,
            "per_instrument": summary.per_instrument,
        });
        let pretty = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        println!("{}", pretty);
    } else {
        println!("=== Response Log ===");
        println!("Path: {:?}", path);
        println!("Rows: {} ({} totals)", summary.rows, summary.summary_rows);
        println!("Participants: {}", summary.participants.len());
        let blocks: Vec<String> = summary.blocks.iter().map(u8::to_string).collect();
        println!("Blocks: {}", blocks.join(", "));
        for (instrument, rows) in &summary.per_instrument {
            println!("  {:<12} {}", instrument, rows);
        }
    }
    Ok(())
}
