//! # Escalas
//!
//! Terminal administration of the BAI, PSS, PANAS and SAM questionnaires.
//!
//! Every completed questionnaire screen is appended to a CSV log.

use clap::Parser;
use escalas::cli::{cmd_init, cmd_instruments, cmd_run, cmd_status, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd_run(&config),
        Commands::Init { force } => cmd_init(&config.log_path, force),
        Commands::Instruments { json } => cmd_instruments(json),
        Commands::Status { json } => cmd_status(&config.log_path, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with the wizard. `RUST_LOG` wins.
fn init_tracing(verbose: bool) {
    let default = if verbose { "escalas=debug,escalas_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
