use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use paycheck_core::PaycheckCalculator;
use paycheck_ui::{Session, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Hourly paycheck calculator with overtime and a flat 17% tax.
///
/// With `--hours` and `--rate`, prints one paycheck and exits. Otherwise
/// starts an interactive form on stdin.
#[derive(Debug, Parser)]
#[command(name = "Paycheck", version, about)]
struct Cli {
    /// Hours worked in the period.
    #[arg(long, requires = "rate", allow_hyphen_values = true)]
    hours: Option<String>,

    /// Hourly pay rate.
    #[arg(long, requires = "hours", allow_hyphen_values = true)]
    rate: Option<String>,

    /// Log filter (e.g. `debug` or `paycheck_core=trace`). Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show log records on stderr.
    #[arg(short, long)]
    verbose: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    logging::init_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }
    logging::set_console_enabled(cli.verbose)?;

    if let (Some(hours), Some(rate)) = (&cli.hours, &cli.rate) {
        debug!("one-shot mode");
        return Ok(match PaycheckCalculator::new().compute(hours, rate) {
            Ok(result) => {
                println!("{result}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                println!("{error}");
                ExitCode::FAILURE
            }
        });
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.run().context("interactive session failed")?;

    Ok(ExitCode::SUCCESS)
}
