// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! slotwatch - appointment availability monitor

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod lifecycle;
mod logging;
mod output;
mod settings;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, history, probe, run};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "slotwatch",
    version,
    about = "slotwatch - Watch a booking page and alert when appointments open"
)]
struct Cli {
    /// Config file (default: ./slotwatch.toml when present)
    #[arg(long, short = 'c', global = true, env = "SLOTWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Diagnostic log filter, e.g. "debug" or "sw_engine=trace" (default: RUST_LOG, then info)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also write diagnostics to this file
    #[arg(long, global = true)]
    diagnostic_log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monitor the target until it opens (continuous) or forever (scheduled)
    Run(run::RunArgs),
    /// Validate the configuration and print the resolved settings
    Check(check::CheckArgs),
    /// Capture and evaluate the page once; nothing is logged or alerted
    Probe(probe::ProbeArgs),
    /// Show records from the result log
    History(history::HistoryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::setup_logging(cli.log_level.as_deref(), cli.diagnostic_log.as_deref())?;

    let cwd = std::env::current_dir()?;
    let config_path = settings::discover(cli.config.as_deref(), &cwd);

    match cli.command {
        Commands::Run(args) => run::handle(config_path.as_deref(), args).await,
        Commands::Check(args) => check::handle(config_path.as_deref(), args),
        Commands::Probe(args) => probe::handle(config_path.as_deref(), args).await,
        Commands::History(args) => history::handle(config_path.as_deref(), args),
    }
}
