// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `slotwatch history` - Show recorded outcomes

use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use sw_core::config::DEFAULT_LOG_PATH;
use sw_core::RawConfig;
use sw_storage::ResultLog;

#[derive(Args)]
pub struct HistoryArgs {
    /// Result log to read (default: the config's log_path)
    #[arg(long = "log", env = "SLOTWATCH_LOG")]
    pub log_path: Option<PathBuf>,

    /// Only FOUND records
    #[arg(long)]
    pub found: bool,

    /// Show at most this many of the most recent records
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn handle(config_path: Option<&Path>, args: HistoryArgs) -> Result<()> {
    let log_path = match (args.log_path, config_path) {
        (Some(path), _) => path,
        (None, Some(config)) => RawConfig::load(config)?
            .log_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH)),
        (None, None) => PathBuf::from(DEFAULT_LOG_PATH),
    };

    let mut entries = ResultLog::replay(&log_path)?;
    if args.found {
        entries.retain(|e| e.is_found());
    }
    if let Some(limit) = args.limit {
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
    }

    output::print_list(
        &entries,
        args.format,
        &format!("No records in {}", log_path.display()),
    )
}
