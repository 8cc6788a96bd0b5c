// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `slotwatch run` - Monitor until availability is found or interrupted

use crate::lifecycle;
use crate::settings::{self, Overrides};
use anyhow::Result;
use clap::Args;
use std::path::Path;
use sw_engine::RunOutcome;
use tokio_util::sync::CancellationToken;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub overrides: Overrides,
}

pub async fn handle(config_path: Option<&Path>, args: RunArgs) -> Result<()> {
    let config = settings::resolve(config_path, &args.overrides)?;

    let cancel = CancellationToken::new();
    lifecycle::cancel_on_signal(cancel.clone())?;

    let report = lifecycle::run(config, cancel).await?;
    match &report.outcome {
        RunOutcome::Found(entry) => println!("{}", entry),
        RunOutcome::Cancelled => println!(
            "Stopped after {} checks ({} failed, {} alerts)",
            report.ticks, report.failed_ticks, report.notifications
        ),
    }

    Ok(())
}
