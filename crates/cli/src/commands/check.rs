// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `slotwatch check` - Validate configuration and show what would run

use crate::output::{self, OutputFormat};
use crate::settings::{self, Overrides};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use sw_core::{Mode, MonitorConfig};

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub overrides: Overrides,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ConfigSummary {
    config_file: Option<PathBuf>,
    target_url: String,
    mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    slots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grace_minutes: Option<u32>,
    allow: Vec<String>,
    exclude: Vec<String>,
    log_path: PathBuf,
    action_keywords: Vec<String>,
    snippet_chars: usize,
    desktop_notifications: bool,
    once_per_day: bool,
}

impl ConfigSummary {
    fn new(config_file: Option<&Path>, config: &MonitorConfig) -> Self {
        let (interval_seconds, slots, grace_minutes) = match &config.mode {
            Mode::Continuous { interval } => (Some(interval.as_secs()), Vec::new(), None),
            Mode::Scheduled {
                slots,
                grace_minutes,
            } => (
                None,
                slots.iter().map(|s| s.to_string()).collect(),
                Some(*grace_minutes),
            ),
        };
        Self {
            config_file: config_file.map(Path::to_path_buf),
            target_url: config.target_url.clone(),
            mode: config.mode.name(),
            interval_seconds,
            slots,
            grace_minutes,
            allow: config.filter.allow().to_vec(),
            exclude: config.filter.exclude().to_vec(),
            log_path: config.log_path.clone(),
            action_keywords: config.detector.action_keywords.clone(),
            snippet_chars: config.detector.snippet_chars,
            desktop_notifications: config.notify.desktop,
            once_per_day: config.notify.once_per_day,
        }
    }
}

impl fmt::Display for ConfigSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration OK")?;
        if let Some(file) = &self.config_file {
            writeln!(f, "  File:     {}", file.display())?;
        }
        writeln!(f, "  Target:   {}", self.target_url)?;
        match self.interval_seconds {
            Some(secs) => writeln!(f, "  Mode:     {} (every {}s)", self.mode, secs)?,
            None => writeln!(
                f,
                "  Mode:     {} at {} (grace {} min)",
                self.mode,
                self.slots.join(", "),
                self.grace_minutes.unwrap_or(0)
            )?,
        }
        writeln!(f, "  Allow:    {}", list_or_any(&self.allow))?;
        writeln!(f, "  Exclude:  {}", list_or_none(&self.exclude))?;
        writeln!(f, "  Keywords: {}", self.action_keywords.join(", "))?;
        writeln!(f, "  Log:      {}", self.log_path.display())?;
        write!(
            f,
            "  Alerts:   terminal{}{}",
            if self.desktop_notifications { " + desktop" } else { "" },
            if self.once_per_day { ", once per day" } else { "" }
        )
    }
}

fn list_or_any(terms: &[String]) -> String {
    if terms.is_empty() {
        "(any)".to_string()
    } else {
        terms.join(", ")
    }
}

fn list_or_none(terms: &[String]) -> String {
    if terms.is_empty() {
        "(none)".to_string()
    } else {
        terms.join(", ")
    }
}

pub fn handle(config_path: Option<&Path>, args: CheckArgs) -> Result<()> {
    let config = settings::resolve(config_path, &args.overrides)?;
    output::print(&ConfigSummary::new(config_path, &config), args.format)
}
