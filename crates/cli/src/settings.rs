// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration discovery and command-line/environment overrides

use clap::Args;
use std::path::{Path, PathBuf};
use sw_core::{ConfigError, ModeKind, MonitorConfig, RawConfig};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "slotwatch.toml";

/// Overrides applied on top of the config file before validation
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Page to monitor (http, https or file URL)
    #[arg(long, env = "SLOTWATCH_URL")]
    pub url: Option<String>,

    /// Continuous mode poll interval in seconds
    #[arg(long, env = "SLOTWATCH_INTERVAL")]
    pub interval: Option<u64>,

    /// Daily slots as HH:MM, comma separated; switches to scheduled mode
    #[arg(long, env = "SLOTWATCH_TIMES", value_delimiter = ',')]
    pub times: Vec<String>,

    /// Allow terms, comma separated
    #[arg(long, env = "SLOTWATCH_ALLOW", value_delimiter = ',')]
    pub allow: Vec<String>,

    /// Exclude terms, comma separated
    #[arg(long, env = "SLOTWATCH_EXCLUDE", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Result log path
    #[arg(long = "log", env = "SLOTWATCH_LOG")]
    pub log_path: Option<PathBuf>,
}

impl Overrides {
    /// Apply to a raw config. Blank list entries from the environment
    /// (`SLOTWATCH_ALLOW=""`, trailing commas) are dropped.
    pub fn apply(&self, raw: &mut RawConfig) {
        if let Some(url) = &self.url {
            raw.target_url = Some(url.clone());
        }
        if let Some(interval) = self.interval {
            raw.schedule.interval_seconds = Some(interval);
        }
        let times = non_blank(&self.times);
        if !times.is_empty() {
            raw.schedule.slots = times;
            raw.schedule.mode = Some(ModeKind::Scheduled);
        }
        let allow = non_blank(&self.allow);
        if !allow.is_empty() {
            raw.filter.allow = allow;
        }
        let exclude = non_blank(&self.exclude);
        if !exclude.is_empty() {
            raw.filter.exclude = exclude;
        }
        if let Some(path) = &self.log_path {
            raw.log_path = Some(path.clone());
        }
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// The explicit config path, or `slotwatch.toml` in `dir` if it exists
pub fn discover(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        }
    }
}

/// Raw config from the discovered file (or empty), with overrides applied
pub fn load_raw(config_path: Option<&Path>, overrides: &Overrides) -> Result<RawConfig, ConfigError> {
    let mut raw = match config_path {
        Some(path) => RawConfig::load(path)?,
        None => RawConfig::default(),
    };
    overrides.apply(&mut raw);
    Ok(raw)
}

/// Load, override and validate
pub fn resolve(config_path: Option<&Path>, overrides: &Overrides) -> Result<MonitorConfig, ConfigError> {
    let raw = load_raw(config_path, overrides)?;
    if let Some(path) = config_path {
        tracing::debug!(path = %path.display(), "loaded config file");
    }
    raw.resolve()
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
