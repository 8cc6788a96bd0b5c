// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor configuration
//!
//! Configuration arrives as TOML (plus optional overrides applied by the
//! caller onto [`RawConfig`]) and is validated once into a [`MonitorConfig`].
//! Every problem is reported as a [`ConfigError`] before the monitor starts.

use crate::detect::{Detector, Vocabulary, DEFAULT_ACTION_KEYWORDS};
use crate::filter::FilterSpec;
use crate::schedule::Slot;
use crate::snapshot::DEFAULT_SNIPPET_CHARS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_LOG_PATH: &str = "slotwatch_results.txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SETTLE_SECS: u64 = 3;
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

const SUPPORTED_SCHEMES: [&str; 3] = ["http://", "https://", "file://"];
/// Characters that would break the pipe-delimited log line
const FORBIDDEN_TERM_CHARS: [char; 4] = ['|', ',', '\n', '\r'];

/// Errors in the monitor configuration. All are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing required field: target_url")]
    MissingTargetUrl,
    #[error("unsupported target url (expected http, https or file): {0}")]
    UnsupportedScheme(String),
    #[error("interval_seconds must be greater than zero")]
    ZeroInterval,
    #[error("scheduled mode requires at least one slot")]
    NoSlots,
    #[error("invalid slot {0:?} (expected HH:MM, 00:00-23:59)")]
    InvalidSlot(String),
    #[error("duplicate slot {0}")]
    DuplicateSlot(Slot),
    #[error("grace_minutes must be at most 59, got {0}")]
    GraceTooWide(u32),
    #[error("invalid {list} term {term:?}: {reason}")]
    InvalidTerm {
        list: &'static str,
        term: String,
        reason: &'static str,
    },
    #[error("snippet_chars must be greater than zero")]
    ZeroSnippet,
    #[error("detector needs at least one action keyword")]
    NoKeywords,
    #[error("source timeout_seconds must be greater than zero")]
    ZeroTimeout,
}

/// Scheduling discipline, chosen once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Poll every `interval` until the first confirmed availability
    Continuous { interval: Duration },
    /// Poll once per configured slot per day, indefinitely
    Scheduled { slots: Vec<Slot>, grace_minutes: u32 },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Continuous { .. } => "continuous",
            Mode::Scheduled { .. } => "scheduled",
        }
    }
}

/// Explicit mode selector in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Continuous,
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    pub action_keywords: Vec<String>,
    pub snippet_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub timeout: Duration,
    /// Pause after a page loads before it is materialized
    pub settle: Duration,
    pub user_agent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Show an OS notification in addition to the terminal alert
    pub desktop: bool,
    /// Skip the alert when the log already has a FOUND record for the
    /// target today
    pub once_per_day: bool,
}

/// Validated monitor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub target_url: String,
    pub mode: Mode,
    pub filter: FilterSpec,
    pub log_path: PathBuf,
    pub detector: DetectorConfig,
    pub source: SourceConfig,
    pub notify: NotifyConfig,
}

impl MonitorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        RawConfig::from_toml(content)?.resolve()
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        RawConfig::load(path)?.resolve()
    }

    /// Detector configured with this vocabulary and snippet bound
    pub fn build_detector(&self) -> Detector {
        Detector::new(
            Vocabulary::new(&self.detector.action_keywords),
            self.detector.snippet_chars,
        )
    }
}

/// Unvalidated configuration as it appears on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub target_url: Option<String>,
    pub log_path: Option<PathBuf>,
    #[serde(default)]
    pub schedule: RawSchedule,
    #[serde(default)]
    pub filter: RawFilter,
    #[serde(default)]
    pub detector: RawDetector,
    #[serde(default)]
    pub source: RawSource,
    #[serde(default)]
    pub notify: RawNotify,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSchedule {
    pub mode: Option<ModeKind>,
    pub interval_seconds: Option<u64>,
    #[serde(default)]
    pub slots: Vec<String>,
    pub grace_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFilter {
    #[serde(default)]
    pub allow: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDetector {
    pub action_keywords: Option<Vec<String>>,
    pub snippet_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSource {
    pub timeout_seconds: Option<u64>,
    pub settle_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNotify {
    pub desktop: Option<bool>,
    pub once_per_day: Option<bool>,
}

impl RawConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Validate into a [`MonitorConfig`]
    pub fn resolve(self) -> Result<MonitorConfig, ConfigError> {
        let target_url = self
            .target_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingTargetUrl)?;
        if !SUPPORTED_SCHEMES
            .iter()
            .any(|scheme| target_url.len() > scheme.len() && target_url.starts_with(scheme))
        {
            return Err(ConfigError::UnsupportedScheme(target_url));
        }

        let mode = resolve_mode(self.schedule)?;

        validate_terms("allow", &self.filter.allow)?;
        validate_terms("exclude", &self.filter.exclude)?;
        let filter = FilterSpec::new(self.filter.allow, self.filter.exclude);

        let action_keywords = self.detector.action_keywords.unwrap_or_else(|| {
            DEFAULT_ACTION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect()
        });
        if action_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::NoKeywords);
        }
        let snippet_chars = self.detector.snippet_chars.unwrap_or(DEFAULT_SNIPPET_CHARS);
        if snippet_chars == 0 {
            return Err(ConfigError::ZeroSnippet);
        }

        let timeout_secs = self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(MonitorConfig {
            target_url,
            mode,
            filter,
            log_path: self
                .log_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH)),
            detector: DetectorConfig {
                action_keywords,
                snippet_chars,
            },
            source: SourceConfig {
                timeout: Duration::from_secs(timeout_secs),
                settle: Duration::from_secs(
                    self.source.settle_seconds.unwrap_or(DEFAULT_SETTLE_SECS),
                ),
                user_agent: self
                    .source
                    .user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            },
            notify: NotifyConfig {
                desktop: self.notify.desktop.unwrap_or(true),
                once_per_day: self.notify.once_per_day.unwrap_or(false),
            },
        })
    }
}

fn resolve_mode(raw: RawSchedule) -> Result<Mode, ConfigError> {
    let kind = raw.mode.unwrap_or(if raw.slots.is_empty() {
        ModeKind::Continuous
    } else {
        ModeKind::Scheduled
    });

    match kind {
        ModeKind::Continuous => {
            if !raw.slots.is_empty() {
                tracing::warn!(
                    slots = raw.slots.len(),
                    "slots are ignored in continuous mode"
                );
            }
            let secs = raw.interval_seconds.unwrap_or(DEFAULT_INTERVAL_SECS);
            if secs == 0 {
                return Err(ConfigError::ZeroInterval);
            }
            Ok(Mode::Continuous {
                interval: Duration::from_secs(secs),
            })
        }
        ModeKind::Scheduled => {
            if raw.slots.is_empty() {
                return Err(ConfigError::NoSlots);
            }
            let mut slots: Vec<Slot> = Vec::with_capacity(raw.slots.len());
            for raw_slot in &raw.slots {
                let slot: Slot = raw_slot.parse()?;
                if slots.contains(&slot) {
                    return Err(ConfigError::DuplicateSlot(slot));
                }
                slots.push(slot);
            }
            let grace_minutes = raw.grace_minutes.unwrap_or(0);
            if grace_minutes > 59 {
                return Err(ConfigError::GraceTooWide(grace_minutes));
            }
            Ok(Mode::Scheduled {
                slots,
                grace_minutes,
            })
        }
    }
}

fn validate_terms(list: &'static str, terms: &[String]) -> Result<(), ConfigError> {
    for term in terms {
        let reason = if term.trim().is_empty() {
            Some("term is empty")
        } else if term.contains(FORBIDDEN_TERM_CHARS) {
            Some("terms may not contain '|', ',' or line breaks")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(ConfigError::InvalidTerm {
                list,
                term: term.clone(),
                reason,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
