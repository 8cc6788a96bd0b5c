// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result log records and their pipe-delimited line format
//!
//! ```text
//! 2026-03-01T08:00:04+01:00 | FOUND | https://example.org/rdv | matched: rendez | snippet: ...
//! ```
//!
//! Both outcomes carry the `matched:` and `snippet:` fields. Lines written by
//! older tooling (`YYYY-MM-DD HH:MM:SS` timestamps, bare `NOT_FOUND` lines)
//! still parse.

use crate::detect::DetectionResult;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const FIELD_SEP: &str = " | ";
const MATCHED_PREFIX: &str = "matched: ";
const SNIPPET_PREFIX: &str = "snippet: ";
const LEGACY_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Per-tick outcome persisted to the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Found,
    NotFound,
}

impl Outcome {
    pub fn from_open(is_open: bool) -> Self {
        if is_open {
            Outcome::Found
        } else {
            Outcome::NotFound
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found => write!(f, "FOUND"),
            Outcome::NotFound => write!(f, "NOT_FOUND"),
        }
    }
}

impl FromStr for Outcome {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FOUND" => Ok(Outcome::Found),
            "NOT_FOUND" => Ok(Outcome::NotFound),
            other => Err(LineError::UnknownOutcome(other.to_string())),
        }
    }
}

/// Errors parsing a result log line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected at least 3 fields, found {0}")]
    TooFewFields(usize),
    #[error("invalid timestamp: {0}")]
    Timestamp(String),
    #[error("unknown outcome: {0}")]
    UnknownOutcome(String),
    #[error("unexpected field: {0}")]
    UnexpectedField(String),
}

/// One durable record in the result log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<FixedOffset>,
    /// Monitored target (the page URL)
    pub target: String,
    pub outcome: Outcome,
    pub matched_terms: Vec<String>,
    pub snippet: String,
}

impl LogEntry {
    /// Record a detection outcome for `target`
    pub fn from_detection(
        timestamp: DateTime<FixedOffset>,
        target: impl Into<String>,
        result: &DetectionResult,
    ) -> Self {
        Self {
            timestamp,
            target: target.into(),
            outcome: Outcome::from_open(result.is_open),
            matched_terms: result.matched_terms.clone(),
            snippet: result.snippet.clone(),
        }
    }

    /// Local calendar date of the record
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Render as a single log line, without the trailing newline
    pub fn to_line(&self) -> String {
        [
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
            self.outcome.to_string(),
            one_line(&self.target),
            format!("{}{}", MATCHED_PREFIX, one_line(&self.matched_terms.join(","))),
            format!("{}{}", SNIPPET_PREFIX, one_line(&self.snippet)),
        ]
        .join(FIELD_SEP)
    }

    /// Parse a single log line (without its newline)
    pub fn parse_line(line: &str) -> Result<Self, LineError> {
        let fields: Vec<&str> = line.trim_end().splitn(5, FIELD_SEP).collect();
        if fields.len() < 3 {
            return Err(LineError::TooFewFields(fields.len()));
        }

        let timestamp = parse_timestamp(fields[0].trim())?;
        let outcome = fields[1].trim().parse()?;
        let target = fields[2].trim().to_string();

        let mut matched_terms = Vec::new();
        let mut snippet = String::new();
        for field in &fields[3..] {
            if let Some(rest) = field.strip_prefix(MATCHED_PREFIX.trim_end()) {
                matched_terms = rest
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
            } else if let Some(rest) = field.strip_prefix(SNIPPET_PREFIX.trim_end()) {
                snippet = rest.trim_start().to_string();
            } else {
                return Err(LineError::UnexpectedField((*field).to_string()));
            }
        }

        Ok(Self {
            timestamp,
            target,
            outcome,
            matched_terms,
            snippet,
        })
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, LineError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts);
    }
    // Legacy lines carry no offset; keep their wall time as-is
    NaiveDateTime::parse_from_str(raw, LEGACY_TIMESTAMP)
        .map(|naive| Utc.fix().from_utc_datetime(&naive))
        .map_err(|_| LineError::Timestamp(raw.to_string()))
}

/// Fold line breaks and field separators so a value cannot split a record
fn one_line(value: &str) -> String {
    value
        .replace(['\r', '\n'], " ")
        .replace(FIELD_SEP, " / ")
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
