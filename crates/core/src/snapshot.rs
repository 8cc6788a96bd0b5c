// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page snapshots captured once per tick

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default bound for the body text carried by a snapshot
pub const DEFAULT_SNIPPET_CHARS: usize = 400;

/// Structural probe that produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    /// Buttons, links and submit inputs
    Action,
    /// Elements with a button/alert class signature
    Styled,
    /// Form elements
    Form,
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::Action => write!(f, "action"),
            ProbeKind::Styled => write!(f, "styled"),
            ProbeKind::Form => write!(f, "form"),
        }
    }
}

/// Textual content found by one structural probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub probe: ProbeKind,
    pub text: String,
    pub visible: bool,
    /// Element went away while the page was being materialized; its text and
    /// visibility cannot be trusted.
    ///
    /// Only a materializer that reads a live document (a browser driver)
    /// can observe this. Sources that parse a fetched HTML string, such as
    /// `PageSource`, always leave it false.
    #[serde(default)]
    pub stale: bool,
}

impl Candidate {
    pub fn new(probe: ProbeKind, text: impl Into<String>, visible: bool) -> Self {
        Self {
            probe,
            text: text.into(),
            visible,
            stale: false,
        }
    }

    pub fn action(text: impl Into<String>) -> Self {
        Self::new(ProbeKind::Action, text, true)
    }

    pub fn styled(text: impl Into<String>) -> Self {
        Self::new(ProbeKind::Styled, text, true)
    }

    pub fn form() -> Self {
        Self::new(ProbeKind::Form, "", true)
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn stale(mut self) -> Self {
        self.stale = true;
        self
    }
}

/// Immutable capture of the monitored page at one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Candidates in probe priority order
    pub candidates: Vec<Candidate>,
    /// Whitespace-normalized, bounded page text
    pub body_text: String,
}

impl PageSnapshot {
    /// Build a snapshot, normalizing and bounding the raw body text
    pub fn new(candidates: Vec<Candidate>, raw_body: &str, max_chars: usize) -> Self {
        Self {
            candidates,
            body_text: normalize_text(raw_body, max_chars),
        }
    }

    /// Snapshot with only body text, bounded to the default snippet length
    pub fn from_body(raw_body: &str) -> Self {
        Self::new(Vec::new(), raw_body, DEFAULT_SNIPPET_CHARS)
    }

    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Candidates produced by the given probe, in capture order
    pub fn probed(&self, probe: ProbeKind) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(move |c| c.probe == probe)
    }
}

/// Collapse whitespace runs to single spaces and keep at most `max_chars`
/// characters (not bytes).
pub fn normalize_text(raw: &str, max_chars: usize) -> String {
    let joined = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&joined, max_chars)
}

/// Keep at most `max_chars` characters of `s`
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
