// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Availability detection over a page snapshot
//!
//! Detection runs in a fixed order and short-circuits:
//! 1. exclude gate: any exclude term in the body text closes the page outright
//! 2. structural strategies, strongest first; the first one that fires wins
//! 3. filter gate: a structural signal only counts if the allow list matches
//!
//! A strategy that faults is logged and counts as "did not match". The
//! detector itself never fails.

use crate::filter::FilterSpec;
use crate::snapshot::{truncate_chars, Candidate, PageSnapshot, ProbeKind, DEFAULT_SNIPPET_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Booking vocabulary of the default target (French and Arabic)
pub const DEFAULT_ACTION_KEYWORDS: [&str; 4] = ["rendez", "prendre", "حجز", "موعد"];

/// A structural heuristic used to infer availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Visible button/link whose text carries an action keyword
    VisibleAction,
    /// Button/alert-styled element whose text carries an action keyword
    StyledAction,
    /// Any form on the page (weak, permissive signal)
    FormPresence,
}

impl Strategy {
    /// Evaluation order, highest confidence first
    pub const PRIORITY: [Strategy; 3] = [
        Strategy::VisibleAction,
        Strategy::StyledAction,
        Strategy::FormPresence,
    ];

    fn evaluate(
        self,
        snapshot: &PageSnapshot,
        vocabulary: &Vocabulary,
    ) -> Result<bool, DetectionFault> {
        match self {
            Strategy::VisibleAction => scan(snapshot, ProbeKind::Action, |c| {
                c.visible && vocabulary.matches(&c.text)
            }),
            Strategy::StyledAction => {
                scan(snapshot, ProbeKind::Styled, |c| vocabulary.matches(&c.text))
            }
            Strategy::FormPresence => scan(snapshot, ProbeKind::Form, |_| true),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::VisibleAction => write!(f, "visible_action"),
            Strategy::StyledAction => write!(f, "styled_action"),
            Strategy::FormPresence => write!(f, "form_presence"),
        }
    }
}

/// Walk candidates of one probe in order until `hit` accepts one
fn scan(
    snapshot: &PageSnapshot,
    probe: ProbeKind,
    hit: impl Fn(&Candidate) -> bool,
) -> Result<bool, DetectionFault> {
    for (index, candidate) in snapshot.probed(probe).enumerate() {
        if candidate.stale {
            return Err(DetectionFault::StaleCandidate { probe, index });
        }
        if hit(candidate) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// A single strategy could not be evaluated. Never leaves the detector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionFault {
    #[error("stale {probe} candidate at index {index}")]
    StaleCandidate { probe: ProbeKind, index: usize },
}

/// Locale-specific action keywords, matched case-insensitively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: Vec<String>,
}

impl Vocabulary {
    pub fn new<I>(keywords: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_ACTION_KEYWORDS)
    }
}

/// Outcome of one detector invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub is_open: bool,
    /// Allow terms found in the body text, in configured order
    pub matched_terms: Vec<String>,
    /// Bounded excerpt of the body text
    pub snippet: String,
    /// Strategy that produced the structural signal, if any
    pub signal: Option<Strategy>,
    /// Exclude term that vetoed the page, if any
    pub excluded_by: Option<String>,
}

/// Pure, deterministic availability detector
#[derive(Debug, Clone)]
pub struct Detector {
    vocabulary: Vocabulary,
    snippet_chars: usize,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(Vocabulary::default(), DEFAULT_SNIPPET_CHARS)
    }
}

impl Detector {
    pub fn new(vocabulary: Vocabulary, snippet_chars: usize) -> Self {
        Self {
            vocabulary,
            snippet_chars,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Evaluate a snapshot against the strategies and the filter
    pub fn detect(&self, snapshot: &PageSnapshot, filter: &FilterSpec) -> DetectionResult {
        let snippet = truncate_chars(&snapshot.body_text, self.snippet_chars);

        if let Some(term) = filter.excluded_by(&snapshot.body_text) {
            tracing::debug!(term, "exclude term present, page treated as closed");
            return DetectionResult {
                is_open: false,
                matched_terms: Vec::new(),
                snippet,
                signal: None,
                excluded_by: Some(term.to_string()),
            };
        }

        let signal = self.structural_signal(snapshot);
        let matched_terms = filter.matched_terms(&snapshot.body_text);

        let is_open = match signal {
            Some(_) => filter.allow().is_empty() || !matched_terms.is_empty(),
            None => false,
        };

        DetectionResult {
            is_open,
            matched_terms,
            snippet,
            signal,
            excluded_by: None,
        }
    }

    fn structural_signal(&self, snapshot: &PageSnapshot) -> Option<Strategy> {
        Strategy::PRIORITY.into_iter().find(|strategy| {
            match strategy.evaluate(snapshot, &self.vocabulary) {
                Ok(hit) => hit,
                Err(fault) => {
                    tracing::debug!(%strategy, %fault, "strategy faulted, treating as no match");
                    false
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
