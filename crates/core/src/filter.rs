// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Allow/exclude filter applied to observed page text

use serde::{Deserialize, Serialize};

/// Caller-supplied filter, fixed for the lifetime of a run.
///
/// Terms match as case-insensitive substrings. An empty allow list accepts
/// everything; any exclude match vetoes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    allow: Vec<String>,
    exclude: Vec<String>,
}

impl FilterSpec {
    /// Build a filter, dropping blank terms and case-insensitive duplicates
    /// while keeping first-seen order.
    pub fn new<A, E>(allow: A, exclude: E) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            allow: dedup_terms(allow),
            exclude: dedup_terms(exclude),
        }
    }

    /// Filter that accepts everything
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn allow(&self) -> &[String] {
        &self.allow
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// First exclude term found in `text`
    pub fn excluded_by(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.exclude
            .iter()
            .find(|term| haystack.contains(&term.to_lowercase()))
            .map(String::as_str)
    }

    /// Allow terms found in `text`, in configured order
    pub fn matched_terms(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.allow
            .iter()
            .filter(|term| haystack.contains(&term.to_lowercase()))
            .cloned()
            .collect()
    }
}

fn dedup_terms<I>(terms: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut seen = Vec::<String>::new();
    let mut out = Vec::new();
    for term in terms {
        let term: String = term.into();
        let term = term.trim();
        if term.is_empty() {
            continue;
        }
        let key = term.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(term.to_string());
    }
    out
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
