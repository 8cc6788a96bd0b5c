// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP and local-file page source
//!
//! Pages are fetched with a blocking `ureq` agent on the blocking pool, or
//! read from disk for `file://` URLs, then materialized into candidates with
//! CSS selectors.

use super::{FetchError, SnapshotSource};
use async_trait::async_trait;
use scraper::node::Element;
use scraper::{ElementRef, Html, Selector};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use sw_core::{normalize_text, Candidate, PageSnapshot, ProbeKind, SourceConfig};

const ACTION_SELECTOR: &str = "button, a, input[type=submit]";
const STYLED_SELECTOR: &str = "button[class*='btn'], a[class*='btn'], div.alert";
const FORM_SELECTOR: &str = "form";
const SKIPPED_TEXT_PARENTS: [&str; 3] = ["script", "style", "noscript"];

/// Page source for `http://`, `https://` and `file://` targets
#[derive(Clone)]
pub struct PageSource {
    agent: ureq::Agent,
    user_agent: String,
    settle: Duration,
    snippet_chars: usize,
    closed: Arc<AtomicBool>,
}

impl PageSource {
    pub fn new(config: &SourceConfig, snippet_chars: usize) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();
        Self {
            agent,
            user_agent: config.user_agent.clone(),
            settle: config.settle,
            snippet_chars,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    async fn fetch_http(&self, url: &str) -> Result<String, FetchError> {
        let agent = self.agent.clone();
        let user_agent = self.user_agent.clone();
        let owned_url = url.to_string();

        tokio::task::spawn_blocking(move || fetch_blocking(&agent, &owned_url, &user_agent))
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                message: format!("fetch task failed: {}", e),
            })?
    }
}

#[async_trait]
impl SnapshotSource for PageSource {
    async fn capture(&self, url: &str) -> Result<PageSnapshot, FetchError> {
        if self.is_closed() {
            return Err(FetchError::Closed);
        }

        let html = match url.split_once("://") {
            Some(("http" | "https", _)) => self.fetch_http(url).await?,
            Some(("file", path)) => {
                let path = PathBuf::from(path);
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| FetchError::Io { path, source })?
            }
            _ => return Err(FetchError::UnsupportedUrl(url.to_string())),
        };

        // Let late content settle before materializing, as a browser would
        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        parse_snapshot(&html, self.snippet_chars)
    }

    async fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!("page source closed");
        }
    }
}

fn fetch_blocking(agent: &ureq::Agent, url: &str, user_agent: &str) -> Result<String, FetchError> {
    let mut response = agent
        .get(url)
        .header("User-Agent", user_agent)
        .call()
        .map_err(|e| match e {
            ureq::Error::StatusCode(status) => FetchError::Status {
                url: url.to_string(),
                status,
            },
            other => FetchError::Network {
                url: url.to_string(),
                message: other.to_string(),
            },
        })?;

    response
        .body_mut()
        .read_to_string()
        .map_err(|e| FetchError::Network {
            url: url.to_string(),
            message: format!("failed to read response: {}", e),
        })
}

/// Materialize an HTML document into a snapshot.
///
/// Candidates are ordered action, styled, form; each group in document order.
pub fn parse_snapshot(html: &str, snippet_chars: usize) -> Result<PageSnapshot, FetchError> {
    let document = Html::parse_document(html);

    let mut candidates = Vec::new();
    for element in document.select(&selector(ACTION_SELECTOR)?) {
        candidates.push(Candidate::new(
            ProbeKind::Action,
            action_text(element),
            is_visible(element),
        ));
    }
    for element in document.select(&selector(STYLED_SELECTOR)?) {
        candidates.push(Candidate::new(
            ProbeKind::Styled,
            element_text(element),
            is_visible(element),
        ));
    }
    for element in document.select(&selector(FORM_SELECTOR)?) {
        candidates.push(Candidate::new(
            ProbeKind::Form,
            element_text(element),
            is_visible(element),
        ));
    }

    let body = document
        .select(&selector("body")?)
        .next()
        .unwrap_or_else(|| document.root_element());

    Ok(PageSnapshot::new(
        candidates,
        &readable_text(body),
        snippet_chars,
    ))
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Materialize(format!("selector {}: {}", css, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
    normalize_text(&element.text().collect::<Vec<_>>().join(" "), usize::MAX)
}

/// Submit inputs carry their label in `value`
fn action_text(element: ElementRef<'_>) -> String {
    if element.value().name() == "input" {
        return normalize_text(element.value().attr("value").unwrap_or_default(), usize::MAX);
    }
    element_text(element)
}

/// Visible unless the element or any ancestor is hidden
fn is_visible(element: ElementRef<'_>) -> bool {
    std::iter::once(*element)
        .chain(element.ancestors())
        .filter_map(ElementRef::wrap)
        .all(|el| !hides(el.value()))
}

fn hides(element: &Element) -> bool {
    element.attr("hidden").is_some()
        || element
            .attr("aria-hidden")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
        || element
            .attr("type")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("hidden"))
        || element.attr("style").is_some_and(style_hides)
}

fn style_hides(style: &str) -> bool {
    let compact: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    compact.contains("display:none") || compact.contains("visibility:hidden")
}

/// Text under `root`, skipping script, style and noscript content
fn readable_text(root: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let skipped = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| SKIPPED_TEXT_PARENTS.contains(&e.name()))
        });
        if !skipped {
            out.push_str(text);
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
