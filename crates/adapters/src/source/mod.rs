// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot sources: where page snapshots come from

mod page;

pub use page::{parse_snapshot, PageSource};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSnapshotSource;

use async_trait::async_trait;
use std::path::PathBuf;
use sw_core::PageSnapshot;
use thiserror::Error;

/// Errors from snapshot acquisition. Always transient to the monitor.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported URL: {0}")]
    UnsupportedUrl(String),
    #[error("page could not be materialized: {0}")]
    Materialize(String),
    #[error("snapshot source is closed")]
    Closed,
}

/// Produces a [`PageSnapshot`] of a target page.
///
/// A source holds a long-lived resource (HTTP agent, browser session). It is
/// acquired once, shared by clones, and released by [`close`](Self::close).
#[async_trait]
pub trait SnapshotSource: Clone + Send + Sync + 'static {
    /// Load and materialize the page at `url`
    async fn capture(&self, url: &str) -> Result<PageSnapshot, FetchError>;

    /// Release the underlying resource. Later captures fail with
    /// [`FetchError::Closed`]. Closing twice is harmless.
    async fn close(&self);
}
