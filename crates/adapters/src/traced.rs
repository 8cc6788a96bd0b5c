// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::notify::{Notification, Notifier, NotifyError};
use crate::source::{FetchError, SnapshotSource};
use async_trait::async_trait;
use sw_core::PageSnapshot;
use tracing::Instrument;

/// Wrapper that adds tracing to any SnapshotSource
#[derive(Clone)]
pub struct TracedSnapshotSource<S> {
    inner: S,
}

impl<S> TracedSnapshotSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: SnapshotSource> SnapshotSource for TracedSnapshotSource<S> {
    async fn capture(&self, url: &str) -> Result<PageSnapshot, FetchError> {
        let span = tracing::info_span!("source.capture", url);

        async {
            tracing::debug!("starting");

            let start = std::time::Instant::now();
            let result = self.inner.capture(url).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(snapshot) => tracing::info!(
                    candidates = snapshot.candidates.len(),
                    body_chars = snapshot.body_text.chars().count(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "page captured"
                ),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "capture failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn close(&self) {
        let span = tracing::info_span!("source.close");
        async {
            self.inner.close().await;
            tracing::info!("released");
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any Notifier
#[derive(Clone)]
pub struct TracedNotifier<N> {
    inner: N,
}

impl<N> TracedNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }
}

#[async_trait]
impl<N: Notifier> Notifier for TracedNotifier<N> {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        let span = tracing::info_span!("notify.send", title = %notification.title);

        async {
            let start = std::time::Instant::now();
            let result = self.inner.notify(notification).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "delivered"),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "delivery failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
