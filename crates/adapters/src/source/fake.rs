// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake snapshot source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FetchError, SnapshotSource};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use sw_core::PageSnapshot;

#[derive(Default)]
struct FakeSourceState {
    script: VecDeque<Result<PageSnapshot, FetchError>>,
    fallback: PageSnapshot,
    captures: Vec<String>,
    delay: Option<Duration>,
    close_count: usize,
}

/// Scripted snapshot source.
///
/// Returns queued results in order, then the fallback snapshot (an empty page
/// unless set) once the script runs out.
#[derive(Clone, Default)]
pub struct FakeSnapshotSource {
    inner: Arc<Mutex<FakeSourceState>>,
}

impl FakeSnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that answers each capture with the given snapshots in order
    pub fn with_snapshots(snapshots: impl IntoIterator<Item = PageSnapshot>) -> Self {
        let source = Self::new();
        for snapshot in snapshots {
            source.push_snapshot(snapshot);
        }
        source
    }

    pub fn push_snapshot(&self, snapshot: PageSnapshot) {
        self.lock().script.push_back(Ok(snapshot));
    }

    pub fn push_error(&self, error: FetchError) {
        self.lock().script.push_back(Err(error));
    }

    /// Snapshot returned once the script is exhausted
    pub fn set_fallback(&self, snapshot: PageSnapshot) {
        self.lock().fallback = snapshot;
    }

    /// Make every capture take this long (observes paused tokio time)
    pub fn set_delay(&self, delay: Duration) {
        self.lock().delay = Some(delay);
    }

    /// URLs captured so far, including failed attempts
    pub fn captures(&self) -> Vec<String> {
        self.lock().captures.clone()
    }

    pub fn capture_count(&self) -> usize {
        self.lock().captures.len()
    }

    pub fn close_count(&self) -> usize {
        self.lock().close_count
    }

    pub fn is_closed(&self) -> bool {
        self.close_count() > 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeSourceState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SnapshotSource for FakeSnapshotSource {
    async fn capture(&self, url: &str) -> Result<PageSnapshot, FetchError> {
        let delay = {
            let mut state = self.lock();
            if state.close_count > 0 {
                return Err(FetchError::Closed);
            }
            state.captures.push(url.to_string());
            state.delay
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        match state.script.pop_front() {
            Some(result) => result,
            None => Ok(state.fallback.clone()),
        }
    }

    async fn close(&self) {
        self.lock().close_count += 1;
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
