// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notifier for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Notification, Notifier, NotifyError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeNotifierState {
    calls: Vec<Notification>,
    failures: usize,
}

/// Records every notification; can be told to fail
#[derive(Clone, Default)]
pub struct FakeNotifier {
    inner: Arc<Mutex<FakeNotifierState>>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` notifications fail (they are still recorded)
    pub fn fail_next(&self, count: usize) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).failures = count;
    }

    /// All notifications attempted so far
    pub fn calls(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(notification);
        if state.failures > 0 {
            state.failures -= 1;
            return Err(NotifyError::Failed("injected notify failure".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
