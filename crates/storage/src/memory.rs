// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory log store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{LogStore, StorageError};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use sw_core::LogEntry;

#[derive(Default)]
struct Inner {
    entries: Vec<LogEntry>,
    failures: usize,
}

/// In-memory [`LogStore`]; clones share the same records
#[derive(Clone, Default)]
pub struct MemoryLog {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records, as if replayed from disk
    pub fn with_entries(entries: Vec<LogEntry>) -> Self {
        let log = Self::default();
        log.inner.lock().unwrap_or_else(|e| e.into_inner()).entries = entries;
        log
    }

    /// Make the next `count` appends fail with an IO error
    pub fn fail_next(&self, count: usize) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).failures = count;
    }

    /// All stored records, in append order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entries
            .clone()
    }
}

impl LogStore for MemoryLog {
    fn append(&mut self, entry: &LogEntry) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.failures > 0 {
            inner.failures -= 1;
            return Err(StorageError::Io(std::io::Error::other("injected append failure")));
        }
        inner.entries.push(entry.clone());
        Ok(())
    }

    fn is_first_positive_today(&self, target: &str, today: NaiveDate) -> bool {
        !self
            .inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entries
            .iter()
            .any(|e| e.is_found() && e.target == target && e.date() == today)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
