// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Durable storage for detection outcomes

#[cfg(any(test, feature = "test-support"))]
mod memory;
mod result_log;

use chrono::NaiveDate;
use sw_core::LogEntry;
use thiserror::Error;

pub use result_log::ResultLog;

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryLog;

/// Errors that can occur writing or reading the result log
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only record of detection outcomes.
///
/// Appends come from a single writer; the store needs no internal locking.
pub trait LogStore: Send + 'static {
    /// Durably append one record. Nothing is written on error.
    fn append(&mut self, entry: &LogEntry) -> Result<(), StorageError>;

    /// True unless a FOUND record for `target` already exists dated `today`
    fn is_first_positive_today(&self, target: &str, today: NaiveDate) -> bool;
}
