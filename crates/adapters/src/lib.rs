// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: page snapshots in, alerts out

pub mod notify;
pub mod source;
pub mod traced;

pub use notify::{DesktopNotifier, Notification, Notifier, NotifyError, NotifyUrgency};
pub use source::{parse_snapshot, FetchError, PageSource, SnapshotSource};
pub use traced::{TracedNotifier, TracedSnapshotSource};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::FakeNotifier;
#[cfg(any(test, feature = "test-support"))]
pub use source::FakeSnapshotSource;
