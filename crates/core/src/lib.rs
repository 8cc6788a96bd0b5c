// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sw-core: domain model for the slotwatch availability monitor
//!
//! This crate provides:
//! - Page snapshots and the allow/exclude filter
//! - The pure, priority-ordered availability detector
//! - Result log records and their line format
//! - Daily slots and per-day schedule state
//! - Typed, validated configuration
//! - A clock abstraction for testable wall time

pub mod clock;
pub mod config;
pub mod detect;
pub mod entry;
pub mod filter;
pub mod schedule;
pub mod snapshot;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{
    ConfigError, DetectorConfig, Mode, ModeKind, MonitorConfig, NotifyConfig, RawConfig,
    SourceConfig,
};
pub use detect::{DetectionFault, DetectionResult, Detector, Strategy, Vocabulary};
pub use entry::{LineError, LogEntry, Outcome};
pub use filter::FilterSpec;
pub use schedule::{ScheduleState, Slot};
pub use snapshot::{normalize_text, Candidate, PageSnapshot, ProbeKind};
