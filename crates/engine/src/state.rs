// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor states and run results

use std::fmt;
use sw_core::{LogEntry, Slot, Strategy};

/// Where the monitor is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// Constructed, not yet running
    Idle,
    /// Continuous mode: a tick is in flight
    Ticking,
    /// Sleeping until the next tick or poll
    Waiting,
    /// Scheduled mode: running the cycle for a slot
    Firing(Slot),
    /// Run finished, by success or cancellation
    Terminated,
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorState::Idle => write!(f, "idle"),
            MonitorState::Ticking => write!(f, "ticking"),
            MonitorState::Waiting => write!(f, "waiting"),
            MonitorState::Firing(slot) => write!(f, "firing({})", slot),
            MonitorState::Terminated => write!(f, "terminated"),
        }
    }
}

/// Result of one acquire, detect, log cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub entry: LogEntry,
    /// Strategy that produced the structural signal, if any
    pub signal: Option<Strategy>,
    /// The notifier was invoked and succeeded
    pub notified: bool,
    /// The entry reached the result log
    pub recorded: bool,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Continuous mode saw the target open
    Found(LogEntry),
    /// Stopped by the cancellation token
    Cancelled,
}

/// Counters for a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Cycles that produced a detection
    pub ticks: u64,
    /// Cycles that failed to capture a snapshot
    pub failed_ticks: u64,
    /// Successful notifier invocations
    pub notifications: u64,
}

impl RunReport {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, RunOutcome::Found(_))
    }
}
