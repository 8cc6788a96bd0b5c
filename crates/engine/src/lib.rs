// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! slotwatch monitoring engine

mod monitor;
mod state;

pub use monitor::{availability_alert, Monitor, MonitorDeps, SLOT_POLL_INTERVAL};
pub use state::{MonitorState, RunOutcome, RunReport, Tick};
