//! Behavioral tests for the slotwatch CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, exit codes and the result log on disk.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// monitor/
#[path = "specs/monitor/check.rs"]
mod monitor_check;
#[path = "specs/monitor/history.rs"]
mod monitor_history;
#[path = "specs/monitor/probe.rs"]
mod monitor_probe;
#[path = "specs/monitor/run.rs"]
mod monitor_run;
