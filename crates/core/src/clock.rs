// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable wall-clock handling
//!
//! Slot matching and the midnight rollover work on local wall time, so the
//! clock hands out a `DateTime<FixedOffset>` rather than a monotonic instant.

use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use std::sync::{Arc, Mutex};

/// A clock that provides the current local time
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Calendar date of `now()` in local time
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl FakeClock {
    /// Fake clock starting at 2026-01-01 00:00:00 UTC
    pub fn new() -> Self {
        Self::at(
            NaiveDate::from_ymd_opt(2026, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap_or_default(),
        )
    }

    /// Fake clock at the given wall time, with a zero UTC offset
    pub fn at(wall: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(Utc.fix().from_utc_datetime(&wall))),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Set the wall time, keeping the current offset
    pub fn set(&self, wall: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        let offset = current.timezone();
        *current = offset
            .from_local_datetime(&wall)
            .single()
            .unwrap_or_else(|| offset.from_utc_datetime(&wall));
    }

    /// Set the wall time to `hour:minute` on the current date
    pub fn set_hm(&self, hour: u32, minute: u32) {
        let date = self.now().date_naive();
        if let Some(wall) = date.and_hms_opt(hour, minute, 0) {
            self.set(wall);
        }
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
