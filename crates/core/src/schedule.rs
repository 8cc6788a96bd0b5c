// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daily slots and the per-day record of slots already fired
//!
//! Slot matching samples local wall time. By default a slot matches only
//! during its own minute (best effort: a poll that misses the whole minute
//! misses the slot). A non-zero grace window lets a late poll still fire the
//! slot, as long as it is the same calendar day.

use crate::config::ConfigError;
use chrono::{DateTime, FixedOffset, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A configured local time of day, minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slot {
    hour: u8,
    minute: u8,
}

impl Slot {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ConfigError> {
        if hour > 23 || minute > 59 {
            return Err(ConfigError::InvalidSlot(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    fn minute_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Whether `now` falls inside this slot's window
    pub fn matches(&self, now: &DateTime<FixedOffset>, grace_minutes: u32) -> bool {
        let current = now.hour() * 60 + now.minute();
        let start = self.minute_of_day();
        current >= start && current - start <= grace_minutes
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Slot {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidSlot(s.to_string());
        let (hh, mm) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hh.trim().parse().map_err(|_| invalid())?;
        let minute: u32 = mm.trim().parse().map_err(|_| invalid())?;
        Slot::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Slot {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.to_string()
    }
}

/// Slots already fired today. Owned by the scheduler; reset whenever the
/// local calendar date changes.
#[derive(Debug, Clone, Default)]
pub struct ScheduleState {
    day: Option<NaiveDate>,
    done_slots: BTreeSet<Slot>,
}

impl ScheduleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the done set if `now` is on a different date than the last poll.
    /// Returns true when a day boundary was crossed since the last poll.
    pub fn roll_over(&mut self, now: &DateTime<FixedOffset>) -> bool {
        let today = now.date_naive();
        match self.day {
            Some(day) if day == today => false,
            previous => {
                self.day = Some(today);
                self.done_slots.clear();
                previous.is_some()
            }
        }
    }

    /// Slots that should fire at `now`, in configured order. Performs the
    /// day rollover first.
    pub fn due(
        &mut self,
        slots: &[Slot],
        now: &DateTime<FixedOffset>,
        grace_minutes: u32,
    ) -> Vec<Slot> {
        self.roll_over(now);
        slots
            .iter()
            .filter(|slot| slot.matches(now, grace_minutes) && !self.done_slots.contains(*slot))
            .copied()
            .collect()
    }

    pub fn mark_done(&mut self, slot: Slot) {
        self.done_slots.insert(slot);
    }

    pub fn is_done(&self, slot: &Slot) -> bool {
        self.done_slots.contains(slot)
    }

    pub fn done_slots(&self) -> impl Iterator<Item = &Slot> {
        self.done_slots.iter()
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
