// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The availability monitor
//!
//! Every cycle is acquire, detect, notify, log. Continuous mode repeats the
//! cycle on a fixed interval until the target opens. Scheduled mode polls the
//! clock every [`SLOT_POLL_INTERVAL`] and runs one cycle per configured slot
//! per day, indefinitely.
//!
//! Only the sleeps between cycles observe cancellation. A cycle that has
//! started always runs to completion, so no partial record is ever written.

use crate::state::{MonitorState, RunOutcome, RunReport, Tick};
use std::time::Duration;
use sw_adapters::{FetchError, Notification, Notifier, SnapshotSource};
use sw_core::{Clock, Detector, FilterSpec, LogEntry, Mode, MonitorConfig, NotifyConfig, ScheduleState, Slot};
use sw_storage::LogStore;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Scheduled mode clock poll granularity
pub const SLOT_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// I/O collaborators of a [`Monitor`]
pub struct MonitorDeps<S, N, L> {
    pub source: S,
    pub notifier: N,
    pub log: L,
}

/// Drives the acquire, detect, notify, log cycle for one target
pub struct Monitor<S, N, L, C> {
    target: String,
    mode: Mode,
    filter: FilterSpec,
    detector: Detector,
    notify: NotifyConfig,
    source: S,
    notifier: N,
    log: L,
    clock: C,
    schedule: ScheduleState,
    state: MonitorState,
    ticks: u64,
    failed_ticks: u64,
    notifications: u64,
}

impl<S, N, L, C> Monitor<S, N, L, C>
where
    S: SnapshotSource,
    N: Notifier,
    L: LogStore,
    C: Clock,
{
    pub fn new(config: &MonitorConfig, deps: MonitorDeps<S, N, L>, clock: C) -> Self {
        Self {
            target: config.target_url.clone(),
            mode: config.mode.clone(),
            filter: config.filter.clone(),
            detector: config.build_detector(),
            notify: config.notify,
            source: deps.source,
            notifier: deps.notifier,
            log: deps.log,
            clock,
            schedule: ScheduleState::new(),
            state: MonitorState::Idle,
            ticks: 0,
            failed_ticks: 0,
            notifications: 0,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn schedule(&self) -> &ScheduleState {
        &self.schedule
    }

    /// Run in the configured mode until found (continuous) or cancelled
    pub async fn run(&mut self, cancel: CancellationToken) -> RunReport {
        tracing::info!(
            target_url = %self.target,
            mode = self.mode.name(),
            "monitor starting"
        );

        let outcome = match self.mode.clone() {
            Mode::Continuous { interval } => self.run_continuous(interval, &cancel).await,
            Mode::Scheduled {
                slots,
                grace_minutes,
            } => self.run_scheduled(&slots, grace_minutes, &cancel).await,
        };
        self.set_state(MonitorState::Terminated);

        let report = RunReport {
            outcome,
            ticks: self.ticks,
            failed_ticks: self.failed_ticks,
            notifications: self.notifications,
        };
        tracing::info!(
            found = report.is_found(),
            ticks = report.ticks,
            failed_ticks = report.failed_ticks,
            notifications = report.notifications,
            "monitor stopped"
        );
        report
    }

    async fn run_continuous(&mut self, interval: Duration, cancel: &CancellationToken) -> RunOutcome {
        loop {
            if cancel.is_cancelled() {
                return RunOutcome::Cancelled;
            }

            self.set_state(MonitorState::Ticking);
            if let Ok(tick) = self.tick().await {
                if tick.entry.is_found() {
                    return RunOutcome::Found(tick.entry);
                }
            }

            self.set_state(MonitorState::Waiting);
            if !sleep_or_cancel(interval, cancel).await {
                return RunOutcome::Cancelled;
            }
        }
    }

    async fn run_scheduled(
        &mut self,
        slots: &[Slot],
        grace_minutes: u32,
        cancel: &CancellationToken,
    ) -> RunOutcome {
        self.set_state(MonitorState::Waiting);

        // Polls keep a fixed cadence; a long cycle is followed by an
        // immediate catch-up poll rather than a full wait
        let mut poll = tokio::time::interval(SLOT_POLL_INTERVAL);
        poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return RunOutcome::Cancelled,
                _ = poll.tick() => {}
            }

            self.poll_slots(slots, grace_minutes).await;
        }
    }

    /// One scheduled-mode poll: fire every slot due now and not yet done today.
    ///
    /// Returns the slots that fired.
    pub async fn poll_slots(&mut self, slots: &[Slot], grace_minutes: u32) -> Vec<Slot> {
        let now = self.clock.now();
        if self.schedule.roll_over(&now) {
            tracing::info!(date = %now.date_naive(), "new day, slots re-armed");
        }

        let due = self.schedule.due(slots, &now, grace_minutes);
        for slot in &due {
            self.set_state(MonitorState::Firing(*slot));
            tracing::info!(%slot, "slot firing");
            // A failed cycle still consumes the slot for today
            let _ = self.tick().await;
            self.schedule.mark_done(*slot);
        }

        self.set_state(MonitorState::Waiting);
        due
    }

    /// One acquire, detect, notify, log cycle.
    ///
    /// Capture failures are the only error: nothing is recorded for them.
    /// Notify and storage failures are logged and reflected in the [`Tick`].
    pub async fn tick(&mut self) -> Result<Tick, FetchError> {
        let snapshot = match self.source.capture(&self.target).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.failed_ticks += 1;
                tracing::warn!(target_url = %self.target, error = %e, "tick failed, will retry");
                return Err(e);
            }
        };
        self.ticks += 1;

        let detection = self.detector.detect(&snapshot, &self.filter);
        let entry = LogEntry::from_detection(self.clock.now(), self.target.clone(), &detection);
        tracing::info!(
            outcome = %entry.outcome,
            signal = ?detection.signal,
            matched = ?entry.matched_terms,
            excluded_by = ?detection.excluded_by,
            "detection complete"
        );

        let notified = entry.is_found() && self.alert(&entry).await;

        let recorded = match self.log.append(&entry) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, outcome = %entry.outcome, "failed to record result");
                false
            }
        };

        Ok(Tick {
            entry,
            signal: detection.signal,
            notified,
            recorded,
        })
    }

    /// Notify for a FOUND entry unless suppressed. Never fails.
    async fn alert(&mut self, entry: &LogEntry) -> bool {
        if self.notify.once_per_day && !self.log.is_first_positive_today(&entry.target, entry.date()) {
            tracing::info!(date = %entry.date(), "already alerted today, notification skipped");
            return false;
        }

        match self.notifier.notify(availability_alert(entry)).await {
            Ok(()) => {
                self.notifications += 1;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "notification failed");
                false
            }
        }
    }

    fn set_state(&mut self, next: MonitorState) {
        if self.state != next {
            tracing::debug!(from = %self.state, to = %next, "monitor state");
            self.state = next;
        }
    }
}

/// Alert raised for a FOUND entry
pub fn availability_alert(entry: &LogEntry) -> Notification {
    let mut message = entry.target.clone();
    if !entry.matched_terms.is_empty() {
        message.push_str(&format!("\nmatched: {}", entry.matched_terms.join(", ")));
    }
    Notification::new("Availability detected", message).critical()
}

/// Sleep for `duration`; false if cancelled first
async fn sleep_or_cancel(duration: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep(duration) => true,
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "scheduled_tests.rs"]
mod scheduled_tests;
