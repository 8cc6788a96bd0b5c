// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor lifecycle: single-writer lock, signals, guaranteed source release.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use sw_adapters::{
    DesktopNotifier, Notifier, PageSource, SnapshotSource, TracedNotifier, TracedSnapshotSource,
};
use sw_core::{Clock, MonitorConfig, SystemClock};
use sw_engine::{Monitor, MonitorDeps, RunReport};
use sw_storage::{LogStore, ResultLog, StorageError};
use thiserror::Error;
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("another slotwatch is already writing {}", .0.display())]
    LockFailed(PathBuf, #[source] std::io::Error),

    #[error("cannot open result log: {0}")]
    Storage(#[from] StorageError),

    #[error("monitor task failed: {0}")]
    MonitorPanicked(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exclusive lock on `<log_path>.lock`, held while the monitor writes.
/// Released when dropped.
pub struct RunLock {
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    #[allow(dead_code)]
    file: File,
    path: PathBuf,
}

impl RunLock {
    pub fn acquire(log_path: &Path) -> Result<Self, LifecycleError> {
        let path = lock_path(log_path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        // Truncate only once locked, so a refused run leaves the holder's pid
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;
        file.try_lock_exclusive()
            .map_err(|e| LifecycleError::LockFailed(log_path.to_path_buf(), e))?;
        file.set_len(0)?;
        writeln!(file, "{}", std::process::id())?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `results.txt` -> `results.txt.lock`
pub fn lock_path(log_path: &Path) -> PathBuf {
    let mut name = log_path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

/// Cancel `token` on the first SIGTERM or SIGINT
pub fn cancel_on_signal(token: CancellationToken) -> Result<(), LifecycleError> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
            _ = sigint.recv() => info!("Received SIGINT, shutting down..."),
            _ = token.cancelled() => return,
        }
        token.cancel();
    });

    Ok(())
}

/// Run the monitor for `config` until found or cancelled.
///
/// The page source is acquired once and closed on every exit path,
/// including a panic inside the monitor task.
pub async fn run(config: MonitorConfig, cancel: CancellationToken) -> Result<RunReport, LifecycleError> {
    let lock = RunLock::acquire(&config.log_path)?;
    let log = ResultLog::open(&config.log_path)?;
    info!(
        log = %log.path().display(),
        records = log.len(),
        lock = %lock.path().display(),
        "result log ready"
    );

    let source = TracedSnapshotSource::new(PageSource::new(
        &config.source,
        config.detector.snippet_chars,
    ));
    let notifier = TracedNotifier::new(DesktopNotifier::new(config.notify.desktop));

    let report = run_monitor(
        &config,
        MonitorDeps {
            source,
            notifier,
            log,
        },
        SystemClock,
        cancel,
    )
    .await;
    drop(lock);
    report
}

/// Run a monitor in its own task, then close the source.
///
/// The source is closed exactly once after the task ends, whether the run
/// was found, cancelled or panicked.
pub async fn run_monitor<S, N, L, C>(
    config: &MonitorConfig,
    deps: MonitorDeps<S, N, L>,
    clock: C,
    cancel: CancellationToken,
) -> Result<RunReport, LifecycleError>
where
    S: SnapshotSource,
    N: Notifier,
    L: LogStore,
    C: Clock,
{
    let source = deps.source.clone();
    let mut monitor = Monitor::new(config, deps, clock);

    let joined = tokio::spawn(async move { monitor.run(cancel).await }).await;
    source.close().await;

    joined.map_err(|e| {
        warn!(error = %e, "monitor task ended abnormally");
        LifecycleError::MonitorPanicked(e.to_string())
    })
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
