// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal banner plus optional OS notification

use super::{Notification, Notifier, NotifyError, NotifyUrgency};
use async_trait::async_trait;
use std::io::Write;
use tokio::process::Command;

const BELL: char = '\x07';

/// Prints a banner with a terminal bell to stderr and, when enabled, shows
/// an OS notification (`osascript` on macOS, `notify-send` elsewhere).
///
/// The banner is the alert. A missing or failing OS notification tool is
/// logged and does not fail delivery.
#[derive(Clone, Debug, Default)]
pub struct DesktopNotifier {
    toast: bool,
    /// Replaces the platform tool, keeping its arguments
    program: Option<&'static str>,
}

impl DesktopNotifier {
    pub fn new(toast: bool) -> Self {
        Self {
            toast,
            program: None,
        }
    }

    /// Terminal-only notifier
    pub fn terminal() -> Self {
        Self::new(false)
    }

    #[cfg(test)]
    fn with_program(mut self, program: &'static str) -> Self {
        self.program = Some(program);
        self
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        {
            let mut stderr = std::io::stderr().lock();
            stderr.write_all(render_banner(&notification).as_bytes())?;
            stderr.flush()?;
        }

        if self.toast {
            let (platform_program, args) = toast_command(&notification);
            let program = self.program.unwrap_or(platform_program);
            if let Err(e) = show_toast(program, &args).await {
                tracing::warn!(error = %e, "desktop notification unavailable, terminal alert only");
            }
        }

        Ok(())
    }
}

/// Run the OS notification tool
pub(crate) async fn show_toast(program: &str, args: &[String]) -> Result<(), NotifyError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| NotifyError::Command {
            program: program.to_string(),
            message: match e.kind() {
                std::io::ErrorKind::NotFound => "not installed".to_string(),
                _ => e.to_string(),
            },
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(NotifyError::Command {
            program: program.to_string(),
            message: stderr.trim().to_string(),
        });
    }

    Ok(())
}

/// Banner text, bell included, ready for stderr
pub(crate) fn render_banner(notification: &Notification) -> String {
    let rule = "=".repeat(60);
    format!(
        "\n{rule}\n{bell}{title}\n{message}\n{rule}\n",
        rule = rule,
        bell = BELL,
        title = notification.title,
        message = notification.message,
    )
}

/// Program and arguments for the platform's notification tool
pub(crate) fn toast_command(notification: &Notification) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("osascript", vec!["-e".to_string(), build_script(notification)])
    } else {
        let urgency = match notification.urgency {
            NotifyUrgency::Normal => "normal",
            NotifyUrgency::Critical => "critical",
        };
        (
            "notify-send",
            vec![
                format!("--urgency={}", urgency),
                notification.title.clone(),
                notification.message.clone(),
            ],
        )
    }
}

fn build_script(notification: &Notification) -> String {
    let mut script = format!(
        r#"display notification "{}" with title "{}""#,
        escape_applescript(&notification.message),
        escape_applescript(&notification.title),
    );
    if notification.urgency == NotifyUrgency::Critical {
        script.push_str(r#" sound name "Sosumi""#);
    }
    script
}

/// Escape special characters for AppleScript strings
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
