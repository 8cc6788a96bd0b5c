// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn alert() -> Notification {
    Notification::new("Rendez-vous available", "https://example.org/rdv").critical()
}

#[test]
fn banner_rings_the_bell_and_carries_the_message() {
    let banner = render_banner(&alert());
    assert!(banner.contains('\x07'));
    assert!(banner.contains("Rendez-vous available"));
    assert!(banner.contains("https://example.org/rdv"));
    assert!(banner.starts_with('\n'));
    assert!(banner.ends_with('\n'));
}

#[test]
fn applescript_quotes_are_escaped() {
    let script = build_script(&Notification::new(r#"say "hi""#, r"back\slash"));
    assert_eq!(
        script,
        r#"display notification "back\\slash" with title "say \"hi\"""#
    );
}

#[test]
fn critical_applescript_plays_a_sound() {
    assert!(build_script(&alert()).ends_with(r#" sound name "Sosumi""#));
}

#[cfg(not(target_os = "macos"))]
#[test]
fn notify_send_gets_urgency_title_and_body() {
    let (program, args) = toast_command(&alert());
    assert_eq!(program, "notify-send");
    assert_eq!(
        args,
        vec![
            "--urgency=critical".to_string(),
            "Rendez-vous available".to_string(),
            "https://example.org/rdv".to_string(),
        ]
    );
}

#[cfg(target_os = "macos")]
#[test]
fn osascript_is_used_on_macos() {
    let (program, args) = toast_command(&alert());
    assert_eq!(program, "osascript");
    assert_eq!(args[0], "-e");
}

#[tokio::test]
async fn terminal_only_notifier_succeeds_without_os_tools() {
    DesktopNotifier::terminal().notify(alert()).await.unwrap();
}

#[tokio::test]
async fn missing_notification_tool_is_reported() {
    let err = show_toast("slotwatch-no-such-notifier", &[]).await.err().unwrap();
    match err {
        NotifyError::Command { program, message } => {
            assert_eq!(program, "slotwatch-no-such-notifier");
            assert_eq!(message, "not installed");
        }
        other => panic!("expected command error, got {:?}", other),
    }
}

#[tokio::test]
async fn alert_is_delivered_when_notification_tool_is_missing() {
    DesktopNotifier::new(true)
        .with_program("slotwatch-no-such-notifier")
        .notify(alert())
        .await
        .unwrap();
}
