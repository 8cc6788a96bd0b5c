//! CLI error specs
//!
//! Configuration problems are fatal before monitoring starts.

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    cli().args(&["frobnicate"]).fails();
}

#[test]
fn missing_target_url_fails() {
    let temp = Project::empty();
    temp.slotwatch()
        .args(&["check"])
        .fails()
        .stderr_has("target_url");
}

#[test]
fn malformed_slot_fails() {
    let temp = Project::empty();
    temp.slotwatch()
        .args(&["check", "--url", "https://example.org", "--times", "25:00"])
        .fails()
        .stderr_has("25:00");
}

#[test]
fn unsupported_scheme_fails() {
    let temp = Project::empty();
    temp.slotwatch()
        .args(&["check", "--url", "ftp://example.org"])
        .fails()
        .stderr_has("unsupported target url");
}

#[test]
fn unknown_config_key_fails() {
    let temp = Project::empty();
    temp.file(
        "slotwatch.toml",
        "target_url = \"https://example.org\"\npoll_everything = true\n",
    );
    temp.slotwatch()
        .args(&["check"])
        .fails()
        .stderr_has("poll_everything");
}

#[test]
fn filter_term_with_separator_fails() {
    let temp = Project::empty();
    temp.file(
        "slotwatch.toml",
        "target_url = \"https://example.org\"\n[filter]\nallow = [\"a|b\"]\n",
    );
    temp.slotwatch()
        .args(&["check"])
        .fails()
        .stderr_has("a|b");
}

#[test]
fn run_refuses_invalid_config_without_touching_the_log() {
    let temp = Project::empty();
    temp.slotwatch()
        .args(&["run", "--url", "https://example.org", "--interval", "0"])
        .fails()
        .stderr_has("interval_seconds");
    assert!(!temp.join("slotwatch_results.txt").exists());
}
