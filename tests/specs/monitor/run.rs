//! `slotwatch run` specs
//!
//! Continuous mode stops at the first availability and leaves a FOUND
//! record in the result log.

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn run_stops_on_open_page_and_records_found() {
    let temp = Project::empty();
    let url = temp.page("page.html", OPEN_PAGE);
    temp.config(&url, "[filter]\nallow = [\"rendez\"]");

    temp.slotwatch()
        .args(&["run"])
        .passes()
        .stdout_has("| FOUND |")
        .stdout_has("matched: rendez");

    let log = temp.read("results.txt");
    assert_eq!(log.lines().count(), 1);
    assert!(log.ends_with('\n'));
    assert!(log.contains(&format!(" | FOUND | {} | matched: rendez | snippet: ", url)));
}

#[test]
fn run_appends_to_existing_log() {
    let temp = Project::empty();
    let url = temp.page("page.html", OPEN_PAGE);
    temp.config(&url, "");
    temp.file(
        "results.txt",
        &format!("2025-11-02 14:30:00 | NOT_FOUND | {}\n", url),
    );

    temp.slotwatch().args(&["run"]).passes();

    let log = temp.read("results.txt");
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2025-11-02 14:30:00 | NOT_FOUND"));
    assert!(lines[1].contains("| FOUND |"));
}

#[test]
fn run_rings_the_terminal_alert() {
    let temp = Project::empty();
    let url = temp.page("page.html", OPEN_PAGE);
    temp.config(&url, "");

    temp.slotwatch()
        .command()
        .args(["run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Availability detected"))
        .stderr(predicate::str::contains('\x07'));
}

#[test]
fn run_writes_diagnostic_log_file() {
    let temp = Project::empty();
    let url = temp.page("page.html", OPEN_PAGE);
    temp.config(&url, "");

    temp.slotwatch()
        .args(&["run", "--diagnostic-log", "diag/slotwatch.log"])
        .passes();

    let diag = temp.read("diag/slotwatch.log");
    assert!(diag.contains("monitor starting"), "diagnostics:\n{}", diag);
    assert!(diag.contains("monitor stopped"), "diagnostics:\n{}", diag);
}
