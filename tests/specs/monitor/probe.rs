//! `slotwatch probe` specs
//!
//! Probe evaluates the page once and leaves no trace.

use crate::prelude::*;

#[test]
fn probe_reports_open_page_without_logging() {
    let temp = Project::empty();
    let url = temp.page("page.html", OPEN_PAGE);
    temp.config(&url, "");

    temp.slotwatch()
        .args(&["probe"])
        .passes()
        .stdout_has("FOUND")
        .stdout_has("visible_action")
        .stdout_has("Prendre un rendez-vous disponible");

    assert!(!temp.join("results.txt").exists());
}

#[test]
fn probe_reports_exclusion() {
    let temp = Project::empty();
    let url = temp.page("page.html", OPEN_PAGE.replace("disponible", "fermé").as_str());
    temp.config(&url, "[filter]\nexclude = [\"fermé\"]");

    temp.slotwatch()
        .args(&["probe"])
        .passes()
        .stdout_has("NOT_FOUND")
        .stdout_has("Excluded by: fermé");
}

#[test]
fn probe_json_carries_detection_fields() {
    let temp = Project::empty();
    let url = temp.page("page.html", CLOSED_PAGE);
    temp.config(&url, "");

    let run = temp.slotwatch().args(&["probe", "--format", "json"]).passes();
    let json: serde_json::Value = serde_json::from_str(run.stdout()).unwrap();

    assert_eq!(json["outcome"], "NOT_FOUND");
    assert_eq!(json["signal"], serde_json::Value::Null);
    assert_eq!(json["action_candidates"], 0);
}

#[test]
fn probe_of_missing_page_fails() {
    let temp = Project::empty();
    temp.config("file:///nonexistent/slotwatch/page.html", "");

    temp.slotwatch()
        .args(&["probe"])
        .fails()
        .stderr_has("failed to read");
}
