//! `slotwatch history` specs

use crate::prelude::*;

const LOG: &str = "\
2026-03-01T08:00:00+01:00 | NOT_FOUND | https://example.org/rdv | matched:  | snippet: Aucun créneau
2026-03-01T08:01:00+01:00 | NOT_FOUND | https://example.org/rdv | matched:  | snippet: Aucun créneau
2026-03-01T08:02:00+01:00 | FOUND | https://example.org/rdv | matched: rendez | snippet: Prendre rendez-vous
";

#[test]
fn history_prints_all_records() {
    let temp = Project::empty();
    temp.file("results.txt", LOG);

    temp.slotwatch()
        .args(&["history", "--log", "results.txt"])
        .passes()
        .stdout_eq(LOG);
}

#[test]
fn history_filters_found_and_limits() {
    let temp = Project::empty();
    temp.file("results.txt", LOG);

    temp.slotwatch()
        .args(&["history", "--log", "results.txt", "--found"])
        .passes()
        .stdout_has("| FOUND |")
        .stdout_lacks("NOT_FOUND");

    let run = temp
        .slotwatch()
        .args(&["history", "--log", "results.txt", "--limit", "1"])
        .passes();
    assert_eq!(run.stdout().lines().count(), 1);
    assert!(run.stdout().contains("08:02:00"));
}

#[test]
fn history_uses_configured_log_path() {
    let temp = Project::empty();
    temp.config("https://example.org/rdv", "");
    temp.file("results.txt", LOG);

    temp.slotwatch()
        .args(&["history", "--found"])
        .passes()
        .stdout_has("matched: rendez");
}

#[test]
fn history_json() {
    let temp = Project::empty();
    temp.file("results.txt", LOG);

    let run = temp
        .slotwatch()
        .args(&["history", "--log", "results.txt", "--format", "json"])
        .passes();
    let json: serde_json::Value = serde_json::from_str(run.stdout()).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[2]["outcome"], "FOUND");
    assert_eq!(json[2]["matched_terms"], serde_json::json!(["rendez"]));
}

#[test]
fn history_of_missing_log_is_empty() {
    let temp = Project::empty();
    temp.slotwatch()
        .args(&["history", "--log", "nothing.txt"])
        .passes()
        .stdout_has("No records in nothing.txt");
}
