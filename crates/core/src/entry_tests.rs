// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const URL: &str = "https://minha.anem.dz/pre_rendez_vous";

fn ts(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).unwrap()
}

fn found_entry() -> LogEntry {
    LogEntry {
        timestamp: ts("2026-03-01T08:00:04+01:00"),
        target: URL.to_string(),
        outcome: Outcome::Found,
        matched_terms: vec!["rendez".to_string(), "Oran".to_string()],
        snippet: "Prendre rendez-vous agence Oran".to_string(),
    }
}

#[test]
fn found_line_format() {
    assert_eq!(
        found_entry().to_line(),
        "2026-03-01T08:00:04+01:00 | FOUND | https://minha.anem.dz/pre_rendez_vous \
         | matched: rendez,Oran | snippet: Prendre rendez-vous agence Oran"
    );
}

#[test]
fn not_found_line_keeps_audit_fields() {
    let entry = LogEntry {
        outcome: Outcome::NotFound,
        matched_terms: Vec::new(),
        snippet: "Aucun créneau".to_string(),
        ..found_entry()
    };
    let line = entry.to_line();
    assert!(line.contains("| NOT_FOUND |"));
    assert!(line.contains("| matched:  |"));
    assert!(line.ends_with("| snippet: Aucun créneau"));
}

#[test]
fn written_line_parses_back() {
    let entry = found_entry();
    assert_eq!(LogEntry::parse_line(&entry.to_line()).unwrap(), entry);
}

#[test]
fn empty_snippet_parses_back() {
    let entry = LogEntry {
        outcome: Outcome::NotFound,
        matched_terms: Vec::new(),
        snippet: String::new(),
        ..found_entry()
    };
    assert_eq!(LogEntry::parse_line(&entry.to_line()).unwrap(), entry);
}

#[test]
fn legacy_not_found_line_parses() {
    let entry = LogEntry::parse_line(&format!("2025-11-02 14:30:00 | NOT_FOUND | {}", URL)).unwrap();
    assert_eq!(entry.outcome, Outcome::NotFound);
    assert_eq!(entry.target, URL);
    assert!(entry.matched_terms.is_empty());
    assert_eq!(entry.snippet, "");
    assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2025, 11, 2).unwrap());
}

#[test]
fn legacy_snippet_may_contain_separators() {
    let line = format!(
        "2025-11-02 14:30:00 | FOUND | {} | matched:  | snippet: Accueil | Rendez-vous",
        URL
    );
    let entry = LogEntry::parse_line(&line).unwrap();
    assert_eq!(entry.snippet, "Accueil | Rendez-vous");
}

#[test]
fn multiline_snippet_is_folded() {
    let entry = LogEntry {
        snippet: "ligne 1\nligne 2 | fin".to_string(),
        ..found_entry()
    };
    let line = entry.to_line();
    assert!(!line.contains('\n'));
    assert!(line.ends_with("snippet: ligne 1 ligne 2 / fin"));
}

#[test]
fn malformed_lines_are_rejected() {
    assert_eq!(
        LogEntry::parse_line("garbage"),
        Err(LineError::TooFewFields(1))
    );
    assert!(matches!(
        LogEntry::parse_line("yesterday | FOUND | x"),
        Err(LineError::Timestamp(_))
    ));
    assert!(matches!(
        LogEntry::parse_line("2025-11-02 14:30:00 | MAYBE | x"),
        Err(LineError::UnknownOutcome(_))
    ));
    assert!(matches!(
        LogEntry::parse_line("2025-11-02 14:30:00 | FOUND | x | extra"),
        Err(LineError::UnexpectedField(_))
    ));
}

#[test]
fn entry_from_detection() {
    let result = DetectionResult {
        is_open: true,
        matched_terms: vec!["rendez".to_string()],
        snippet: "rendez-vous".to_string(),
        signal: None,
        excluded_by: None,
    };
    let entry = LogEntry::from_detection(ts("2026-03-01T08:00:00+00:00"), URL, &result);
    assert!(entry.is_found());
    assert_eq!(entry.matched_terms, vec!["rendez"]);
}
