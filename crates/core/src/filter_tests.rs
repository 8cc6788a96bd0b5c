// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn matched_terms_keep_configured_order() {
    let filter = FilterSpec::new(["Oran", "Alger", "Blida"], Vec::<String>::new());
    let matched = filter.matched_terms("Agences: blida, ORAN");
    assert_eq!(matched, vec!["Oran", "Blida"]);
}

#[test]
fn exclude_is_case_insensitive() {
    let filter = FilterSpec::new(Vec::<String>::new(), ["FERMÉ"]);
    assert_eq!(filter.excluded_by("Le service est fermé"), Some("FERMÉ"));
    assert_eq!(filter.excluded_by("Le service est ouvert"), None);
}

#[test]
fn blank_and_duplicate_terms_are_dropped() {
    let filter = FilterSpec::new(["rendez", " ", "Rendez", "حجز"], ["", "x"]);
    assert_eq!(filter.allow(), ["rendez", "حجز"]);
    assert_eq!(filter.exclude(), ["x"]);
}

#[test]
fn accept_all_matches_nothing_and_excludes_nothing() {
    let filter = FilterSpec::accept_all();
    assert!(filter.matched_terms("anything").is_empty());
    assert!(filter.excluded_by("anything").is_none());
}
