// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Each burial appears at most once in indexed results.

use crate::common::{fixture_records, fixture_tours, ids, make_anonymous_record, make_record};
use plotfinder::{build_search_index, dedupe, smart_search, BurialRecord, SearchOptions};
use std::collections::HashSet;

/// Fixture records plus a second copy of Jane Doe (same OBJECTID).
fn records_with_duplicate() -> Vec<BurialRecord> {
    let mut records = fixture_records();
    records.push(records[0].clone());
    records
}

fn indexed(records: &[BurialRecord], query: &str) -> Vec<i64> {
    let tours = fixture_tours();
    let index = build_search_index(records, Some(&tours));
    let options = SearchOptions::new().with_index(&index).with_tours(&tours);
    ids(&smart_search(records, query, &options))
}

#[test]
fn test_duplicate_records_collapse_in_every_indexed_path() {
    let records = records_with_duplicate();

    assert_eq!(indexed(&records, "1812"), vec![1, 2]);
    assert_eq!(indexed(&records, "section 12"), vec![1]);
    assert_eq!(indexed(&records, "lot 8"), vec![1]);
    assert_eq!(indexed(&records, "notables tour"), vec![1]);
    assert_eq!(indexed(&records, "jane"), vec![1]);
    assert_eq!(indexed(&records, "12"), vec![1, 2]);
}

#[test]
fn test_number_union_lists_each_record_once() {
    // Section 12 and lot 12 on the same record
    let records = vec![
        make_record(1, "Ann", "Twelve", "12", "12", "1850", "1850", None),
        make_record(2, "Bo", "Lot", "4", "12", "", "", None),
    ];
    assert_eq!(indexed(&records, "12"), vec![1, 2]);
}

#[test]
fn test_free_text_scan_deduplicates() {
    let records = records_with_duplicate();
    // "oe (" is not an indexed token, so this is the scan branch
    assert_eq!(indexed(&records, "oe ("), vec![1]);
    let scanned = smart_search(&records, "jane", &SearchOptions::new());
    assert_eq!(ids(&scanned), vec![1]);
}

#[test]
fn test_results_have_unique_identities() {
    let records = records_with_duplicate();
    for query in ["1812", "12", "section", "tour", "(section"] {
        let tours = fixture_tours();
        let index = build_search_index(&records, Some(&tours));
        let options = SearchOptions::new().with_index(&index).with_tours(&tours);
        let results = smart_search(&records, query, &options);
        let keys: HashSet<_> = results.iter().map(|record| record.identity_key()).collect();
        assert_eq!(keys.len(), results.len(), "duplicate result for {query:?}");
    }
}

#[test]
fn test_anonymous_records_dedupe_by_name_and_plot() {
    let a = make_anonymous_record("Mary", "Pruyn", "4", "17");
    let b = make_anonymous_record("Mary", "Pruyn", "4", "17");
    let c = make_anonymous_record("Mary", "Pruyn", "4", "18");
    assert_eq!(dedupe([&a, &b, &c]).len(), 2);
}
