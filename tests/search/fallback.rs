// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The indexed path and the linear scan agree on well-formed data.
//!
//! Synthetic records use "M/D/YYYY" dates and whole-word names, which is the
//! shape where substring scans and token lookups coincide. Bare numbers are
//! excluded: their scan also matches digits inside dates.

use crate::common::{indexed_ids, scanned_ids, synthetic_records};
use plotfinder::{build_search_index, smart_search, SearchOptions, TourCatalog};

const QUERIES: &[&str] = &[
    "1850",
    "1799",
    "1901",
    "section 7",
    "sec 100a",
    "section 120",
    "lot 1",
    "lot 42",
    "schuyler",
    "ten eyck",
    "grace van",
    "katherine bleecker",
    "civil war tour",
    "notables tour",
    "business",
    "artists tour",
    "tour",
    "nobody here",
];

#[test]
fn test_indexed_matches_scan_on_synthetic_records() {
    let records = synthetic_records(600);
    let tours = TourCatalog::default();

    for query in QUERIES {
        let indexed = indexed_ids(&records, &tours, query);
        let scanned = scanned_ids(&records, &tours, query);
        assert_eq!(indexed, scanned, "indexed and scanned results differ for {query:?}");
    }
}

#[test]
fn test_queries_hit_something() {
    // Guard against the equivalence test passing on empty results
    let records = synthetic_records(600);
    let tours = TourCatalog::default();
    for query in ["1850", "section 7", "lot 1", "schuyler", "civil war tour", "business"] {
        assert!(
            !indexed_ids(&records, &tours, query).is_empty(),
            "expected hits for {query:?}"
        );
    }
}

#[test]
fn test_index_from_other_collection_is_not_trusted_past_its_end() {
    let records = synthetic_records(50);
    let index = build_search_index(&records, None);
    let options = SearchOptions::new().with_index(&index);

    // Querying a prefix of the indexed collection must not panic
    let results = smart_search(&records[..10], "section 7", &options);
    assert!(results.iter().all(|record| record.section() == "7"));
    assert!(results.len() <= 1);
}

#[test]
fn test_missing_tokens_fall_back_to_full_scan() {
    let records = synthetic_records(100);
    let tours = TourCatalog::default();
    // "rensse" is a label substring but not a whole token
    let indexed = indexed_ids(&records, &tours, "rensse");
    assert!(!indexed.is_empty());
    assert_eq!(indexed, scanned_ids(&records, &tours, "rensse"));
}
