// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary query strings against a fixed synthetic cemetery, with and
//! without an index.

#![no_main]

use libfuzzer_sys::fuzz_target;
use plotfinder::testing::synthetic_records;
use plotfinder::{
    build_search_index, smart_search, smart_search_limited, BurialRecord, SearchIndex,
    SearchOptions, TourCatalog,
};
use std::collections::HashSet;
use std::sync::OnceLock;

struct Fixture {
    records: Vec<BurialRecord>,
    tours: TourCatalog,
    index: SearchIndex,
}

fuzz_target!(|query: &str| {
    static FIXTURE: OnceLock<Fixture> = OnceLock::new();
    let fixture = FIXTURE.get_or_init(|| {
        let records = synthetic_records(500);
        let tours = TourCatalog::default();
        let index = build_search_index(&records, Some(&tours));
        Fixture { records, tours, index }
    });

    let indexed = SearchOptions::new()
        .with_index(&fixture.index)
        .with_tours(&fixture.tours);
    let scanned = SearchOptions::new().with_tours(&fixture.tours);

    let results = smart_search(&fixture.records, query, &indexed);
    let _ = smart_search(&fixture.records, query, &scanned);
    let _ = smart_search(&fixture.records, query, &SearchOptions::new());

    // Blank queries find nothing
    if query.trim().is_empty() {
        assert!(results.is_empty());
    }

    // Indexed results never repeat an identity
    let mut seen = HashSet::new();
    for record in &results {
        assert!(seen.insert(record.identity_key()), "duplicate result for {query:?}");
    }

    let limited = smart_search_limited(&fixture.records, query, &indexed, 5);
    assert_eq!(limited.len(), results.len().min(5));
});
