// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for GeoJSON loading: errors are fine, panics are not.

#![no_main]

use libfuzzer_sys::fuzz_target;
use plotfinder::{build_search_index, smart_search, Dataset, SearchOptions};

fuzz_target!(|bytes: &[u8]| {
    let Ok(dataset) = Dataset::from_geojson(bytes) else {
        return;
    };

    for record in dataset.records() {
        assert!(record.has_name());
        assert!(record.searchable_label.is_some());
    }

    let index = build_search_index(dataset.records(), None);
    assert_eq!(index.record_count, dataset.len());
    let options = SearchOptions::new().with_index(&index);
    for query in ["1850", "section 1", "lot 1", "12", "a b"] {
        assert!(smart_search(dataset.records(), query, &options).len() <= dataset.len());
    }
    let _ = dataset.unique_sections();
});
