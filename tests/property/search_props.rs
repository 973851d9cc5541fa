// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search invariants over generated burial collections.
//!
//! Generated names come from a vocabulary where no word is a substring of
//! another word, a section label, or a tour name, and dates use "M/D/YYYY".
//! On such data the indexed path and the linear scan must agree exactly.

use crate::common::{ids, make_record};
use plotfinder::{
    build_search_index, classify, normalize, smart_search, smart_search_limited, BurialRecord,
    QueryIntent, SearchIndex, SearchOptions, TourCatalog,
};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// STRATEGIES
// ============================================================================

const FIRST: &[&str] = &["Abigail", "Benjamin", "Clara", "Daniel", "Eliza", "Henry"];
const LAST: &[&str] = &["Pruyn", "Corning", "Olcott", "Lansing", "Bleecker"];
const SECTIONS: &[&str] = &["1", "3", "12", "100A", "7b"];
const TOURS: &[Option<&str>] = &[None, Some("Notable"), Some("CivilWar"), Some("Pillars"), Some("Business")];
const TOUR_QUERIES: &[&str] = &[
    "civil war tour",
    "notables tour",
    "pillars of society tour",
    "Business Tour",
    "tour",
];

/// (first, last, section, lot, birth, death, tour)
type RecordParts = (usize, usize, usize, u32, (u32, u32, u32), (u32, u32, u32), usize);

fn date_strategy() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=12, 1u32..=28, 1800u32..1999)
}

fn parts_strategy() -> impl Strategy<Value = RecordParts> {
    (
        0..FIRST.len(),
        0..LAST.len(),
        0..SECTIONS.len(),
        1u32..40,
        date_strategy(),
        date_strategy(),
        0..TOURS.len(),
    )
}

fn records_strategy() -> impl Strategy<Value = Vec<BurialRecord>> {
    prop::collection::vec(parts_strategy(), 1..40).prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(i, (first, last, section, lot, birth, death, tour))| {
                let date = |(m, d, y): (u32, u32, u32)| format!("{}/{}/{}", m, d, y);
                make_record(
                    i as i64,
                    FIRST[first],
                    LAST[last],
                    SECTIONS[section],
                    &lot.to_string(),
                    &date(birth),
                    &date(death),
                    TOURS[tour],
                )
            })
            .collect()
    })
}

/// Queries in every intent except bare numbers.
fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1800u32..1999).prop_map(|year| year.to_string()),
        prop::sample::select(SECTIONS).prop_map(|s| format!("section {}", s)),
        prop::sample::select(SECTIONS).prop_map(|s| format!("Sec{}", s)),
        (1u32..40).prop_map(|lot| format!("lot {}", lot)),
        prop::sample::select(FIRST).prop_map(|name| name.to_lowercase()),
        prop::sample::select(LAST).prop_map(str::to_string),
        (prop::sample::select(FIRST), prop::sample::select(LAST))
            .prop_map(|(first, last)| format!("{} {}", first, last)),
        prop::sample::select(TOUR_QUERIES).prop_map(str::to_string),
    ]
}

fn run(records: &[BurialRecord], query: &str, indexed: bool) -> Vec<i64> {
    let tours = TourCatalog::default();
    let index = build_search_index(records, Some(&tours));
    let mut options = SearchOptions::new().with_tours(&tours);
    if indexed {
        options = options.with_index(&index);
    }
    ids(&smart_search(records, query, &options))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Indexed lookups never change the answer, only how it is found.
    #[test]
    fn prop_indexed_equals_scan(records in records_strategy(), query in query_strategy()) {
        prop_assert_eq!(run(&records, &query, true), run(&records, &query, false));
    }

    /// Building twice gives the same index and the same answers.
    #[test]
    fn prop_indexing_is_idempotent(records in records_strategy(), query in query_strategy()) {
        let tours = TourCatalog::default();
        let first = build_search_index(&records, Some(&tours));
        let second = build_search_index(&records, Some(&tours));
        prop_assert_eq!(&first, &second);

        let search = |index: &SearchIndex| {
            let options = SearchOptions::new().with_index(index).with_tours(&tours);
            ids(&smart_search(&records, &query, &options))
        };
        prop_assert_eq!(search(&first), search(&second));
    }

    /// Same inputs, same output.
    #[test]
    fn prop_search_is_deterministic(records in records_strategy(), query in query_strategy()) {
        prop_assert_eq!(run(&records, &query, true), run(&records, &query, true));
    }

    /// No identity appears twice in indexed results, including bare numbers.
    #[test]
    fn prop_indexed_results_are_unique(
        records in records_strategy(),
        query in prop_oneof![query_strategy(), (1u32..200).prop_map(|n| n.to_string())],
    ) {
        let found = run(&records, &query, true);
        let distinct: HashSet<_> = found.iter().collect();
        prop_assert_eq!(distinct.len(), found.len());
    }

    /// Every section and lot result carries the searched value.
    #[test]
    fn prop_structured_results_match_their_field(
        records in records_strategy(),
        query in query_strategy(),
    ) {
        let tours = TourCatalog::default();
        let index = build_search_index(&records, Some(&tours));
        let options = SearchOptions::new().with_index(&index).with_tours(&tours);
        let results = smart_search(&records, &query, &options);

        match classify(&query, true) {
            QueryIntent::Section(section) => {
                prop_assert!(results.iter().all(|r| normalize(r.section()) == section));
            }
            QueryIntent::Lot(lot) => {
                prop_assert!(results.iter().all(|r| normalize(r.lot()) == lot));
            }
            QueryIntent::Year(year) => {
                prop_assert!(results
                    .iter()
                    .all(|r| r.birth().contains(&year) || r.death().contains(&year)));
            }
            _ => {}
        }
    }

    /// Truncation keeps a prefix of the full result list.
    #[test]
    fn prop_limited_is_prefix(
        records in records_strategy(),
        query in query_strategy(),
        limit in 0usize..10,
    ) {
        let tours = TourCatalog::default();
        let options = SearchOptions::new().with_tours(&tours);
        let full = ids(&smart_search(&records, &query, &options));
        let limited = ids(&smart_search_limited(&records, &query, &options, limit));
        prop_assert_eq!(&full[..limited.len()], &limited[..]);
        prop_assert_eq!(limited.len(), full.len().min(limit));
    }

    /// Arbitrary input never panics, with or without an index.
    #[test]
    fn prop_any_query_is_total(records in records_strategy(), query in "\\PC{0,24}") {
        let indexed = run(&records, &query, true);
        let scanned = run(&records, &query, false);
        prop_assert!(indexed.len() <= records.len());
        prop_assert!(scanned.len() <= records.len());
    }
}
