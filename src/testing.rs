// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches and fuzz targets.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::tours::TourCatalog;
use crate::types::BurialRecord;

/// Create a record with a prepared search label.
#[allow(clippy::too_many_arguments)]
pub fn make_record(
    object_id: i64,
    first: &str,
    last: &str,
    section: &str,
    lot: &str,
    birth: &str,
    death: &str,
    tour_key: Option<&str>,
) -> BurialRecord {
    let text = |value: &str| (!value.is_empty()).then(|| value.to_string());
    let mut record = BurialRecord {
        object_id: Some(object_id),
        first_name: text(first),
        last_name: text(last),
        section: text(section),
        lot: text(lot),
        birth: text(birth),
        death: text(death),
        tour_key: tour_key.map(str::to_string),
        ..Default::default()
    };
    record.prepare_label();
    record
}

/// Create a record with no `OBJECTID` or `key`, so it dedupes by composite key.
pub fn make_anonymous_record(first: &str, last: &str, section: &str, lot: &str) -> BurialRecord {
    let mut record = make_record(0, first, last, section, lot, "", "", None);
    record.object_id = None;
    record
}

/// The canonical three-burial fixture.
///
/// | id | name         | section | lot | dates     | tour                |
/// |----|--------------|---------|-----|-----------|---------------------|
/// | 1  | Jane Doe     | 12      | 8   | 1812-1899 | Notables Tour 2020  |
/// | 2  | John Smith   | 3       | 12  | 1812-1844 | -                   |
/// | 3  | Ada Lovelace | 100A    | 9   | 1815-1852 | Civil War Tour 2020 |
pub fn fixture_records() -> Vec<BurialRecord> {
    vec![
        make_record(1, "Jane", "Doe", "12", "8", "1812", "1899", Some("Notable")),
        make_record(2, "John", "Smith", "3", "12", "1812", "1844", None),
        make_record(3, "Ada", "Lovelace", "100A", "9", "1815", "1852", Some("CivilWar")),
    ]
}

/// Tour resolver for [`fixture_records`].
pub fn fixture_tours() -> TourCatalog {
    TourCatalog::default()
}

/// `OBJECTID`s of a result list, in order.
pub fn ids(results: &[&BurialRecord]) -> Vec<i64> {
    results.iter().filter_map(|record| record.object_id).collect()
}

/// A synthetic collection of `count` records spread over sections, lots,
/// decades and tours. Deterministic for a given `count`.
pub fn synthetic_records(count: usize) -> Vec<BurialRecord> {
    const FIRST: &[&str] = &[
        "Abigail", "Benjamin", "Clara", "Daniel", "Eliza", "Frederick", "Grace", "Henry",
        "Isabel", "James", "Katherine", "Lewis",
    ];
    const LAST: &[&str] = &[
        "Van Rensselaer", "Schuyler", "Corning", "Pruyn", "Townsend", "Olcott", "Ten Eyck",
        "Dudley", "Lansing", "Bleecker",
    ];
    const TOURS: &[Option<&str>] = &[
        None, None, None, Some("Notable"), Some("CivilWar"), Some("Business"), Some("Art"),
    ];

    (0..count)
        .map(|i| {
            let section = if i % 97 == 0 {
                "100A".to_string()
            } else {
                (1 + i % 120).to_string()
            };
            let lot = (1 + (i / 7) % 300).to_string();
            let birth = format!("{}/{}/{}", 1 + i % 12, 1 + i % 28, 1780 + i % 120);
            let death = format!("{}/{}/{}", 1 + (i + 5) % 12, 1 + (i + 3) % 28, 1840 + i % 150);
            make_record(
                i as i64,
                FIRST[i % FIRST.len()],
                LAST[(i / FIRST.len()) % LAST.len()],
                &section,
                &lot,
                &birth,
                &death,
                TOURS[i % TOURS.len()],
            )
        })
        .collect()
}
