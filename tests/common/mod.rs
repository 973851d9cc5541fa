// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use plotfinder::{
    build_search_index, smart_search, BurialRecord, SearchOptions, TourCatalog,
};
use std::io::Write;

// Re-export canonical test utilities from plotfinder::testing
pub use plotfinder::testing::{
    fixture_records, fixture_tours, ids, make_anonymous_record, make_record, synthetic_records,
};

// ============================================================================
// GEOJSON FIXTURES
// ============================================================================

/// A small export in the shape the map ships: mixed string and numeric
/// fields, one nameless survey row, one feature without properties.
pub const SAMPLE_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature",
     "properties": {"OBJECTID": 101, "First_Name": "Erastus", "Last_Name": "Corning",
                    "Section": "12", "Lot": "8", "Tier": "1", "Grave": "3",
                    "Birth": "12/14/1794", "Death": "4/9/1872", "title": "Business"},
     "geometry": {"type": "Point", "coordinates": [-73.7334, 42.7053]}},
    {"type": "Feature",
     "properties": {"OBJECTID": 102, "First_Name": "Chester", "Last_Name": "Arthur",
                    "Section": 4, "Lot": 1, "Birth": "10/5/1829", "Death": "11/18/1886",
                    "title": "Notable"},
     "geometry": {"type": "Point", "coordinates": [-73.7321, 42.7061]}},
    {"type": "Feature",
     "properties": {"OBJECTID": 103, "First_Name": "Lewis", "Last_Name": "Benedict",
                    "Section": "100A", "Lot": "12", "Tier": "2",
                    "Birth": "9/2/1817", "Death": "4/9/1864", "title": "CivilWar"},
     "geometry": {"type": "Point", "coordinates": [-73.7302, 42.7070]}},
    {"type": "Feature",
     "properties": {"OBJECTID": 104, "First_Name": "", "Last_Name": "",
                    "Section": "12", "Lot": "9"},
     "geometry": null},
    {"type": "Feature", "properties": null, "geometry": null},
    {"type": "Feature",
     "properties": {"OBJECTID": 105, "First_Name": "Anna", "Last_Name": "Corning",
                    "Section": "12", "Lot": "8", "Tier": "2",
                    "Birth": "1/1/1800", "Death": "", "title": null},
     "geometry": {"type": "Point", "coordinates": [-73.7335, 42.7054]}}
  ]
}"#;

/// Write `contents` to a fresh temporary file.
pub fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

// ============================================================================
// SEARCH HELPERS
// ============================================================================

/// Ids returned by the indexed path for `query`.
pub fn indexed_ids(records: &[BurialRecord], tours: &TourCatalog, query: &str) -> Vec<i64> {
    let index = build_search_index(records, Some(tours));
    let options = SearchOptions::new().with_index(&index).with_tours(tours);
    ids(&smart_search(records, query, &options))
}

/// Ids returned by the linear scan for `query`.
pub fn scanned_ids(records: &[BurialRecord], tours: &TourCatalog, query: &str) -> Vec<i64> {
    let options = SearchOptions::new().with_tours(tours);
    ids(&smart_search(records, query, &options))
}
