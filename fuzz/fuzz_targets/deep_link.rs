// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for deep-link decoding. Any string must decode.

#![no_main]

use libfuzzer_sys::fuzz_target;
use plotfinder::{parse_deep_link_state, TourCatalog};

fuzz_target!(|raw: &str| {
    let tours = TourCatalog::default();
    let state = parse_deep_link_state(raw, &tours.names());

    assert!(!(state.show_burials_view && state.show_tours_view));
    assert_eq!(state.section.trim(), state.section);
    assert_eq!(state.query.trim(), state.query);
    if let Some(name) = &state.selected_tour_name {
        assert!(name.to_lowercase().contains(&state.raw_tour));
    }
});
