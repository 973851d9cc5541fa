// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deep-link decoding never fails and never contradicts itself.

use plotfinder::{parse_deep_link_state, TourCatalog};
use proptest::prelude::*;

fn link_strategy() -> impl Strategy<Value = String> {
    let key = prop::sample::select(vec!["section", "view", "q", "tour", "zoom", ""]);
    let value = "[A-Za-z0-9 %+&=?.]{0,12}";
    prop::collection::vec((key, value), 0..6).prop_map(|pairs| {
        let joined: Vec<String> = pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        format!("?{}", joined.join("&"))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_any_string_parses(raw in "\\PC{0,64}") {
        let tours = TourCatalog::default();
        let state = parse_deep_link_state(&raw, &tours.names());
        prop_assert!(!(state.show_burials_view && state.show_tours_view));
    }

    #[test]
    fn prop_fields_are_trimmed(raw in link_strategy()) {
        let state = parse_deep_link_state(&raw, &[] as &[&str]);
        prop_assert_eq!(state.section.trim(), state.section.as_str());
        prop_assert_eq!(state.query.trim(), state.query.as_str());
        prop_assert_eq!(state.view.to_lowercase(), state.view.clone());
    }

    #[test]
    fn prop_selected_tour_contains_raw_tour(raw in link_strategy()) {
        let tours = TourCatalog::default();
        let state = parse_deep_link_state(&raw, &tours.names());
        if let Some(name) = &state.selected_tour_name {
            prop_assert!(name.to_lowercase().contains(&state.raw_tour));
            prop_assert!(!state.raw_tour.is_empty());
        }
    }

    #[test]
    fn prop_view_flags_follow_view(raw in link_strategy()) {
        let state = parse_deep_link_state(&raw, &[] as &[&str]);
        prop_assert_eq!(state.show_burials_view, state.view == "burials");
        prop_assert_eq!(state.show_tours_view, state.view == "tours");
    }
}
