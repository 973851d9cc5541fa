// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Section ordering properties.

use plotfinder::{compare_sections, sort_section_values};
use proptest::prelude::*;
use std::cmp::Ordering;

fn section_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("100A".to_string()),
        prop::string::string_regex("[0-9]{1,3}").unwrap(),
        prop::string::string_regex("[0-9]{1,3}[A-Za-z]").unwrap(),
        prop::string::string_regex("[A-Za-z]{1,6}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_compare_is_antisymmetric(a in section_strategy(), b in section_strategy()) {
        prop_assert_eq!(compare_sections(&a, &b), compare_sections(&b, &a).reverse());
    }

    #[test]
    fn prop_compare_is_transitive(
        a in section_strategy(),
        b in section_strategy(),
        c in section_strategy(),
    ) {
        if compare_sections(&a, &b) != Ordering::Greater
            && compare_sections(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(compare_sections(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn prop_trailing_section_is_last(mut sections in prop::collection::vec(section_strategy(), 0..20)) {
        sections.push("100A".to_string());
        sort_section_values(&mut sections);
        prop_assert_eq!(sections.last().map(String::as_str), Some("100A"));
        let first = sections.iter().position(|s| s == "100A").unwrap();
        prop_assert!(sections[first..].iter().all(|s| s == "100A"));
    }

    #[test]
    fn prop_sort_is_idempotent(mut sections in prop::collection::vec(section_strategy(), 0..20)) {
        sort_section_values(&mut sections);
        let once = sections.clone();
        sort_section_values(&mut sections);
        prop_assert_eq!(once, sections);
    }
}
