// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for section ordering: sorting arbitrary labels must be stable
//! under re-sorting and keep "100A" last.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use plotfinder::{compare_sections, sort_section_values};
use std::cmp::Ordering;

#[derive(Arbitrary, Debug)]
struct Input {
    sections: Vec<String>,
    with_trailing: bool,
}

fuzz_target!(|input: Input| {
    let mut sections = input.sections;
    if input.with_trailing {
        sections.push("100A".to_string());
    }

    sort_section_values(&mut sections);
    for pair in sections.windows(2) {
        assert_ne!(compare_sections(&pair[0], &pair[1]), Ordering::Greater);
    }
    if input.with_trailing {
        assert_eq!(sections.last().map(String::as_str), Some("100A"));
    }
});
