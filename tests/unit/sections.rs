// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Section ordering for the section picker.

use plotfinder::{compare_sections, sort_section_values};
use std::cmp::Ordering;

#[test]
fn test_trailing_section_sorts_last() {
    let mut sections = vec!["100A", "12", "3", "100", "101"];
    sort_section_values(&mut sections);
    assert_eq!(sections, vec!["3", "12", "100", "101", "100A"]);
}

#[test]
fn test_numbers_sort_by_value() {
    let mut sections = vec!["9", "10", "1", "99", "2"];
    sort_section_values(&mut sections);
    assert_eq!(sections, vec!["1", "2", "9", "10", "99"]);
}

#[test]
fn test_letter_suffixes_follow_their_number() {
    let mut sections = vec!["12b", "13", "12", "12A"];
    sort_section_values(&mut sections);
    assert_eq!(sections, vec!["12", "12A", "12b", "13"]);
}

#[test]
fn test_only_exact_trailing_label_is_special() {
    // Lower-case "100a" is an ordinary label
    assert_eq!(compare_sections("100a", "101"), Ordering::Less);
    assert_eq!(compare_sections("100A", "101"), Ordering::Greater);
    assert_eq!(compare_sections("100A", "100A"), Ordering::Equal);
}

#[test]
fn test_sorts_owned_strings() {
    let mut sections: Vec<String> = ["100A", "Chapel", "5"].iter().map(|s| s.to_string()).collect();
    sort_section_values(&mut sections);
    assert_eq!(sections, vec!["5", "Chapel", "100A"]);
}

#[test]
fn test_empty_input_is_fine() {
    let mut sections: Vec<&str> = Vec::new();
    sort_section_values(&mut sections);
    assert!(sections.is_empty());
}

#[test]
fn test_mixed_numeric_and_trailing() {
    let mut sections = vec!["100A", "9", "12", "3"];
    sort_section_values(&mut sections);
    assert_eq!(sections, vec!["3", "9", "12", "100A"]);
}
