// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by indexing, query classification and deep links.
//!
//! Everything here is total: missing values are treated as empty strings and
//! nothing allocates more than the output it returns.

use crate::constants::{MIN_TOKEN_LEN, TRAILING_SECTION, YEAR_DIGITS};
use std::cmp::Ordering;

/// Normalize a value for comparison: trim surrounding whitespace, then lowercase.
///
/// Section and lot tokens are compared through this function, never as numbers,
/// so "012" and "12" are different keys while "100A" and "100a" are the same.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalize an optional field, treating `None` as the empty string.
pub fn normalize_opt(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}

/// Word boundary detection for tokens: anything outside `[a-z0-9]` splits.
///
/// Only ASCII letters and digits form tokens. Accented letters act as
/// separators, matching how labels were tokenized when the index format
/// was first defined.
fn is_token_separator(c: char) -> bool {
    !c.is_ascii_lowercase() && !c.is_ascii_digit()
}

/// Split a value into lower-case alphanumeric tokens of length >= 2.
///
/// Tokens are returned in order of appearance and may repeat; callers that
/// need distinct tokens dedupe on insertion.
pub fn tokenize(value: &str) -> Vec<String> {
    normalize(value)
        .split(is_token_separator)
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Extract every standalone 4-digit year from a pair of date strings.
///
/// A year is a run of exactly four ASCII digits that is not adjacent to another
/// letter, digit or underscore, so "6/22/1966" yields "1966" while "19661" and
/// "x1966" yield nothing. Birth and death are scanned as one string joined by
/// a space; the result may contain the same year twice.
pub fn extract_years(birth: &str, death: &str) -> Vec<String> {
    let joined = format!("{} {}", birth, death);
    let bytes = joined.as_bytes();
    let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

    let mut years = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if !is_word(bytes[i]) {
            i += 1;
            continue;
        }

        // Walk one whole word run and keep it only if it is exactly four digits
        let start = i;
        while i < bytes.len() && is_word(bytes[i]) {
            i += 1;
        }
        let run = &bytes[start..i];
        if run.len() == YEAR_DIGITS && run.iter().all(u8::is_ascii_digit) {
            years.push(joined[start..i].to_string());
        }
    }
    years
}

/// Compare two section labels for display.
///
/// [`TRAILING_SECTION`] always sorts last. Everything else uses a natural
/// ordering: digit runs compare by numeric value, other characters compare
/// case-insensitively, so "9" < "12" < "12b".
pub fn compare_sections(a: &str, b: &str) -> Ordering {
    match (a == TRAILING_SECTION, b == TRAILING_SECTION) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => natural_cmp(a, b),
    }
}

/// Sort section labels in place using [`compare_sections`].
pub fn sort_section_values<S: AsRef<str>>(values: &mut [S]) {
    values.sort_by(|a, b| compare_sections(a.as_ref(), b.as_ref()));
}

/// Numeric-aware, case-insensitive string comparison.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x, y) {
                    (Chunk::Digits(x), Chunk::Digits(y)) => cmp_digit_runs(x, y),
                    (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
                    (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
                    (Chunk::Text(x), Chunk::Text(y)) => x
                        .chars()
                        .flat_map(char::to_lowercase)
                        .cmp(y.chars().flat_map(char::to_lowercase)),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Compare two ASCII digit runs by value without parsing (no overflow on long runs).
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Splits a string into alternating digit and non-digit runs.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(value: &'a str) -> Self {
        Self { rest: value }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(i, _)| i);

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if digits {
            Chunk::Digits(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}
