// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query classification.
//!
//! A raw search box string is read as exactly one intent. Rules are tried in a
//! fixed order and the first match wins:
//!
//! | # | Intent   | Shape (after trim + lowercase)      | Example          |
//! |---|----------|-------------------------------------|------------------|
//! | 1 | Empty    | nothing                             | `"   "`          |
//! | 2 | Year     | exactly four digits                 | `"1812"`         |
//! | 3 | Section  | `section`/`sec` + alphanumeric id   | `"sec 100a"`     |
//! | 4 | Lot      | `lot` + digits                      | `"lot 9"`        |
//! | 5 | Tour     | anything ending in `tour`*          | `"civil war tour"` |
//! | 6 | Number   | digits of any other length          | `"12"`           |
//! | 7 | Text     | everything else                     | `"jane doe"`     |
//!
//! \* only when a tour resolver is available; otherwise such input is text.
//!
//! Year comes before Number so that "1812" is never read as a section or lot.

use crate::utils::normalize;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{4}$"));
static SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(section|sec)\s*([a-z0-9]+)$"));
static LOT_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^lot\s*([0-9]+)$"));
static TOUR_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^(.*?)\s*tour$"));
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+$"));

fn compile(pattern: &str) -> Regex {
    // Patterns are literals covered by the tests below
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid query pattern {pattern:?}: {e}"))
}

/// The structured reading of a search query.
///
/// Every payload is already normalized (trimmed, lower-cased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    /// Blank input; resolves to no results.
    Empty,
    /// Four-digit year matched against birth and death dates.
    Year(String),
    /// Section id, e.g. "100a".
    Section(String),
    /// Lot number.
    Lot(String),
    /// Text before the trailing "tour"; may be empty.
    Tour(String),
    /// Bare number: section, lot or year.
    Number(String),
    /// Free text matched against labels and tour names.
    Text(String),
}

impl QueryIntent {
    /// Short name of the intent, for logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryIntent::Empty => "empty",
            QueryIntent::Year(_) => "year",
            QueryIntent::Section(_) => "section",
            QueryIntent::Lot(_) => "lot",
            QueryIntent::Tour(_) => "tour",
            QueryIntent::Number(_) => "number",
            QueryIntent::Text(_) => "text",
        }
    }

    /// The normalized term the intent searches for.
    pub fn term(&self) -> &str {
        match self {
            QueryIntent::Empty => "",
            QueryIntent::Year(term)
            | QueryIntent::Section(term)
            | QueryIntent::Lot(term)
            | QueryIntent::Tour(term)
            | QueryIntent::Number(term)
            | QueryIntent::Text(term) => term,
        }
    }
}

impl fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind(), self.term())
    }
}

/// Classify a raw query.
///
/// `tours_enabled` says whether tour names can be resolved; without a resolver
/// "… tour" queries are treated as free text.
pub fn classify(query: &str, tours_enabled: bool) -> QueryIntent {
    let input = normalize(query);
    if input.is_empty() {
        return QueryIntent::Empty;
    }

    if YEAR_PATTERN.is_match(&input) {
        return QueryIntent::Year(input);
    }

    if let Some(caps) = SECTION_PATTERN.captures(&input) {
        return QueryIntent::Section(normalize(&caps[2]));
    }

    if let Some(caps) = LOT_PATTERN.captures(&input) {
        return QueryIntent::Lot(normalize(&caps[1]));
    }

    if tours_enabled {
        if let Some(caps) = TOUR_PATTERN.captures(&input) {
            return QueryIntent::Tour(normalize(&caps[1]));
        }
    }

    if NUMBER_PATTERN.is_match(&input) {
        return QueryIntent::Number(input);
    }

    QueryIntent::Text(input)
}
