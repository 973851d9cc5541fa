// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query resolution: classify, then look up or scan.
//!
//! Each [`QueryIntent`] has an indexed path and a linear-scan fallback. The
//! indexed path is taken whenever the relevant map has an entry for the
//! query's key; otherwise the whole collection is scanned. For well-formed
//! data both paths return the same set of records.
//!
//! Indexed paths are deduplicated by record identity ([`dedup`]). The year,
//! section, lot and number scans visit each record once and are returned as-is.

pub mod dedup;

use crate::query::{classify, QueryIntent};
use crate::tours::TourNames;
use crate::types::{BurialRecord, PostingList, SearchIndex};
use crate::utils::{normalize, normalize_opt, tokenize};
use dedup::{dedupe, ResultMerger};

/// Optional collaborators for [`smart_search`].
///
/// Both default to absent: no index means every query scans, no tour resolver
/// means "… tour" queries are free text and tour names never match.
#[derive(Clone, Copy, Default)]
pub struct SearchOptions<'a> {
    pub index: Option<&'a SearchIndex>,
    pub tours: Option<&'a dyn TourNames>,
}

impl<'a> SearchOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index(mut self, index: &'a SearchIndex) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_tours(mut self, tours: &'a dyn TourNames) -> Self {
        self.tours = Some(tours);
        self
    }
}

/// Resolve `query` against `records`.
///
/// `records` must be the collection `options.index` was built from; positions
/// outside it are skipped rather than trusted. Results are in first-seen
/// order. Never fails: blank input yields an empty list.
///
/// # Example
///
/// ```ignore
/// let tours = TourCatalog::default();
/// let index = build_search_index(&records, Some(&tours));
/// let options = SearchOptions::new().with_index(&index).with_tours(&tours);
/// let hits = smart_search(&records, "civil war tour", &options);
/// ```
pub fn smart_search<'r>(
    records: &'r [BurialRecord],
    query: &str,
    options: &SearchOptions<'_>,
) -> Vec<&'r BurialRecord> {
    let intent = classify(query, options.tours.is_some());
    tracing::debug!(
        intent = intent.kind(),
        term = intent.term(),
        indexed = options.index.is_some(),
        "resolving query"
    );

    match &intent {
        QueryIntent::Empty => Vec::new(),
        QueryIntent::Year(year) => search_year(records, year, options.index),
        QueryIntent::Section(section) => search_section(records, section, options.index),
        QueryIntent::Lot(lot) => search_lot(records, lot, options.index),
        QueryIntent::Tour(prefix) => match options.tours {
            Some(tours) => search_tour(records, prefix, options.index, tours),
            // classify only yields Tour when a resolver exists
            None => Vec::new(),
        },
        QueryIntent::Number(number) => search_number(records, number, options.index),
        QueryIntent::Text(text) => search_text(records, text, options.index, options.tours),
    }
}

/// [`smart_search`] truncated to at most `limit` results.
pub fn smart_search_limited<'r>(
    records: &'r [BurialRecord],
    query: &str,
    options: &SearchOptions<'_>,
    limit: usize,
) -> Vec<&'r BurialRecord> {
    let mut results = smart_search(records, query, options);
    results.truncate(limit);
    results
}

/// Records at `postings`, skipping positions outside `records`.
fn resolve<'r, 'p>(
    records: &'r [BurialRecord],
    postings: &'p [usize],
) -> impl Iterator<Item = &'r BurialRecord> + 'p
where
    'r: 'p,
{
    postings.iter().filter_map(move |&position| records.get(position))
}

/// Look up `key` in one of the index's maps, if an index was supplied.
fn lookup<'i>(
    index: Option<&'i SearchIndex>,
    map: impl Fn(&'i SearchIndex) -> &'i std::collections::HashMap<String, PostingList>,
    key: &str,
) -> Option<&'i PostingList> {
    index.and_then(|index| map(index).get(key))
}

fn dates_contain(record: &BurialRecord, needle: &str) -> bool {
    record.birth().contains(needle) || record.death().contains(needle)
}

fn search_year<'r>(
    records: &'r [BurialRecord],
    year: &str,
    index: Option<&SearchIndex>,
) -> Vec<&'r BurialRecord> {
    if let Some(postings) = lookup(index, |i| &i.by_year, year) {
        return dedupe(resolve(records, postings));
    }

    // Substring match: catches years anywhere in a free-form date string
    records
        .iter()
        .filter(|record| dates_contain(record, year))
        .collect()
}

fn search_section<'r>(
    records: &'r [BurialRecord],
    section: &str,
    index: Option<&SearchIndex>,
) -> Vec<&'r BurialRecord> {
    if let Some(postings) = lookup(index, |i| &i.by_section, section) {
        return dedupe(resolve(records, postings));
    }

    records
        .iter()
        .filter(|record| normalize_opt(record.section.as_deref()) == section)
        .collect()
}

fn search_lot<'r>(
    records: &'r [BurialRecord],
    lot: &str,
    index: Option<&SearchIndex>,
) -> Vec<&'r BurialRecord> {
    if let Some(postings) = lookup(index, |i| &i.by_lot, lot) {
        return dedupe(resolve(records, postings));
    }

    records
        .iter()
        .filter(|record| normalize_opt(record.lot.as_deref()) == lot)
        .collect()
}

/// Records whose tour name contains `prefix`.
///
/// The first token of `prefix` narrows the candidates via the tour-token map;
/// the substring test then runs on that smaller pool.
fn search_tour<'r>(
    records: &'r [BurialRecord],
    prefix: &str,
    index: Option<&SearchIndex>,
    tours: &dyn TourNames,
) -> Vec<&'r BurialRecord> {
    let matches = |record: &&BurialRecord| normalize(&tours.tour_name(record)).contains(prefix);

    let first_token = tokenize(prefix).into_iter().next();
    let pool = first_token.and_then(|token| lookup(index, |i| &i.by_tour_token, &token));

    match pool {
        Some(postings) => dedupe(resolve(records, postings).filter(matches)),
        None => dedupe(records.iter().filter(matches)),
    }
}

/// A bare number could be a section, a lot or a year; take the union.
fn search_number<'r>(
    records: &'r [BurialRecord],
    number: &str,
    index: Option<&SearchIndex>,
) -> Vec<&'r BurialRecord> {
    let mut merger = ResultMerger::new();
    for postings in [
        lookup(index, |i| &i.by_section, number),
        lookup(index, |i| &i.by_lot, number),
        lookup(index, |i| &i.by_year, number),
    ]
    .into_iter()
    .flatten()
    {
        merger.merge_all(resolve(records, postings));
    }

    if !merger.is_empty() {
        return merger.into_results();
    }

    records
        .iter()
        .filter(|record| {
            normalize_opt(record.section.as_deref()) == number
                || normalize_opt(record.lot.as_deref()) == number
                || dates_contain(record, number)
        })
        .collect()
}

/// Free text: substring match on the label or the tour name.
///
/// With an index, the scan is limited to the records of the query token with
/// the fewest hits. Tokens absent from the index are ignored when picking; if
/// none are present the whole collection is scanned.
fn search_text<'r>(
    records: &'r [BurialRecord],
    text: &str,
    index: Option<&SearchIndex>,
    tours: Option<&dyn TourNames>,
) -> Vec<&'r BurialRecord> {
    let matches = |record: &&BurialRecord| {
        record.label_lower().contains(text)
            || tours.is_some_and(|tours| normalize(&tours.tour_name(record)).contains(text))
    };

    let mut smallest: Option<&PostingList> = None;
    for token in tokenize(text) {
        if let Some(postings) = lookup(index, |i| &i.by_token, &token) {
            // Strictly smaller only, so ties keep the earlier token
            if !postings.is_empty() && smallest.map_or(true, |best| postings.len() < best.len()) {
                smallest = Some(postings);
            }
        }
    }

    match smallest {
        Some(postings) => dedupe(resolve(records, postings).filter(matches)),
        None => dedupe(records.iter().filter(matches)),
    }
}
