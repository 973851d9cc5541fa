// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! # INVARIANTS
//!
//! 1. **INSERTION_ORDER**: every posting list holds record positions in
//!    collection order.
//! 2. **DISTINCT_PER_KEY**: a record appears at most once under a given key,
//!    even when its label repeats a token or both dates share a year.
//! 3. **NON_EMPTY_KEYS**: empty keys are never inserted.
//!
//! A record normally fans out across many keys (one section, one lot, every
//! year, every token), which is what makes the per-query lookups cheap.

use crate::tours::TourNames;
use crate::types::{BurialRecord, PostingList, SearchIndex};
use crate::utils::{extract_years, normalize, normalize_opt, tokenize};
use std::collections::HashMap;

/// Append `position` under `key`, skipping empty keys and repeat inserts.
///
/// Records are visited in order, so a repeat for the same record can only
/// ever be the last entry of the list.
fn add_posting(map: &mut HashMap<String, PostingList>, key: String, position: usize) {
    if key.is_empty() {
        return;
    }
    let postings = map.entry(key).or_default();
    if postings.last() != Some(&position) {
        postings.push(position);
    }
}

/// Build the section, lot, year, label-token and tour-token indexes.
///
/// Runs in time proportional to the total number of indexed tokens. Build once
/// per collection version (see [`IndexCache`]) rather than per query. Missing
/// fields are indexed as empty and skipped; construction never fails.
///
/// When `tours` is `None` the tour-token map stays empty and tour queries fall
/// back to scanning.
pub fn build_search_index(records: &[BurialRecord], tours: Option<&dyn TourNames>) -> SearchIndex {
    let mut index = SearchIndex {
        record_count: records.len(),
        ..SearchIndex::default()
    };

    for (position, record) in records.iter().enumerate() {
        add_posting(
            &mut index.by_section,
            normalize_opt(record.section.as_deref()),
            position,
        );
        add_posting(&mut index.by_lot, normalize_opt(record.lot.as_deref()), position);

        for year in extract_years(record.birth(), record.death()) {
            add_posting(&mut index.by_year, year, position);
        }

        for token in tokenize(&record.label_lower()) {
            add_posting(&mut index.by_token, token, position);
        }

        if let Some(tours) = tours {
            let tour_name = normalize(&tours.tour_name(record));
            for token in tokenize(&tour_name) {
                add_posting(&mut index.by_tour_token, token, position);
            }
        }
    }

    tracing::debug!(
        records = index.record_count,
        sections = index.by_section.len(),
        lots = index.by_lot.len(),
        years = index.by_year.len(),
        tokens = index.by_token.len(),
        tour_tokens = index.by_tour_token.len(),
        "built search index"
    );

    index
}

/// A [`SearchIndex`] tagged with the collection version it was built from.
///
/// Rebuilding is explicit: callers pass the current version token on every
/// access and the index is rebuilt only when that token changes. Use a
/// content hash such as [`crate::Dataset::version`], not a pointer.
#[derive(Debug, Default)]
pub struct IndexCache {
    entry: Option<(u64, SearchIndex)>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Version of the cached index, if one has been built.
    pub fn version(&self) -> Option<u64> {
        self.entry.as_ref().map(|(version, _)| *version)
    }

    /// The cached index, regardless of version.
    pub fn get(&self) -> Option<&SearchIndex> {
        self.entry.as_ref().map(|(_, index)| index)
    }

    /// Return the index for `version`, rebuilding it from `records` if the
    /// cached one was built from a different version.
    pub fn get_or_rebuild(
        &mut self,
        version: u64,
        records: &[BurialRecord],
        tours: Option<&dyn TourNames>,
    ) -> &SearchIndex {
        if self.version() == Some(version) {
            tracing::trace!(version, "search index cache hit");
        } else {
            tracing::debug!(version, previous = ?self.version(), "rebuilding search index");
            self.entry = None;
        }

        let (_, index) = self
            .entry
            .get_or_insert_with(|| (version, build_search_index(records, tours)));
        index
    }

    /// Drop the cached index so the next access rebuilds.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
