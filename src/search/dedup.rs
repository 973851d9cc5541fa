// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication.
//!
//! A record should appear at most once in search results. Index lookups fan
//! out (a bare "12" hits the section, lot and year maps), and separately built
//! record collections can contain the same burial twice, so every indexed path
//! funnels its candidates through [`ResultMerger`].
//!
//! **Invariant**: each identity key appears at most once, at the position of
//! its first occurrence.
//!
//! Identity comes from [`BurialRecord::identity_key`], the same function the
//! index is keyed with, so indexed and scanned results agree on what counts
//! as a duplicate.

use crate::types::{BurialRecord, RecordKey};
use std::collections::HashSet;

/// Order-preserving, first-occurrence-wins merger keyed on record identity.
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::new();
/// merger.merge_all(section_hits);
/// merger.merge_all(lot_hits);
/// let results = merger.into_results();
/// ```
#[derive(Debug, Default)]
pub struct ResultMerger<'r> {
    seen: HashSet<RecordKey>,
    results: Vec<&'r BurialRecord>,
}

impl<'r> ResultMerger<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merger with room for `capacity` unique records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            results: Vec::with_capacity(capacity),
        }
    }

    /// Keep `record` unless a record with the same identity was merged already.
    ///
    /// Returns whether the record was kept.
    pub fn merge(&mut self, record: &'r BurialRecord) -> bool {
        let kept = self.seen.insert(record.identity_key());
        if kept {
            self.results.push(record);
        }
        kept
    }

    pub fn merge_all(&mut self, records: impl IntoIterator<Item = &'r BurialRecord>) {
        for record in records {
            self.merge(record);
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<&'r BurialRecord> {
        self.results
    }
}

/// Deduplicate `records` by identity, keeping first occurrences in order.
pub fn dedupe<'r>(records: impl IntoIterator<Item = &'r BurialRecord>) -> Vec<&'r BurialRecord> {
    let mut merger = ResultMerger::new();
    merger.merge_all(records);
    merger.into_results()
}
