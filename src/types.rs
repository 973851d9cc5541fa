// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for burial records and search indexes.

use crate::utils::normalize;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

/// One burial entry, shaped like a feature's `properties` in the cemetery GeoJSON.
///
/// Every field is optional. Text fields accept JSON strings, numbers and booleans
/// (the source data stores some sections and lots as numbers) and always surface
/// as strings. Records are never mutated after they have been indexed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BurialRecord {
    #[serde(
        rename = "OBJECTID",
        default,
        deserialize_with = "loose_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub object_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "First_Name", default, deserialize_with = "loose_text")]
    pub first_name: Option<String>,
    #[serde(rename = "Last_Name", default, deserialize_with = "loose_text")]
    pub last_name: Option<String>,
    #[serde(rename = "Section", default, deserialize_with = "loose_text")]
    pub section: Option<String>,
    #[serde(rename = "Lot", default, deserialize_with = "loose_text")]
    pub lot: Option<String>,
    #[serde(rename = "Tier", default, deserialize_with = "loose_text")]
    pub tier: Option<String>,
    #[serde(rename = "Grave", default, deserialize_with = "loose_text")]
    pub grave: Option<String>,
    #[serde(rename = "Birth", default, deserialize_with = "loose_text")]
    pub birth: Option<String>,
    #[serde(rename = "Death", default, deserialize_with = "loose_text")]
    pub death: Option<String>,
    /// Tour tag (e.g. "CivilWar"), resolved to a display name by a [`crate::TourNames`].
    #[serde(rename = "title", default, deserialize_with = "loose_text")]
    pub tour_key: Option<String>,
    #[serde(rename = "searchableLabel", default, skip_serializing_if = "Option::is_none")]
    pub searchable_label: Option<String>,
    #[serde(
        rename = "searchableLabelLower",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub searchable_label_lower: Option<String>,
    /// `[longitude, latitude]` of the grave marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
}

/// Accept any scalar JSON value for a text field.
fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Accept an integer, an integral float or a numeric string as an id.
/// Anything else reads as no id.
fn loose_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    })
}

fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| value as i64)
}

impl BurialRecord {
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or("")
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or("")
    }

    pub fn section(&self) -> &str {
        self.section.as_deref().unwrap_or("")
    }

    pub fn lot(&self) -> &str {
        self.lot.as_deref().unwrap_or("")
    }

    pub fn tier(&self) -> &str {
        self.tier.as_deref().unwrap_or("")
    }

    pub fn grave(&self) -> &str {
        self.grave.as_deref().unwrap_or("")
    }

    pub fn birth(&self) -> &str {
        self.birth.as_deref().unwrap_or("")
    }

    pub fn death(&self) -> &str {
        self.death.as_deref().unwrap_or("")
    }

    /// "First Last", as shown in result lists.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
            .trim()
            .to_string()
    }

    /// Whether the record carries a first or last name. Nameless rows are map
    /// artifacts and never appear in search.
    pub fn has_name(&self) -> bool {
        !self.first_name().is_empty() || !self.last_name().is_empty()
    }

    /// Identity used for deduplicating results.
    ///
    /// `OBJECTID` wins, then an explicit `key`, then the composite
    /// `first_last_section_lot`. The composite can collide for two distinct
    /// burials with the same name in the same plot when neither has an id.
    pub fn identity_key(&self) -> RecordKey {
        if let Some(id) = self.object_id {
            return RecordKey::Id(id);
        }
        if let Some(key) = &self.key {
            return RecordKey::Key(key.clone());
        }
        RecordKey::Composite(format!(
            "{}_{}_{}_{}",
            self.first_name(),
            self.last_name(),
            self.section(),
            self.lot()
        ))
    }

    /// Lower-cased searchable label, using the cached copy when present.
    pub fn label_lower(&self) -> Cow<'_, str> {
        match self.searchable_label_lower.as_deref() {
            Some(lower) if !lower.is_empty() => Cow::Borrowed(lower),
            _ => Cow::Owned(normalize(self.searchable_label.as_deref().unwrap_or(""))),
        }
    }

    /// Fill in `searchable_label` and its lower-case cache if they are missing.
    ///
    /// The label reads "First Last (Section S, Lot L)".
    pub fn prepare_label(&mut self) {
        if self.searchable_label.as_deref().map_or(true, str::is_empty) {
            self.searchable_label = Some(format!(
                "{} {} (Section {}, Lot {})",
                self.first_name(),
                self.last_name(),
                self.section(),
                self.lot()
            ));
        }
        if self.searchable_label_lower.as_deref().map_or(true, str::is_empty) {
            self.searchable_label_lower =
                Some(normalize(self.searchable_label.as_deref().unwrap_or("")));
        }
    }
}

/// Deduplication identity of a record.
///
/// Numeric ids and string keys never compare equal, even when they print the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKey {
    Id(i64),
    Key(String),
    Composite(String),
}

/// Positions into the record slice an index was built from, in insertion order.
pub type PostingList = Vec<usize>;

/// Inverted indexes over one record collection.
///
/// Every map goes from a normalized key to the positions of the records that
/// carry it. Positions are only meaningful for the slice passed to
/// [`crate::build_search_index`]; rebuild whenever that collection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    /// Normalized section token -> records in that section.
    pub by_section: HashMap<String, PostingList>,
    /// Normalized lot token -> records on that lot.
    pub by_lot: HashMap<String, PostingList>,
    /// 4-digit year -> records born or died that year.
    pub by_year: HashMap<String, PostingList>,
    /// Label token -> records whose label contains it.
    pub by_token: HashMap<String, PostingList>,
    /// Tour-name token -> records on a tour whose name contains it.
    pub by_tour_token: HashMap<String, PostingList>,
    /// Number of records the index was built from.
    pub record_count: usize,
}

/// Key counts for each map of a [`SearchIndex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub sections: usize,
    pub lots: usize,
    pub years: usize,
    pub tokens: usize,
    pub tour_tokens: usize,
}

impl SearchIndex {
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.record_count,
            sections: self.by_section.len(),
            lots: self.by_lot.len(),
            years: self.by_year.len(),
            tokens: self.by_token.len(),
            tour_tokens: self.by_tour_token.len(),
        }
    }
}
