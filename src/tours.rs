// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tour tags and their display names.
//!
//! Records carry a short tour tag (`title` in the dataset, e.g. "CivilWar").
//! Search only ever needs the tag's display name, supplied through the
//! [`TourNames`] trait so callers can plug in a catalog or a closure.

use crate::types::BurialRecord;
use serde::{Deserialize, Serialize};

/// Resolves a record to the display name of its tour ("" when it has none).
///
/// Implementations must be pure: the same record always yields the same name,
/// and the name used at index time must match the one used at query time.
pub trait TourNames {
    fn tour_name(&self, record: &BurialRecord) -> String;
}

impl<F> TourNames for F
where
    F: Fn(&BurialRecord) -> String,
{
    fn tour_name(&self, record: &BurialRecord) -> String {
        self(record)
    }
}

/// One named tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourInfo {
    /// Tag stored on records.
    pub key: String,
    /// Display name, e.g. "Civil War Tour 2020".
    pub name: String,
    /// Marker color as a CSS hex string.
    #[serde(default)]
    pub color: String,
}

/// Ordered tag -> tour table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourCatalog {
    tours: Vec<TourInfo>,
}

const DEFAULT_TOURS: &[(&str, &str, &str)] = &[
    ("Lot7", "Soldier's Lot (Section 75, Lot 7)", "#7587ff"),
    ("Sec49", "Section 49", "#75ff87"),
    ("Notable", "Notables Tour 2020", "#ff7700"),
    ("Indep", "Independence Tour 2020", "#7700ff"),
    ("Afr", "African American Tour 2020", "#eedd00"),
    ("Art", "Artists Tour 2020", "#ff4277"),
    ("Groups", "Associations, Societies, & Groups Tour 2020", "#86cece"),
    ("AuthPub", "Authors & Publishers Tour 2020", "#996038"),
    ("Business", "Business & Finance Tour 2020", "#558e76"),
    ("CivilWar", "Civil War Tour 2020", "#a0a0a0"),
    ("Pillars", "Pillars of Society Tour 2020", "#d10008"),
    ("MayorsOfAlbany", "Mayors of Albany", "#ff00dd"),
    ("GAR", "Grand Army of the Republic", "#000080"),
];

impl Default for TourCatalog {
    /// The cemetery's standing tours plus the 2020 tour program.
    fn default() -> Self {
        Self::new(
            DEFAULT_TOURS
                .iter()
                .map(|(key, name, color)| TourInfo {
                    key: (*key).to_string(),
                    name: (*name).to_string(),
                    color: (*color).to_string(),
                })
                .collect(),
        )
    }
}

impl TourCatalog {
    pub fn new(tours: Vec<TourInfo>) -> Self {
        Self { tours }
    }

    /// Look up a tour by tag. Tags are case-sensitive, as stored in the data.
    pub fn get(&self, key: &str) -> Option<&TourInfo> {
        self.tours.iter().find(|tour| tour.key == key)
    }

    /// Display names in catalog order, for deep-link tour resolution.
    pub fn names(&self) -> Vec<&str> {
        self.tours.iter().map(|tour| tour.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TourInfo> {
        self.tours.iter()
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}

impl TourNames for TourCatalog {
    fn tour_name(&self, record: &BurialRecord) -> String {
        record
            .tour_key
            .as_deref()
            .and_then(|key| self.get(key))
            .map(|tour| tour.name.clone())
            .unwrap_or_default()
    }
}
