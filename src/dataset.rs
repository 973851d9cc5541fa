// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading burial records from the cemetery GeoJSON export.
//!
//! The export is a `FeatureCollection` whose features carry one burial each in
//! `properties`, with the grave marker as a point geometry. Loading prepares
//! every record for search (labels, option keys) and drops rows without a
//! name, which are survey artifacts rather than burials.

use crate::types::BurialRecord;
use crate::utils::compare_sections;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// Error type for dataset loading.
#[derive(Debug)]
pub enum DatasetError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The bytes are not valid JSON for a feature collection.
    Json(serde_json::Error),
    /// Valid JSON, but `type` is not "FeatureCollection".
    NotAFeatureCollection { found: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            DatasetError::Json(e) => write!(f, "invalid burial GeoJSON: {}", e),
            DatasetError::NotAFeatureCollection { found } => {
                write!(f, "expected a FeatureCollection, found type {:?}", found)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io { source, .. } => Some(source),
            DatasetError::Json(e) => Some(e),
            DatasetError::NotAFeatureCollection { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Json(e)
    }
}

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<BurialRecord>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
struct Geometry {
    #[serde(default)]
    coordinates: Value,
}

impl Geometry {
    /// `[lon, lat]` of a point geometry; anything else has no single position.
    fn point(&self) -> Option<(f64, f64)> {
        match self.coordinates.as_array()?.as_slice() {
            [lon, lat, ..] => Some((lon.as_f64()?, lat.as_f64()?)),
            _ => None,
        }
    }
}

/// Narrows a section listing to one lot or one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionFilter {
    Lot(String),
    Tier(String),
}

/// An immutable, search-ready record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<BurialRecord>,
    version: u64,
}

impl Dataset {
    /// Read and parse a GeoJSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_geojson(&bytes)?;
        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            version = dataset.version,
            "loaded burial dataset"
        );
        Ok(dataset)
    }

    /// Parse a GeoJSON `FeatureCollection`.
    ///
    /// The version token is the CRC32 of `bytes`, so identical files always
    /// share a version and any edit produces a new one.
    pub fn from_geojson(bytes: &[u8]) -> Result<Self, DatasetError> {
        let collection: FeatureCollection = serde_json::from_slice(bytes)?;
        if collection.kind != "FeatureCollection" {
            return Err(DatasetError::NotAFeatureCollection {
                found: collection.kind,
            });
        }

        let total = collection.features.len();
        let mut missing_properties = 0usize;
        let mut records = Vec::with_capacity(total);

        for feature in collection.features {
            let Some(mut record) = feature.properties else {
                missing_properties += 1;
                continue;
            };
            if !record.has_name() {
                continue;
            }
            if record.coordinates.is_none() {
                record.coordinates = feature.geometry.as_ref().and_then(Geometry::point);
            }
            if record.key.is_none() {
                record.key = Some(option_key(&record));
            }
            record.prepare_label();
            records.push(record);
        }

        if missing_properties > 0 {
            tracing::warn!(missing_properties, "skipped features without properties");
        }
        tracing::debug!(
            features = total,
            records = records.len(),
            "prepared burial records"
        );

        Ok(Self {
            records,
            version: u64::from(crc32fast::hash(bytes)),
        })
    }

    /// Wrap already-prepared records. The version is derived from their
    /// identities and labels.
    pub fn from_records(mut records: Vec<BurialRecord>) -> Self {
        let mut hasher = crc32fast::Hasher::new();
        for record in &mut records {
            record.prepare_label();
            hasher.update(format!("{:?}", record.identity_key()).as_bytes());
            hasher.update(record.label_lower().as_bytes());
            hasher.update(&[0]);
        }
        Self {
            version: u64::from(hasher.finalize()),
            records,
        }
    }

    pub fn records(&self) -> &[BurialRecord] {
        &self.records
    }

    /// Content version token, for [`crate::IndexCache`].
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-empty section values in display order ("100A" last).
    pub fn unique_sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = self
            .records
            .iter()
            .map(BurialRecord::section)
            .filter(|section| !section.is_empty())
            .collect();
        sections.sort_by(|a, b| compare_sections(a, b).then_with(|| a.cmp(b)));
        sections.dedup();
        sections
    }

    /// Records in `section`, optionally narrowed to one lot or tier.
    ///
    /// Matching is exact on the stored strings, as the section browser shows
    /// the raw values it was given.
    pub fn section_filter(&self, section: &str, filter: Option<&SectionFilter>) -> Vec<&BurialRecord> {
        self.records
            .iter()
            .filter(|record| record.section() == section)
            .filter(|record| match filter {
                None => true,
                Some(SectionFilter::Lot(lot)) => record.lot() == lot,
                Some(SectionFilter::Tier(tier)) => record.tier() == tier,
            })
            .collect()
    }
}

/// The map's option key: `{OBJECTID}_{First}_{Last}_Section{S}_Lot{L}`.
fn option_key(record: &BurialRecord) -> String {
    format!(
        "{}_{}_{}_Section{}_Lot{}",
        record.object_id.map(|id| id.to_string()).unwrap_or_default(),
        record.first_name(),
        record.last_name(),
        record.section(),
        record.lot()
    )
}
