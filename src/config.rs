// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration file handling.
//!
//! A config is a small JSON document:
//!
//! ```json
//! {
//!   "dataset": "data/Geo_Burials.json",
//!   "limit": 50,
//!   "tours": [{"key": "CivilWar", "name": "Civil War Tour 2020", "color": "#a0a0a0"}]
//! }
//! ```
//!
//! Every field is optional. The file is located by `--config`, then by the
//! `PLOTFINDER_CONFIG` environment variable; with neither, defaults apply.

use crate::constants::{CONFIG_ENV_VAR, DEFAULT_RESULT_LIMIT};
use crate::tours::{TourCatalog, TourInfo};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    /// `limit` must be at least 1.
    ZeroLimit { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
            ConfigError::ZeroLimit { path } => {
                write!(f, "invalid config {}: limit must be at least 1", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::ZeroLimit { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// GeoJSON file used when a command is not given one.
    pub dataset: Option<PathBuf>,
    /// Result cap for `search`.
    pub limit: usize,
    /// Replaces the built-in tour table when present.
    pub tours: Option<Vec<TourInfo>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: None,
            limit: DEFAULT_RESULT_LIMIT,
            tours: None,
        }
    }
}

impl Config {
    /// Load a config file.
    ///
    /// A relative `dataset` path is resolved against the config file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.limit == 0 {
            return Err(ConfigError::ZeroLimit {
                path: path.to_path_buf(),
            });
        }

        if let (Some(dataset), Some(dir)) = (&config.dataset, path.parent()) {
            if dataset.is_relative() {
                config.dataset = Some(dir.join(dataset));
            }
        }

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Find and load the active config: `explicit`, then the environment
    /// variable, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    /// Tour table for this config.
    pub fn tour_catalog(&self) -> TourCatalog {
        match &self.tours {
            Some(tours) => TourCatalog::new(tours.clone()),
            None => TourCatalog::default(),
        }
    }
}
