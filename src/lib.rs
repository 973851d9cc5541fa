// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Burial-record search for a cemetery map.
//!
//! Records come from the cemetery's GeoJSON export. A search box query is
//! classified into one intent (year, section, lot, tour, bare number, or free
//! text) and resolved through prebuilt inverted indexes, falling back to a
//! linear scan whenever the index has nothing for the query's key.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ dataset.rs  │────▶│   index.rs   │────▶│  search/     │
//! │ (GeoJSON ─▶ │     │ (build_search│     │ (smart_search│
//! │  records)   │     │  _index)     │     │  + dedup)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌──────────────────────────────────────────────────────┐
//! │ types.rs · utils.rs · tours.rs · query.rs            │
//! │ (BurialRecord, tokenize, TourNames, classify)        │
//! └──────────────────────────────────────────────────────┘
//!
//! deep_link.rs  ── URL query string ─▶ initial view state
//! config.rs     ── JSON config ─▶ dataset path, limit, tours
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use plotfinder::{build_search_index, smart_search, Dataset, SearchOptions, TourCatalog};
//!
//! let dataset = Dataset::load("Geo_Burials.json")?;
//! let tours = TourCatalog::default();
//! let index = build_search_index(dataset.records(), Some(&tours));
//!
//! let options = SearchOptions::new().with_index(&index).with_tours(&tours);
//! for record in smart_search(dataset.records(), "section 12", &options) {
//!     println!("{}", record.display_name());
//! }
//! ```

pub mod config;
pub mod constants;
pub mod dataset;
pub mod deep_link;
mod index;
mod query;
pub mod search;
#[doc(hidden)]
pub mod testing;
mod tours;
mod types;
mod utils;

pub use config::{Config, ConfigError};
pub use dataset::{Dataset, DatasetError, SectionFilter};
pub use deep_link::{parse_deep_link_state, DeepLinkState, View};
pub use index::{build_search_index, IndexCache};
pub use query::{classify, QueryIntent};
pub use search::dedup::{dedupe, ResultMerger};
pub use search::{smart_search, smart_search_limited, SearchOptions};
pub use tours::{TourCatalog, TourInfo, TourNames};
pub use types::{BurialRecord, IndexStats, PostingList, RecordKey, SearchIndex};
pub use utils::{compare_sections, extract_years, normalize, sort_section_values, tokenize};
