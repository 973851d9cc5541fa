// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the plotfinder command-line interface.
//!
//! `search` runs a query against a GeoJSON export, `explain` shows how a query
//! is classified, `link` decodes a shared map link, `sections` lists section
//! values in picker order, and `inspect` summarizes a dataset and its index.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plotfinder",
    about = "Burial record search for cemetery maps",
    version
)]
pub struct Cli {
    /// Config file (JSON). Falls back to $PLOTFINDER_CONFIG
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search burial records
    Search {
        /// Search query, e.g. "section 12", "1862", "civil war tour"
        query: String,

        /// GeoJSON dataset (defaults to the config's `dataset`)
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Maximum number of results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Scan records linearly instead of using the index
        #[arg(long)]
        no_index: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a query is classified
    Explain {
        /// Search query
        query: String,

        /// Classify as if no tour names were available
        #[arg(long)]
        no_tours: bool,
    },

    /// Decode a map deep link
    Link {
        /// Full URL or bare query string, e.g. "?view=tours&tour=civil+war"
        url: String,

        /// Print the decoded state as JSON
        #[arg(long)]
        json: bool,
    },

    /// List section values in picker order
    Sections {
        /// GeoJSON dataset (defaults to the config's `dataset`)
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// List the records in one section instead
        #[arg(short, long)]
        section: Option<String>,

        /// With --section, only records on this lot
        #[arg(long, requires = "section", conflicts_with = "tier")]
        lot: Option<String>,

        /// With --section, only records in this tier
        #[arg(long, requires = "section")]
        tier: Option<String>,
    },

    /// Summarize a dataset and its search index
    Inspect {
        /// GeoJSON dataset (defaults to the config's `dataset`)
        dataset: Option<PathBuf>,
    },
}
