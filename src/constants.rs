// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared constants for indexing, search and the CLI.

/// Section value that always sorts after every other section.
///
/// The cemetery's "100A" block sits outside the numbered grid, so the
/// section picker lists it last rather than between "100" and "101".
pub const TRAILING_SECTION: &str = "100A";

/// Tokens shorter than this are not indexed and are ignored in queries.
pub const MIN_TOKEN_LEN: usize = 2;

/// Number of digits in an indexed year.
pub const YEAR_DIGITS: usize = 4;

/// Default cap on results shown by the CLI (the map's autocomplete shows 100).
pub const DEFAULT_RESULT_LIMIT: usize = 100;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "PLOTFINDER_CONFIG";

/// Deep-link parameter names.
pub const PARAM_SECTION: &str = "section";
pub const PARAM_VIEW: &str = "view";
pub const PARAM_QUERY: &str = "q";
pub const PARAM_TOUR: &str = "tour";
