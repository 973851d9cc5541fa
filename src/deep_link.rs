// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deep-link decoding.
//!
//! Shared map links carry the initial view in the query string:
//!
//! ```text
//! ?view=burials&q=John%20Doe&section=12&tour=civil+war
//! ```
//!
//! Only `section`, `view`, `q` and `tour` are read; unknown parameters are
//! ignored so older builds keep working with newer links. Decoding never
//! fails: a malformed string degrades to empty fields.

use crate::constants::{PARAM_QUERY, PARAM_SECTION, PARAM_TOUR, PARAM_VIEW};
use serde::Serialize;
use std::borrow::Cow;

/// Which side panel a link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Burials,
    Tours,
    /// No panel, including any unrecognized `view` value.
    None,
}

impl View {
    /// Closed mapping: anything but the exact lower-case names is `None`.
    pub fn from_param(value: &str) -> Self {
        match value {
            "burials" => View::Burials,
            "tours" => View::Tours,
            _ => View::None,
        }
    }
}

/// Initial UI state decoded from a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkState {
    /// Section filter, trimmed but otherwise unvalidated.
    pub section: String,
    /// Search box text, trimmed.
    pub query: String,
    /// Lower-cased `view` parameter as given.
    pub view: String,
    /// Lower-cased `tour` parameter as given.
    pub raw_tour: String,
    /// First known tour whose name contains `raw_tour`.
    pub selected_tour_name: Option<String>,
    pub show_burials_view: bool,
    pub show_tours_view: bool,
}

impl DeepLinkState {
    pub fn view_kind(&self) -> View {
        View::from_param(&self.view)
    }
}

/// Decode one form-urlencoded component: `+` is a space, `%XX` is a byte.
///
/// Invalid escapes stay literal and invalid UTF-8 is replaced, so this cannot fail.
fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Split a query string into decoded `(key, value)` pairs, in order.
fn query_pairs(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    raw.strip_prefix('?')
        .unwrap_or(raw)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
}

/// Parse `raw_query` (with or without a leading `?`; empty means absent).
///
/// `tour_names` are the known tour display names in preference order. The
/// selected tour is the first one whose lower-cased name contains the
/// lower-cased `tour` parameter, not the closest match.
pub fn parse_deep_link_state<S: AsRef<str>>(raw_query: &str, tour_names: &[S]) -> DeepLinkState {
    let mut section = None;
    let mut view = None;
    let mut query = None;
    let mut tour = None;

    // First occurrence of a repeated key wins
    for (key, value) in query_pairs(raw_query) {
        let slot = match key.as_str() {
            PARAM_SECTION => &mut section,
            PARAM_VIEW => &mut view,
            PARAM_QUERY => &mut query,
            PARAM_TOUR => &mut tour,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    let clean = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();
    let section = clean(section);
    let query = clean(query);
    let view = clean(view).to_lowercase();
    let raw_tour = clean(tour).to_lowercase();

    let selected_tour_name = if raw_tour.is_empty() {
        None
    } else {
        tour_names
            .iter()
            .map(|name| name.as_ref())
            .find(|name| name.to_lowercase().contains(&raw_tour))
            .map(str::to_string)
    };

    let kind = View::from_param(&view);
    tracing::debug!(view = ?kind, tour = ?selected_tour_name, "decoded deep link");

    DeepLinkState {
        section,
        query,
        raw_tour,
        selected_tour_name,
        show_burials_view: kind == View::Burials,
        show_tours_view: kind == View::Tours,
        view,
    }
}
