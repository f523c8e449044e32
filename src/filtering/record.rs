//! File-level filtering.
//!
//! Raw ATF files fetched from catalogs are often empty shells: a header and
//! some metadata, but no text lines. These are not worth parsing.
use serde::Serialize;

use super::Filter;

/// Markers of a first text line (`1.` or `1'.` for broken objects).
const FIRST_LINE_MARKERS: [&str; 2] = ["1.", "1'."];

/// Marker of a translation, any language.
const TRANSLATION_MARKER: &str = "#tr.";

/// ATF status on a simple check.
///
/// Note that this is not an ATF format checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AtfStatus {
    /// contains at least one line of text
    Good,
    /// no lines of text
    Poor,
}

impl AtfStatus {
    pub fn of(atf: &str) -> Self {
        if FIRST_LINE_MARKERS.iter().any(|m| atf.contains(m)) {
            AtfStatus::Good
        } else {
            AtfStatus::Poor
        }
    }
}

/// true if the ATF carries at least one translation line.
pub fn is_translated(atf: &str) -> bool {
    atf.contains(TRANSLATION_MARKER)
}

/// Keeps ATF files having [AtfStatus::Good].
#[derive(Default)]
pub struct GoodAtf;

impl Filter<&str> for GoodAtf {
    fn detect(&self, atf: &str) -> bool {
        AtfStatus::of(atf) == AtfStatus::Good
    }
}
