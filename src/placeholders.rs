//! Placeholder tokens.
//!
//! Placeholders stand in for a whole class of values (numerals, ordinals)
//! so that statistical aligners see one token instead of many sparse ones.
//! They are used structurally by the sign normalizer (numeric signs) and
//! lexically by the translation normalizer (numerals in free text).
use std::collections::HashSet;

use lazy_static::lazy_static;

/// Numeral placeholder.
pub const NUMERAL: &str = "NUMB";

/// Ordinal placeholder.
pub const ORDINAL: &str = "ordNUMB";

lazy_static! {
    /// Every placeholder that can appear in normalized output.
    pub static ref PLACEHOLDERS: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert(NUMERAL);
        m.insert(ORDINAL);
        m
    };
}

/// Placeholder kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Numeral,
    Ordinal,
}

impl Placeholder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placeholder::Numeral => NUMERAL,
            Placeholder::Ordinal => ORDINAL,
        }
    }

    /// Get the placeholder kind of a token, if it is one.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            NUMERAL => Some(Placeholder::Numeral),
            ORDINAL => Some(Placeholder::Ordinal),
            _ => None,
        }
    }
}

/// true if `token` is exactly one of [PLACEHOLDERS].
pub fn is_placeholder(token: &str) -> bool {
    PLACEHOLDERS.contains(token)
}

/// true if `token` contains the numeral placeholder (e.g. `NUMBkam`).
pub fn contains_numeral(token: &str) -> bool {
    token.contains(NUMERAL)
}
