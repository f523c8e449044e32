//! Numeral placeholders.
//!
//! Numbers are too sparse to be learnt by aligners: `16`, `2` and `1/3` are all
//! replaced by the numeral placeholder, `1st` or `20th` by the ordinal one.
//! A run of identical placeholders is written once, so that
//! `2 1/3 sila` and `5 sila` both read `NUMB sila`.
use itertools::Itertools;

use super::Transform;
use crate::placeholders::{self, Placeholder};

/// Symbols standing for an unknown or partial quantity.
pub const QUANTITY_MARKERS: [&str; 4] = ["Ø", "n", "+", "n+"];

/// Ordinal suffixes.
pub const ORDINAL_SUFFIXES: [&str; 4] = ["th", "st", "rd", "nd"];

/// Replaces numerals and ordinals by placeholders, tokenizing on whitespace.
#[derive(Default)]
pub struct NumeralPlaceholders;

/// true if `token` is an integer, optionally signed.
fn is_integer(token: &str) -> bool {
    let digits = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

impl NumeralPlaceholders {
    /// Get the placeholder a token is replaced with, if any.
    pub fn classify(token: &str) -> Option<Placeholder> {
        if let Some(placeholder) = Placeholder::from_token(token) {
            return Some(placeholder);
        }

        let cleaned = token.replace(['/', '…'], "");
        if is_integer(&cleaned) || QUANTITY_MARKERS.contains(&token) {
            return Some(Placeholder::Numeral);
        }

        let is_ordinal = ORDINAL_SUFFIXES.iter().any(|suffix| {
            token
                .strip_suffix(suffix)
                .map_or(false, |prefix| is_integer(prefix))
        });
        if is_ordinal {
            return Some(Placeholder::Ordinal);
        }
        None
    }
}

impl Transform<String> for NumeralPlaceholders {
    fn transform_own(&self, line: String) -> String {
        let mut tokens: Vec<&str> = Vec::new();
        for token in line.split_whitespace() {
            let token = Self::classify(token).map_or(token, |p| p.as_str());
            let repeated = placeholders::is_placeholder(token) && tokens.last() == Some(&token);
            if !repeated {
                tokens.push(token);
            }
        }
        tokens.into_iter().join(" ")
    }
}
