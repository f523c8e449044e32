//! Editorial markup in translations.
//!
//! Translators add words that are not in the text between parentheses
//! (`16 labor-troops (at) 2 ban`), and mark restored text with square
//! brackets (`[the] king`). Asides are dropped, restorations are kept.
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;

lazy_static! {
    static ref ASIDE: Regex = Regex::new(r"\([^)]*\)").unwrap();
}

/// Removes parenthesised asides, each one separately.
#[derive(Default)]
pub struct RemoveAsides;

impl Transform<String> for RemoveAsides {
    fn transform_own(&self, line: String) -> String {
        if !line.contains('(') {
            return line;
        }
        ASIDE.replace_all(&line, "").into_owned()
    }
}

/// Writes `...` as a single `…` and removes square brackets, keeping their content.
#[derive(Default)]
pub struct Brackets;

impl Transform<String> for Brackets {
    fn transform_own(&self, line: String) -> String {
        line.replace("...", "…").replace(['[', ']'], "")
    }
}
