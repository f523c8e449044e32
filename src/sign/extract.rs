//! Sign sub-component extraction.
//!
//! Each step takes the residual of the previous one and returns what it found
//! as a [PartialSign] together with the new residual. Steps are applied by
//! [super::SignToken::parse] in this order:
//!
//! 1. [x_index]: `gax(KA)`, `gax`
//! 2. [alternate_reading]: `sze(GAN2)`, `(disz)`
//! 3. [source_citation]: `ku(source:KU)`
//! 4. [numeric_index]: `ku3`
use lazy_static::lazy_static;
use regex::Regex;

/// Sign index, distinguishing homophonic signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignIndex {
    #[default]
    None,
    /// Unknown index (`ₓ`).
    Wildcard,
    Number(u32),
}

/// What an extraction step found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialSign {
    pub index: SignIndex,
    pub emendation: Option<String>,
    pub value_of: Option<String>,
}

impl PartialSign {
    /// Fold `other` into `self`. Fields set by `other` win.
    pub fn merge(mut self, other: PartialSign) -> Self {
        if other.index != SignIndex::None {
            self.index = other.index;
        }
        if other.emendation.is_some() {
            self.emendation = other.emendation;
        }
        if other.value_of.is_some() {
            self.value_of = other.value_of;
        }
        self
    }
}

pub const X_INDEX_MARK: char = 'ₓ';

lazy_static! {
    static ref X_INDEX: Regex = Regex::new(r"(\w)x").unwrap();
    static ref X_SIGN: Regex = Regex::new(r"ₓ\(.+\)").unwrap();
    static ref PARENTHESIZED: Regex = Regex::new(r"\(([^()]*)\)").unwrap();
    static ref SOURCE: Regex = Regex::new(r"\(source:([^)]+)\)").unwrap();
    static ref INDEX: Regex = Regex::new(r"^([^\d]+)(\d+)").unwrap();
}

/// Inner text of a bracketed block, with split alternate readings restored.
fn inner(block: &str) -> String {
    block
        .trim_matches(|c| c == X_INDEX_MARK || c == '(' || c == ')')
        .replace('=', "-")
}

/// X-index marker: `gax(KA)` reads as "some `ga` sign, the one written KA".
pub fn x_index(segment: &str) -> (PartialSign, String) {
    let marked = X_INDEX.replace_all(segment, "${1}ₓ");
    if !marked.contains(X_INDEX_MARK) {
        return (PartialSign::default(), segment.to_string());
    }

    let mut partial = PartialSign {
        index: SignIndex::Wildcard,
        ..Default::default()
    };

    let residual = match X_SIGN.find(&marked) {
        Some(m) => {
            partial.value_of = Some(inner(m.as_str()));
            format!("{}{}", &marked[..m.start()], &marked[m.end()..])
        }
        None => marked.replace(X_INDEX_MARK, ""),
    };
    (partial, residual)
}

/// Parenthesised alternate reading.
///
/// A fully parenthesised segment (`(disz)`) just loses its parentheses.
/// Source citations are left to [source_citation].
pub fn alternate_reading(segment: &str) -> (PartialSign, String) {
    let found = PARENTHESIZED
        .captures_iter(segment)
        .find(|caps| !caps[1].starts_with("source:"));

    let caps = match found {
        Some(caps) => caps,
        None => return (PartialSign::default(), segment.to_string()),
    };
    let (block, reading) = match (caps.get(0), caps.get(1)) {
        (Some(block), Some(reading)) => (block, reading.as_str()),
        _ => return (PartialSign::default(), segment.to_string()),
    };

    if block.start() == 0 && block.end() == segment.len() {
        return (PartialSign::default(), reading.replace('=', "-"));
    }

    let partial = PartialSign {
        value_of: Some(inner(block.as_str())),
        ..Default::default()
    };
    let residual = format!("{}{}", &segment[..block.start()], &segment[block.end()..]);
    (partial, residual)
}

/// Editorial source citation, `(source:…)`.
pub fn source_citation(segment: &str) -> (PartialSign, String) {
    match SOURCE.captures(segment) {
        Some(caps) => {
            let emendation = caps[1].replace('=', "-");
            let partial = PartialSign {
                emendation: Some(emendation),
                ..Default::default()
            };
            (partial, SOURCE.replace(segment, "").into_owned())
        }
        None => (PartialSign::default(), segment.to_string()),
    }
}

/// Trailing numeric index, `ku3` → (`ku`, 3).
///
/// Segments starting with a digit (numerals) carry no index.
pub fn numeric_index(segment: &str) -> (PartialSign, String) {
    let caps = match INDEX.captures(segment) {
        Some(caps) => caps,
        None => return (PartialSign::default(), segment.to_string()),
    };
    match caps[2].parse::<u32>() {
        Ok(n) => {
            let partial = PartialSign {
                index: SignIndex::Number(n),
                ..Default::default()
            };
            (partial, caps[1].to_string())
        }
        Err(_) => (PartialSign::default(), segment.to_string()),
    }
}
