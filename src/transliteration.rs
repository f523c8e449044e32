//! Transliteration tokenizer.
//!
//! Turns the transliteration of one ATF line into its normalization: words
//! are split on whitespace, signs on hyphens, and the signs of a word are
//! glued back together (`lugal-la` → `lugala`).
//!
//! Two normalizations are produced side by side: a plain one and one where
//! sign indices are encoded into the signs (see [crate::sign::encoding]).
use std::borrow::Cow;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Deserialize;

use crate::filtering::{Filter, Legible};
use crate::placeholders::{self, NUMERAL};
use crate::sign::standardize::{prepare_word, protect_alternate_readings};
use crate::sign::SignToken;

/// Normalization of a defective word or line.
pub const DEFECTIVE: &str = "X";

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"([ -]?)\(\$.*?\$\)([ -]?)").unwrap();
}

/// What to do with a defective word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectPolicy {
    /// the word is replaced by [DEFECTIVE]
    Word,
    /// the whole line is replaced by [DEFECTIVE]
    Line,
}

impl Default for DefectPolicy {
    fn default() -> Self {
        DefectPolicy::Word
    }
}

impl std::str::FromStr for DefectPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(DefectPolicy::Word),
            "line" => Ok(DefectPolicy::Line),
            other => Err(format!("unknown defect policy {:?} (word, line)", other)),
        }
    }
}

/// Tokenizer options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransliterationOptions {
    /// replace numeral signs with [NUMERAL]
    pub numeral_placeholders: bool,
    /// remove `($ … $)` comments before tokenizing
    pub strip_comments: bool,
    /// consider words containing upper-case letters defective
    pub reject_mixed_case: bool,
    pub defect_policy: DefectPolicy,
}

impl Default for TransliterationOptions {
    fn default() -> Self {
        Self {
            numeral_placeholders: true,
            strip_comments: true,
            reject_mixed_case: false,
            defect_policy: DefectPolicy::default(),
        }
    }
}

/// Plain and index-encoded normalizations of the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalization {
    pub plain: String,
    pub encoded: String,
}

impl Normalization {
    fn defective() -> Self {
        Self {
            plain: DEFECTIVE.to_string(),
            encoded: DEFECTIVE.to_string(),
        }
    }

    fn placeholder() -> Self {
        Self {
            plain: NUMERAL.to_string(),
            encoded: NUMERAL.to_string(),
        }
    }
}

/// Outcome of a word normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Word {
    Normalized(Normalization),
    Defective,
    /// nothing left once markup is removed (e.g. a lone determinative)
    Empty,
}

/// A unit of a normalized word.
enum Piece {
    Sign(SignToken),
    Numeral,
}

/// Remove `($ … $)` comments and their adjoining separators.
///
/// The comment is replaced by a single separator, so that surrounding words
/// or signs are not fused.
pub fn strip_comments(line: &str) -> Cow<'_, str> {
    if !line.contains("($") {
        return Cow::Borrowed(line);
    }
    COMMENT.replace_all(line, |caps: &Captures| {
        let separators = format!("{}{}", &caps[1], &caps[2]);
        if separators.contains(' ') {
            " "
        } else if separators.contains('-') {
            "-"
        } else {
            ""
        }
    })
}

/// Transliteration tokenizer.
pub struct Transliteration {
    options: TransliterationOptions,
    filter: Legible,
}

impl Default for Transliteration {
    fn default() -> Self {
        Self::new(TransliterationOptions::default())
    }
}

impl Transliteration {
    pub fn new(options: TransliterationOptions) -> Self {
        let filter = Legible::with_mixed_case_rejection(options.reject_mixed_case);
        Self { options, filter }
    }

    /// Get a reference to the tokenizer's options.
    pub fn options(&self) -> &TransliterationOptions {
        &self.options
    }

    /// Normalize the transliteration of a line.
    ///
    /// Returns [None] if nothing could be extracted from the line.
    pub fn normalize_line(&self, line: &str) -> Option<Normalization> {
        let line = if self.options.strip_comments {
            strip_comments(line)
        } else {
            Cow::Borrowed(line)
        };

        let mut words: Vec<Normalization> = Vec::new();
        for word in line.split_whitespace() {
            let normalization = match self.normalize_word(word) {
                Word::Normalized(n) => n,
                Word::Empty => continue,
                Word::Defective => match self.options.defect_policy {
                    DefectPolicy::Word => Normalization::defective(),
                    DefectPolicy::Line => return Some(Normalization::defective()),
                },
            };

            // a numeral word followed by a word made of a numeral (`2 NUMBkam`)
            // is the same number.
            let same_number = matches!(
                words.last(),
                Some(last) if last.plain == NUMERAL
                    && placeholders::contains_numeral(&normalization.plain)
            );
            if same_number {
                words.pop();
            }
            words.push(normalization);
        }

        if words.is_empty() {
            return None;
        }

        Some(Normalization {
            plain: words.iter().map(|w| w.plain.as_str()).join(" "),
            encoded: words.iter().map(|w| w.encoded.as_str()).join(" "),
        })
    }

    /// Normalize a single (whitespace-free) transliterated word.
    pub fn normalize_word(&self, word: &str) -> Word {
        let prepared = prepare_word(word);
        if !self.filter.detect(prepared.as_str()) {
            return Word::Defective;
        }

        let protected = protect_alternate_readings(&prepared);
        let mut pieces = Vec::new();
        for segment in protected.split('-').filter(|s| !s.is_empty()) {
            match SignToken::parse(segment) {
                Some(sign) => pieces.push(self.piece(sign)),
                None => return Word::Defective,
            }
        }

        if pieces.is_empty() {
            return Word::Empty;
        }
        Word::Normalized(Self::concat(pieces))
    }

    fn piece(&self, sign: SignToken) -> Piece {
        if self.options.numeral_placeholders && sign.is_numeral() {
            Piece::Numeral
        } else {
            Piece::Sign(sign)
        }
    }

    /// Glue pieces together.
    ///
    /// When a sign starts with the character the previous sign ended with,
    /// that character is written once (`lugal-la` → `lugala`).
    /// Placeholders never take part in this, and consecutive ones collapse.
    fn concat(pieces: Vec<Piece>) -> Normalization {
        let mut out = Normalization {
            plain: String::new(),
            encoded: String::new(),
        };
        let mut previous_is_sign = false;
        let mut previous_is_numeral = false;

        for piece in pieces {
            match piece {
                Piece::Numeral => {
                    if !previous_is_numeral {
                        let p = Normalization::placeholder();
                        out.plain.push_str(&p.plain);
                        out.encoded.push_str(&p.encoded);
                    }
                    previous_is_sign = false;
                    previous_is_numeral = true;
                }
                Piece::Sign(sign) => {
                    let repeated = previous_is_sign
                        && out.plain.chars().next_back() == sign.raw_value().chars().next();
                    let skip = usize::from(repeated);
                    out.plain.extend(sign.raw_value().chars().skip(skip));
                    out.encoded.extend(sign.encoded_value().chars().skip(skip));
                    previous_is_sign = true;
                    previous_is_numeral = false;
                }
            }
        }
        out
    }
}
