/*! Sign normalization

A sign is one hyphen-delimited unit of a transliterated word (`ku3` in
`ku3-babbar`). Parsing a sign strips its sub-components (index, alternate
reading, source citation) and encodes a numeric index into the sign value
(see [encoding]).

Word-level preparation (diacritics, editorial markup, determinatives) lives
in [standardize] and happens before a word is split into signs.
!*/
pub mod encoding;
pub mod extract;
pub mod standardize;

use log::{debug, warn};

pub use extract::{PartialSign, SignIndex};

/// A parsed sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignToken {
    raw_value: String,
    index: SignIndex,
    emendation: Option<String>,
    value_of: Option<String>,
    encoded_value: String,
}

impl SignToken {
    /// Parse a single sign segment (containing no hyphen).
    ///
    /// Returns [None] if the sign is defective: an empty value, or a value still
    /// containing an unknown sign `x` once sub-components are removed.
    pub fn parse(segment: &str) -> Option<Self> {
        let (partial, residual) = extract::x_index(segment);
        let (reading, residual) = extract::alternate_reading(&residual);
        let (source, residual) = extract::source_citation(&residual);
        let (index, residual) = extract::numeric_index(&residual);

        let partial = partial.merge(reading).merge(source).merge(index);

        if residual.is_empty() {
            return None;
        }
        let lowercase = residual.to_lowercase();
        if lowercase.contains('x') && !lowercase.contains('×') {
            return None;
        }
        if residual.contains('(') {
            debug!("unbalanced parenthesis left in sign {:?}", segment);
        }

        let encoded_value = match partial.index {
            SignIndex::Number(n) => encoding::encode_index(&residual, n).unwrap_or_else(|| {
                warn!(
                    "cannot encode index {} of sign {:?} (value {:?})",
                    n, segment, residual
                );
                residual.clone()
            }),
            _ => residual.clone(),
        };

        Some(Self {
            raw_value: residual,
            index: partial.index,
            emendation: partial.emendation,
            value_of: partial.value_of,
            encoded_value,
        })
    }

    /// Get a reference to the sign's value.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Get the sign's index.
    pub fn index(&self) -> SignIndex {
        self.index
    }

    /// Get the sign's source citation, if any.
    pub fn emendation(&self) -> Option<&str> {
        self.emendation.as_deref()
    }

    /// Get the sign's alternate reading, if any.
    pub fn value_of(&self) -> Option<&str> {
        self.value_of.as_deref()
    }

    /// Get a reference to the sign's value with its index encoded.
    pub fn encoded_value(&self) -> &str {
        &self.encoded_value
    }

    /// true if the sign is a numeral (`2`, `1(disz)`).
    pub fn is_numeral(&self) -> bool {
        self.raw_value
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_digit())
    }
}
