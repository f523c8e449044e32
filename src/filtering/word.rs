//! Word-level filtering.
use super::Filter;

/// Substrings marking an uncertain or broken reading.
///
/// Matched case-insensitively against prepared words.
pub const UNCERTAIN_MARKERS: [&str; 12] = [
    "_", "...", "line", "(x", "x)", ".x", " x", "xbr", "-x", "ṭ", "ṣ", "missing",
];

/// Keeps words that can be confidently normalized.
///
/// A word is rejected if it contains whitespace or one of [UNCERTAIN_MARKERS].
/// Rejecting words containing upper-case letters is possible but disabled by default,
/// since it discards too many signs written in capitals (sign names, readings in doubt).
pub struct Legible {
    reject_mixed_case: bool,
}

impl Legible {
    /// Also reject words that contain upper-case letters.
    pub fn with_mixed_case_rejection(reject_mixed_case: bool) -> Self {
        Self { reject_mixed_case }
    }

    /// Get a reference to the mixed case rule.
    pub fn reject_mixed_case(&self) -> &bool {
        &self.reject_mixed_case
    }
}

impl Default for Legible {
    fn default() -> Self {
        Self {
            reject_mixed_case: false,
        }
    }
}

impl Filter<&str> for Legible {
    fn detect(&self, word: &str) -> bool {
        if word.chars().any(char::is_whitespace) {
            return false;
        }

        let lowercase = word.to_lowercase();
        if UNCERTAIN_MARKERS.iter().any(|m| lowercase.contains(m)) {
            return false;
        }

        !(self.reject_mixed_case && lowercase != word)
    }
}
