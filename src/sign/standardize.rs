//! Word-level preparation.
//!
//! Everything that happens to a transliterated word before it is split into
//! signs: editorial markup removal, character standardization and
//! determinative stripping.
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Character standardization table, applied in order.
///
/// `+` joins signs in some editions and is treated as a sign boundary.
pub const STANDARDIZATION: [(&str, &str); 23] = [
    ("š", "c"),
    ("ŋ", "j"),
    ("₀", "0"),
    ("₁", "1"),
    ("₂", "2"),
    ("₃", "3"),
    ("₄", "4"),
    ("₅", "5"),
    ("₆", "6"),
    ("₇", "7"),
    ("₈", "8"),
    ("₉", "9"),
    ("+", "-"),
    ("Š", "C"),
    ("Ŋ", "J"),
    ("sz", "c"),
    ("SZ", "C"),
    ("·", ""),
    ("°", ""),
    ("#", ""),
    ("!", ""),
    ("?", ""),
    ("source: ", "source:"),
];

lazy_static! {
    static ref EXTRA_SIGN: Regex = Regex::new(r"[ -]?<<.+?>>[ -]?").unwrap();
    static ref EDITORIAL: Regex = Regex::new(r"\[|\]|\{\?\}|\{!\}|\\|/|<|>").unwrap();
    static ref TIMES: Regex = Regex::new(r"(\w)x(\w)").unwrap();
    static ref DETERMINATIVE: Regex = Regex::new(r"\{.*?\}").unwrap();
}

/// Drop `<<…>>` insertions.
///
/// A removed insertion sitting between two signs leaves a single hyphen behind.
pub fn remove_extra_signs(word: &str) -> String {
    if !word.contains("<<") {
        return word.to_string();
    }
    EXTRA_SIGN
        .replace_all(word, |caps: &Captures| {
            let m = &caps[0];
            if m.starts_with('-') && m.ends_with('-') {
                "-"
            } else {
                ""
            }
        })
        .into_owned()
}

/// Apply [STANDARDIZATION], then write multiplications (`AxB`) as `A×B`.
///
/// `x` only becomes `×` between two word characters, leaving index markers
/// like `gax(KA)` or the unknown sign `x` untouched.
pub fn standardize(word: &str) -> String {
    let mut word = word.to_string();
    for (from, to) in STANDARDIZATION.iter() {
        if word.contains(from) {
            word = word.replace(from, to);
        }
    }
    TIMES.replace_all(&word, "${1}×${2}").into_owned()
}

/// Remove determinatives (`{d}`, `{gesz}`, …).
pub fn remove_determinatives(word: &str) -> String {
    DETERMINATIVE.replace_all(word, "").into_owned()
}

/// Full word preparation, in order: trimming, `<<…>>` removal, editorial
/// brackets, standardization and determinatives.
pub fn prepare_word(word: &str) -> String {
    let word = remove_extra_signs(word.trim_matches(' '));
    let word = EDITORIAL.replace_all(&word, "");
    let word = standardize(&word);
    remove_determinatives(&word)
}

/// Rewrite hyphens inside parentheses to `=`, so that splitting the word on
/// `-` keeps alternate readings such as `(ninda-gur)` in one piece.
pub fn protect_alternate_readings(word: &str) -> String {
    let mut depth = 0usize;
    word.chars()
        .map(|c| match c {
            '(' => {
                depth += 1;
                c
            }
            ')' => {
                depth = depth.saturating_sub(1);
                c
            }
            '-' if depth > 0 => '=',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diacritics() {
        assert_eq!(standardize("šu"), "cu");
        assert_eq!(standardize("ŋiš"), "jic");
        assert_eq!(standardize("SZU"), "CU");
        assert_eq!(standardize("szu"), "cu");
        assert_eq!(standardize("ku₃"), "ku3");
    }

    #[test]
    fn markers() {
        assert_eq!(standardize("lugal#"), "lugal");
        assert_eq!(standardize("e2!?"), "e2");
        assert_eq!(standardize("a·b°"), "ab");
    }

    #[test]
    fn times() {
        assert_eq!(standardize("KAxA"), "KA×A");
        assert_eq!(standardize("gax(KA)"), "gax(KA)");
        assert_eq!(standardize("x"), "x");
    }

    #[test]
    fn plus_is_a_boundary() {
        assert_eq!(standardize("a+b"), "a-b");
    }

    #[test]
    fn determinatives() {
        assert_eq!(remove_determinatives("{d}en-lil2"), "en-lil2");
        assert_eq!(remove_determinatives("{gesz}tukul{ki}"), "tukul");
    }

    #[test]
    fn extra_signs() {
        assert_eq!(remove_extra_signs("a-<<b>>-c"), "a-c");
        assert_eq!(remove_extra_signs("a-<<b>>"), "a");
        assert_eq!(remove_extra_signs("<<b>>"), "");
    }

    #[test]
    fn prepare() {
        assert_eq!(prepare_word("[lugal]-e"), "lugal-e");
        assert_eq!(prepare_word("{d}šul-gi{?}"), "cul-gi");
        assert_eq!(prepare_word("<a>-ba/"), "a-ba");
        assert_eq!(prepare_word("ku(source: x)"), "ku(source:x)");
    }

    #[test]
    fn alternate_readings() {
        assert_eq!(
            protect_alternate_readings("sze-gur(ninda-gur)-ra"),
            "sze-gur(ninda=gur)-ra"
        );
        assert_eq!(protect_alternate_readings("a-b"), "a-b");
    }
}
