//! Reversible index encoding.
//!
//! A sign index is folded into the sign itself by replacing the rightmost
//! vowel with one synthetic codepoint: `(rank + 1) * 1000 + index`, `rank`
//! being the position of the vowel in [VOWELS]. `ku3` becomes `k` followed by
//! U+0FA3 (4003). The encoded sign keeps the length of the plain one and
//! contains no hyphen.
//!
//! Vowels are case folded: an indexed `KU3` decodes as `Ku3`.

/// Encodable vowels, in rank order.
pub const VOWELS: [char; 4] = ['a', 'e', 'i', 'u'];

/// Multiplier of the vowel rank.
pub const ENCODING_BASE: u32 = 1000;

/// Highest index that can be encoded.
pub const MAX_INDEX: u32 = ENCODING_BASE - 1;

fn vowel_rank(c: char) -> Option<u32> {
    let c = c.to_ascii_lowercase();
    VOWELS.iter().position(|v| *v == c).map(|p| p as u32)
}

/// Encode a vowel/index pair into a single codepoint.
pub fn encode_char(vowel: char, index: u32) -> Option<char> {
    if index > MAX_INDEX {
        return None;
    }
    let rank = vowel_rank(vowel)?;
    char::from_u32((rank + 1) * ENCODING_BASE + index)
}

/// Decode a codepoint produced by [encode_char].
pub fn decode_char(c: char) -> Option<(char, u32)> {
    let n = c as u32;
    if !(ENCODING_BASE..ENCODING_BASE * (VOWELS.len() as u32 + 1)).contains(&n) {
        return None;
    }
    let rank = (n / ENCODING_BASE - 1) as usize;
    Some((VOWELS[rank], n % ENCODING_BASE))
}

/// Encode `index` into `value`.
///
/// Returns [None] when the value has no vowel to carry the index, or when the
/// index is too large to be encoded.
pub fn encode_index(value: &str, index: u32) -> Option<String> {
    let (pos, vowel) = value
        .char_indices()
        .rev()
        .find(|(_, c)| vowel_rank(*c).is_some())?;
    let encoded = encode_char(vowel, index)?;

    let mut out = String::with_capacity(value.len() + 2);
    out.push_str(&value[..pos]);
    out.push(encoded);
    out.push_str(&value[pos + vowel.len_utf8()..]);
    Some(out)
}

/// Reverse [encode_index]: restores the plain value and its index from the
/// first encoded codepoint found.
pub fn decode_index(encoded: &str) -> Option<(String, u32)> {
    let (pos, c, (vowel, index)) = encoded
        .char_indices()
        .find_map(|(pos, c)| decode_char(c).map(|d| (pos, c, d)))?;

    let mut value = String::with_capacity(encoded.len());
    value.push_str(&encoded[..pos]);
    value.push(vowel);
    value.push_str(&encoded[pos + c.len_utf8()..]);
    Some((value, index))
}

/// Render every encoded codepoint of `encoded` as vowel + index digits.
///
/// Meant for inspection: `k\u{0fa3} lugal` becomes `ku3 lugal`.
pub fn decode_line(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        match decode_char(c) {
            Some((vowel, index)) => {
                out.push(vowel);
                out.push_str(&index.to_string());
            }
            None => out.push(c),
        }
    }
    out
}
