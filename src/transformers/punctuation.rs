//! Punctuation spacing.
use super::Transform;

/// Punctuation marks that are split from surrounding words.
pub const PUNCTUATION: [char; 7] = [':', ';', '?', '.', ',', '”', '“'];

/// Puts a space before and after each of [PUNCTUATION], unless there is one already.
///
/// This is done in a single left-to-right pass, so that adjacent marks (`.,`) each get
/// single spacing on both sides.
/// Leading and trailing spaces are trimmed.
#[derive(Default)]
pub struct PunctuationSpacing;

impl PunctuationSpacing {
    #[inline]
    fn is_punctuation(c: char) -> bool {
        PUNCTUATION.contains(&c)
    }
}

impl Transform<String> for PunctuationSpacing {
    fn transform_own(&self, line: String) -> String {
        let mut out = String::with_capacity(line.len() + line.len() / 4);
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            if !Self::is_punctuation(c) {
                out.push(c);
                continue;
            }

            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            out.push(c);
            if let Some(next) = chars.peek() {
                if *next != ' ' && *next != '\n' {
                    out.push(' ');
                }
            }
        }

        out.trim_matches(' ').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaced(s: &str) -> String {
        PunctuationSpacing.transform_own(s.to_string())
    }

    #[test]
    fn simple() {
        assert_eq!(spaced("the king, the queen."), "the king , the queen .");
        assert_eq!(spaced("a:b"), "a : b");
    }

    #[test]
    fn adjacent_marks() {
        assert_eq!(spaced("x.,y"), "x . , y");
        assert_eq!(spaced("“king”"), "“ king ”");
    }

    #[test]
    fn already_spaced() {
        assert_eq!(spaced("a , b"), "a , b");
        assert_eq!(spaced(", a"), ", a");
    }

    #[test]
    fn idempotent() {
        let once = spaced("he said: “go;now?”.");
        assert_eq!(spaced(&once), once);
    }
}
