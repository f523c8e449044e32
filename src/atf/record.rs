//! Text and line records.

/// One annotated line of a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    line_number: String,
    transliteration: String,
    translation: Option<String>,
    translation_normalized: Option<String>,
    normalization: Option<String>,
    normalization_encoded: Option<String>,
}

impl LineRecord {
    pub fn new(
        line_number: String,
        transliteration: String,
        translation: Option<String>,
        translation_normalized: Option<String>,
        normalization: Option<String>,
        normalization_encoded: Option<String>,
    ) -> Self {
        Self {
            line_number,
            transliteration,
            translation,
            translation_normalized,
            normalization,
            normalization_encoded,
        }
    }

    /// Get a reference to the line number (`1`, `2'`, …).
    pub fn line_number(&self) -> &str {
        &self.line_number
    }

    /// Get a reference to the raw transliteration.
    pub fn transliteration(&self) -> &str {
        &self.transliteration
    }

    /// Get the translation, as found after the translation marker.
    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    /// Get the cleaned translation.
    pub fn translation_normalized(&self) -> Option<&str> {
        self.translation_normalized.as_deref()
    }

    /// Get the normalization of the transliteration.
    pub fn normalization(&self) -> Option<&str> {
        self.normalization.as_deref()
    }

    /// Get the normalization with sign indices encoded.
    pub fn normalization_encoded(&self) -> Option<&str> {
        self.normalization_encoded.as_deref()
    }

    /// Normalization and cleaned translation, when both are non-empty.
    pub fn aligned(&self) -> Option<(&str, &str)> {
        match (self.normalization(), self.translation_normalized()) {
            (Some(n), Some(t)) if !n.is_empty() && !t.is_empty() => Some((n, t)),
            _ => None,
        }
    }
}

/// One text: identifier, publication and lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    id: String,
    publication_ref: String,
    lines: Vec<LineRecord>,
}

impl TextRecord {
    pub fn new(id: String, publication_ref: String) -> Self {
        Self {
            id,
            publication_ref,
            lines: Vec::new(),
        }
    }

    /// Get a reference to the text identifier (e.g. `P100001`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get a reference to the publication reference.
    pub fn publication_ref(&self) -> &str {
        &self.publication_ref
    }

    /// Get a reference to the text's lines.
    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    pub(crate) fn push(&mut self, line: LineRecord) {
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned() {
        let line = LineRecord::new(
            "1".to_string(),
            "lugal-e".to_string(),
            Some("the king".to_string()),
            Some("the king".to_string()),
            Some("lugale".to_string()),
            Some("lugale".to_string()),
        );
        assert_eq!(line.aligned(), Some(("lugale", "the king")));

        let untranslated = LineRecord::new(
            "2".to_string(),
            "lugal-e".to_string(),
            None,
            None,
            Some("lugale".to_string()),
            Some("lugale".to_string()),
        );
        assert_eq!(untranslated.aligned(), None);

        let aside_only = LineRecord::new(
            "3".to_string(),
            "lugal-e".to_string(),
            Some("(broken)".to_string()),
            Some("".to_string()),
            Some("lugale".to_string()),
            Some("lugale".to_string()),
        );
        assert_eq!(aside_only.aligned(), None);
    }

    #[test]
    fn text() {
        let mut text = TextRecord::new("P100001".to_string(), "CDLI Pub 1".to_string());
        assert!(text.lines().is_empty());
        text.push(LineRecord::new(
            "1".to_string(),
            "x".to_string(),
            None,
            None,
            None,
            None,
        ));
        assert_eq!(text.lines().len(), 1);
        assert_eq!(text.id(), "P100001");
        assert_eq!(text.publication_ref(), "CDLI Pub 1");
    }
}
