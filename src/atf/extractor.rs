//! Record extractor.
//!
//! A single pass over raw ATF lines. State is held in an [ExtractorState]
//! that is threaded through [Extractor::step], one raw line at a time.
//! Extraction never fails: lines that do not fit are skipped, since
//! source files are known to be irregular.
use log::debug;
use serde::Deserialize;

use super::{LineRecord, TextRecord};
use crate::transformers::TranslationNormalizer;
use crate::transliteration::{Transliteration, TransliterationOptions};

/// Default translation marker (English translations).
pub const TRANSLATION_MARKER: &str = "#tr.en";

/// Extractor options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorOptions {
    /// lines containing this marker hold a translation
    pub translation_marker: String,
    /// also record lines that never receive a translation
    pub keep_untranslated: bool,
    pub transliteration: TransliterationOptions,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            translation_marker: TRANSLATION_MARKER.to_string(),
            keep_untranslated: false,
            transliteration: TransliterationOptions::default(),
        }
    }
}

/// Kinds of raw ATF lines.
#[derive(Debug, PartialEq, Eq)]
pub enum RawLine<'a> {
    /// `&P100001 = CDLI Pub 1`
    Header { id: &'a str, publication: &'a str },
    /// `#tr.en: the king`
    Translation(&'a str),
    /// `1. lugal-e`
    Transliteration { number: &'a str, text: &'a str },
    Other,
}

/// A numbered line waiting for its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingLine {
    number: String,
    transliteration: String,
}

/// Extraction state: finished texts, the open one and the pending line.
#[derive(Debug, Default)]
pub struct ExtractorState {
    texts: Vec<TextRecord>,
    open: Option<TextRecord>,
    pending: Option<PendingLine>,
}

impl ExtractorState {
    /// Get a reference to the texts closed so far.
    pub fn texts(&self) -> &[TextRecord] {
        &self.texts
    }

    /// Get a reference to the text being filled, if any.
    pub fn open(&self) -> Option<&TextRecord> {
        self.open.as_ref()
    }

    /// true if a numbered line is waiting for a translation.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// ATF record extractor.
pub struct Extractor {
    options: ExtractorOptions,
    transliteration: Transliteration,
    translation: TranslationNormalizer,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorOptions::default())
    }
}

impl Extractor {
    pub fn new(options: ExtractorOptions) -> Self {
        let transliteration = Transliteration::new(options.transliteration.clone());
        Self {
            options,
            transliteration,
            translation: TranslationNormalizer::default(),
        }
    }

    /// Get a reference to the extractor's options.
    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Classify a raw line. Rules are checked in order: header, translation,
    /// transliteration.
    pub fn classify<'a>(&self, line: &'a str) -> RawLine<'a> {
        let trimmed = line.trim();

        if let Some(header) = trimmed.strip_prefix('&') {
            if let Some((id, publication)) = header.split_once(" = ") {
                return RawLine::Header {
                    id: id.trim_matches('&').trim(),
                    publication: publication.trim(),
                };
            }
        }

        if let Some(pos) = line.find(self.options.translation_marker.as_str()) {
            let text = &line[pos + self.options.translation_marker.len()..];
            return RawLine::Translation(text.trim_matches(|c: char| c == ' ' || c == ':'));
        }

        let starts_with_digit = line.chars().next().map_or(false, |c| c.is_ascii_digit());
        if starts_with_digit {
            if let Some((number, text)) = line.split_once(". ") {
                return RawLine::Transliteration {
                    number,
                    text: text.trim_end(),
                };
            }
        }

        RawLine::Other
    }

    /// Build a line record, normalizing both sides.
    fn line_record(&self, pending: PendingLine, translation: Option<&str>) -> LineRecord {
        let normalization = self.transliteration.normalize_line(&pending.transliteration);
        let (normalization, normalization_encoded) = match normalization {
            Some(n) => (Some(n.plain), Some(n.encoded)),
            None => (None, None),
        };
        let translation_normalized = translation.map(|t| self.translation.normalize(t));

        LineRecord::new(
            pending.number,
            pending.transliteration,
            translation.map(String::from),
            translation_normalized,
            normalization,
            normalization_encoded,
        )
    }

    /// Drop the pending line, recording it without translation if asked to.
    fn discard_pending(&self, mut state: ExtractorState) -> ExtractorState {
        if let Some(pending) = state.pending.take() {
            match state.open.as_mut() {
                Some(text) if self.options.keep_untranslated => {
                    text.push(self.line_record(pending, None));
                }
                _ => debug!("line {} has no translation, skipped", pending.number),
            }
        }
        state
    }

    /// Close the open text, if any.
    fn flush(&self, state: ExtractorState) -> ExtractorState {
        let mut state = self.discard_pending(state);
        if let Some(text) = state.open.take() {
            state.texts.push(text);
        }
        state
    }

    /// Process one raw line.
    pub fn step(&self, state: ExtractorState, line: &str) -> ExtractorState {
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            return state;
        }

        match self.classify(line) {
            RawLine::Header { id, publication } => {
                let mut state = self.flush(state);
                state.open = Some(TextRecord::new(id.to_string(), publication.to_string()));
                state
            }
            RawLine::Translation(text) => {
                let mut state = state;
                let pending = state.pending.take();
                match (state.open.as_mut(), pending) {
                    (Some(record), Some(pending)) => {
                        let line = self.line_record(pending, Some(text));
                        record.push(line);
                    }
                    (None, _) => debug!("translation outside of any text, skipped: {:?}", line),
                    (Some(record), None) => debug!(
                        "translation without transliteration in {}, skipped: {:?}",
                        record.id(),
                        line
                    ),
                }
                state
            }
            RawLine::Transliteration { number, text } => {
                let mut state = self.discard_pending(state);
                state.pending = Some(PendingLine {
                    number: number.to_string(),
                    transliteration: text.to_string(),
                });
                state
            }
            RawLine::Other => state,
        }
    }

    /// End of input: close the open text and return every text.
    pub fn finish(&self, state: ExtractorState) -> Vec<TextRecord> {
        self.flush(state).texts
    }

    /// Extract texts from raw lines.
    pub fn extract<'a, I>(&self, lines: I) -> Vec<TextRecord>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let state = lines
            .into_iter()
            .fold(ExtractorState::default(), |state, line| self.step(state, line));
        self.finish(state)
    }

    /// Extract texts from a raw ATF string.
    pub fn extract_str(&self, atf: &str) -> Vec<TextRecord> {
        self.extract(atf.lines())
    }
}
