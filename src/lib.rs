//! # atfcorpus
//!
//! Turns ATF (ASCII Transliteration Format) files into a Sumerian/English
//! parallel corpus suitable for statistical aligners.
//!
//! Raw lines go through a [atf::Extractor], that groups them into texts and
//! normalizes both sides of each translated line:
//!
//! - transliterations with [transliteration::Transliteration] (see [sign] for signs),
//! - translations with [transformers::TranslationNormalizer].
//!
//! Texts are then written by [writing::CorpusWriter].
//!
//! ```
//! use atfcorpus::atf::Extractor;
//!
//! let texts = Extractor::default().extract_str("&P100001 = CDLI Pub 1\n1. lugal-e\n#tr.en: the king\n");
//! let line = &texts[0].lines()[0];
//! assert_eq!(line.aligned(), Some(("lugale", "the king")));
//! ```
pub mod atf;
pub mod error;
pub mod filtering;
pub mod pipelines;
pub mod placeholders;
pub mod processing;
pub mod sign;
pub mod transformers;
pub mod transliteration;
pub mod writing;
