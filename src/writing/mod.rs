//! Corpus writing.
mod corpus;

pub use corpus::{export, CorpusWriter, DELIMITER};
