/*! Raw file processing

Contains functions that work on raw ATF files without producing a corpus.
!*/
pub mod check;

pub use check::{check, FileReport};
