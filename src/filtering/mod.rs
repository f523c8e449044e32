/*! Filtering utilities

Filters operate on words (can a transliterated word be confidently normalized?)
or on raw ATF files (does a file contain any text lines?).

Filters implement [filter::Filter]. They hold no state, so they can be shared between threads.
! */
mod filter;
pub mod record;
pub mod word;

pub use filter::Filter;
pub use record::{AtfStatus, GoodAtf};
pub use word::Legible;
