/*! Text transformers.

Transforms translation lines into text suitable for statistical alignment:
editorial asides and brackets go away, punctuation gets spaced out and numerals
are replaced by placeholders. [TranslationNormalizer] chains them.

!*/

mod brackets;
mod numerals;
mod punctuation;
mod transform;
mod translation;

pub use brackets::{Brackets, RemoveAsides};
pub use numerals::NumeralPlaceholders;
pub use punctuation::{PunctuationSpacing, PUNCTUATION};
pub use transform::{Transform, Transformer};
pub use translation::TranslationNormalizer;
