//! Translation normalizer.
use super::{Brackets, NumeralPlaceholders, PunctuationSpacing, RemoveAsides};
use super::{Transform, Transformer};

/// Cleans a translation line for alignment.
///
/// Chains, in order: [RemoveAsides], [Brackets], [PunctuationSpacing] and
/// [NumeralPlaceholders]. Normalizing an already normalized line is a no-op.
pub struct TranslationNormalizer {
    chain: Transformer<String>,
}

impl Default for TranslationNormalizer {
    fn default() -> Self {
        let mut chain = Transformer::default();
        chain
            .add(Box::new(RemoveAsides))
            .add(Box::new(Brackets))
            .add(Box::new(PunctuationSpacing))
            .add(Box::new(NumeralPlaceholders));
        Self { chain }
    }
}

impl TranslationNormalizer {
    pub fn normalize(&self, line: &str) -> String {
        self.chain.transform_own(line.to_string())
    }
}

impl Transform<String> for TranslationNormalizer {
    fn transform_own(&self, line: String) -> String {
        self.chain.transform_own(line)
    }
}
