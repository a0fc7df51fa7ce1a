use gdlemma::{token::Tokens, Lemmatizer};

use crate::normalizer::TextNormalizer;

/// Replaces each token with its lemma.
#[derive(Clone, Debug)]
pub struct LemmaReplacer {
    lemmatizer: Lemmatizer,
}

impl LemmaReplacer {
    pub fn new(lemmatizer: Lemmatizer) -> Self {
        Self { lemmatizer }
    }
}

impl TextNormalizer for LemmaReplacer {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| {
            let lemma = self.lemmatizer.lemmatize(token);
            *token.inner_mut() = lemma;
        });
    }
}
