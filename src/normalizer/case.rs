use gdlemma::token::Tokens;

use crate::normalizer::TextNormalizer;

/// Unicode lowercasing, so `À` folds to `à` as well as `A` to `a`.
#[derive(Clone, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Lowercase {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| {
            if token.chars().any(char::is_uppercase) {
                let lowercase = token.to_lowercase();
                *token.inner_mut() = lowercase;
            }
        })
    }
}
