use std::collections::HashSet;

use gdlemma::token::Tokens;

use crate::normalizer::TextNormalizer;

/// Drops every token found in the set. Tokens are compared as given, so
/// lowercase them first.
#[derive(Clone, Debug, Default)]
pub struct Stopwords(HashSet<String>);

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        )
    }

    /// Whitespace-separated words over any number of lines.
    pub fn parse(text: &str) -> Self {
        Self::new(text.split_whitespace())
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TextNormalizer for Stopwords {
    fn normalize(&mut self, tokens: &mut Tokens) {
        if self.0.is_empty() {
            return;
        }

        tokens.retain_mut(|token| !self.0.contains(token.as_str()))
    }
}
