use gdlemma::token::{Token, Tokens};

use crate::tokenizer::TextTokenizer;

/// The first whitespace-separated word of every non-blank line.
#[derive(Clone, Debug, Default)]
pub struct FirstWord;

impl FirstWord {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextTokenizer for FirstWord {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens {
        text.as_ref()
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(Token::from)
            .collect()
    }
}
