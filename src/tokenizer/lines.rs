use gdlemma::token::{Token, Tokens};

use crate::tokenizer::TextTokenizer;

/// One token per line, trimmed. Blank lines are skipped.
#[derive(Clone, Debug, Default)]
pub struct Lines;

impl Lines {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextTokenizer for Lines {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens {
        text.as_ref()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Token::from)
            .collect()
    }
}
