mod first_word;
mod lines;
mod whitespace;

pub use {first_word::FirstWord, lines::Lines, whitespace::Whitespace};

use gdlemma::token::Tokens;

#[derive(Clone, Debug)]
pub enum Tokenizer {
    Lines(Lines),
    Whitespace(Whitespace),
    FirstWord(FirstWord),
}

impl Tokenizer {
    pub fn tokenize(&mut self, text: &str) -> Tokens {
        match self {
            Tokenizer::Lines(tokenizer) => tokenizer.tokenize(text),
            Tokenizer::Whitespace(tokenizer) => tokenizer.tokenize(text),
            Tokenizer::FirstWord(tokenizer) => tokenizer.tokenize(text),
        }
    }
}

pub trait TextTokenizer {
    fn tokenize<T: AsRef<str>>(&mut self, text: T) -> Tokens;
}
