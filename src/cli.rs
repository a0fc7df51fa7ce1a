extern crate clap;

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use gdlemma::normalizer::ProstheticPolicy;

use crate::{
    report::Format,
    tokenizer::{FirstWord, Lines, Tokenizer, Whitespace},
};

#[derive(Debug, Parser)]
#[command(name = "gdlemma", about = "Rule-based lemmatizer for Scottish Gaelic")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the lemma of every token.
    Lemmatize(Lemmatize),

    /// Count words, optionally after lemmatizing them.
    Frequency(Frequency),

    /// Keep the first word of every non-blank line.
    FirstWords(FirstWords),
}

/// Where the lemmatizer tables come from.
#[derive(Debug, Args)]
pub struct Tables {
    /// JSON object mapping irregular surface forms to lemmas.
    #[arg(long, short = 'i')]
    pub irregulars: Option<PathBuf>,

    /// JSON array of suffix rules. Defaults to the built-in Gaelic rules.
    #[arg(long, short = 'r')]
    pub rules: Option<PathBuf>,

    /// Also strip a bare leading t, h or n before a vowel.
    #[arg(long)]
    pub bare_prosthetic: bool,
}

impl Tables {
    pub fn policy(&self) -> ProstheticPolicy {
        if self.bare_prosthetic {
            ProstheticPolicy::BareBeforeVowel
        } else {
            ProstheticPolicy::Hyphenated
        }
    }
}

#[derive(Debug, Parser)]
pub struct Lemmatize {
    /// Token file.
    #[arg(long, short = 'f')]
    pub input: PathBuf,

    #[command(flatten)]
    pub tables: Tables,

    #[arg(long, value_enum, default_value_t = TokenizerKind::Lines)]
    pub tokenizer: TokenizerKind,

    #[arg(long, short = 't', default_value = "1")]
    pub threads: NonZeroUsize,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Parser)]
pub struct Frequency {
    /// Token file.
    #[arg(long, short = 'f')]
    pub input: PathBuf,

    /// Whitespace-separated stop-words.
    #[arg(long, short = 's')]
    pub stopwords: Option<PathBuf>,

    /// Number of words to report.
    #[arg(long, short = 'n', default_value_t = 100)]
    pub top: usize,

    /// Count lemmas instead of surface forms. Stop-words are dropped both
    /// before and after lemmatization.
    #[arg(long)]
    pub lemmatize: bool,

    #[command(flatten)]
    pub tables: Tables,

    #[arg(long, value_enum, default_value_t = TokenizerKind::Lines)]
    pub tokenizer: TokenizerKind,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Parser)]
pub struct FirstWords {
    #[arg(long, short = 'f')]
    pub input: PathBuf,

    #[arg(long, short = 'o')]
    pub output: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TokenizerKind {
    /// One token per line.
    Lines,

    /// Every whitespace-separated word.
    Whitespace,

    /// The first word of each line.
    FirstWord,
}

impl From<TokenizerKind> for Tokenizer {
    fn from(kind: TokenizerKind) -> Self {
        match kind {
            TokenizerKind::Lines => Tokenizer::Lines(Lines::new()),
            TokenizerKind::Whitespace => Tokenizer::Whitespace(Whitespace::new()),
            TokenizerKind::FirstWord => Tokenizer::FirstWord(FirstWord::new()),
        }
    }
}
