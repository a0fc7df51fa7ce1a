pub mod irregular;
pub mod resolver;
pub mod rule;

pub use {
    irregular::IrregularTable,
    resolver::{resolve, Lemmatizer, Resolution, Source},
    rule::{RuleTable, SuffixRule},
};
