pub mod frequency;
pub mod error;
pub mod lemmatize;
pub mod normalizer;
pub mod token;
pub mod util;

pub use lemmatize::{resolve, IrregularTable, Lemmatizer, Resolution, RuleTable, Source, SuffixRule};
pub use normalizer::{normalize, Normalizer};
