extern crate thiserror;

use thiserror::Error;

/// Errors raised while building an irregular table or a rule table.
///
/// Lemmatization itself is total; these are only reported at construction.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Serialization Error: {0}")]
    Json(String),

    #[error("Irregular entry has an empty key")]
    EmptyKey,

    #[error("Irregular entry `{key}` has an empty lemma")]
    EmptyLemma { key: String },

    #[error("Irregular key `{key}` appears more than once after case-folding")]
    DuplicateKey { key: String },

    #[error("Rule {index} has an empty suffix")]
    EmptySuffix { index: usize },

    #[error("Rule {index} (`{suffix}`) is shadowed by rule {by_index} (`{by_suffix}`)")]
    Shadowed {
        index: usize,
        suffix: String,
        by_index: usize,
        by_suffix: String,
    },
}

impl From<serde_json::Error> for TableError {
    fn from(error: serde_json::Error) -> Self {
        TableError::Json(error.to_string())
    }
}
