//! Suffix rules and the ordered table they are evaluated from.
//!
//! Rules are evaluated in declared order and the first rule whose suffix ends
//! the word wins. A table is therefore only correct when longer suffixes come
//! before any shorter suffix they end with (`aichean` before `ean` before
//! `an`). [`RuleTable::validate`] checks exactly that.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    /// Trailing text the word must end with.
    pub suffix: String,

    /// Number of trailing characters to remove.
    pub strip: usize,

    /// Text appended after stripping.
    #[serde(default)]
    pub replacement: String,
}

impl SuffixRule {
    pub fn new<S: Into<String>, R: Into<String>>(suffix: S, strip: usize, replacement: R) -> Self {
        Self {
            suffix: suffix.into(),
            strip,
            replacement: replacement.into(),
        }
    }

    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        word.ends_with(self.suffix.as_str())
    }

    /// Removes the last `strip` characters of `word`, stopping at its start,
    /// and appends the replacement.
    pub fn apply(&self, word: &str) -> String {
        let end = match self.strip {
            0 => word.len(),
            strip => word
                .char_indices()
                .rev()
                .nth(strip - 1)
                .map_or(0, |(index, _)| index),
        };

        let mut stem = String::with_capacity(end + self.replacement.len());
        stem.push_str(&word[..end]);
        stem.push_str(&self.replacement);
        stem
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable(Vec<SuffixRule>);

impl RuleTable {
    /// Builds a table and checks its ordering.
    pub fn new(rules: Vec<SuffixRule>) -> Result<Self, TableError> {
        let table = Self(rules);
        table.validate()?;
        Ok(table)
    }

    /// Builds a table without checking it. The caller owns the ordering.
    pub fn unchecked(rules: Vec<SuffixRule>) -> Self {
        Self(rules)
    }

    /// Parses a JSON array of rules and validates it.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let rules: Vec<SuffixRule> = serde_json::from_str(json)?;
        Self::new(rules)
    }

    /// The built-in Gaelic plural and genitive endings.
    pub fn gaelic() -> Self {
        Self(vec![
            // bàtaichean, notaichean
            SuffixRule::new("aichean", 7, "a"),
            // cailleachan
            SuffixRule::new("achan", 5, "ach"),
            // eilein
            SuffixRule::new("ein", 3, "ean"),
            // taighean
            SuffixRule::new("ean", 3, ""),
            // òrain
            SuffixRule::new("an", 2, ""),
        ])
    }

    /// Rejects empty suffixes and any rule that an earlier rule would always
    /// pre-empt.
    pub fn validate(&self) -> Result<(), TableError> {
        for (index, rule) in self.0.iter().enumerate() {
            if rule.suffix.is_empty() {
                return Err(TableError::EmptySuffix { index });
            }

            let shadow = self.0[..index]
                .iter()
                .enumerate()
                .find(|(_, earlier)| rule.suffix.ends_with(earlier.suffix.as_str()));

            if let Some((by_index, earlier)) = shadow {
                return Err(TableError::Shadowed {
                    index,
                    suffix: rule.suffix.clone(),
                    by_index,
                    by_suffix: earlier.suffix.clone(),
                });
            }
        }

        Ok(())
    }

    /// The first rule, in declared order, whose suffix ends `word`.
    #[inline]
    pub fn find(&self, word: &str) -> Option<&SuffixRule> {
        self.0.iter().find(|rule| rule.matches(word))
    }
}

impl Deref for RuleTable {
    type Target = [SuffixRule];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
