extern crate hashbrown;

use std::cmp::Reverse;

use hashbrown::hash_map::HashMap;

use crate::{token::Tokens, util::Counter};

/// Frequency of each distinct term seen.
#[derive(Debug, Default)]
pub struct TermCounter {
    inner: HashMap<String, Counter<usize>>,
    total: usize,
}

impl TermCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String) {
        self.total += 1;
        self.inner
            .entry(key)
            .and_modify(Counter::increment)
            .or_insert_with(|| Counter::new(1));
    }

    pub fn extend(&mut self, tokens: Tokens) {
        tokens.into_iter().for_each(|token| self.insert(token.inner()));
    }

    pub fn get(&self, key: &str) -> Option<&Counter<usize>> {
        self.inner.get(key)
    }

    /// Number of distinct terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Number of terms inserted, counting repeats.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `n` most frequent terms, highest count first. Equal counts are
    /// ordered alphabetically so the report is stable between runs.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries = self
            .inner
            .iter()
            .map(|(term, counter)| (term.as_str(), counter.get()))
            .collect::<Vec<_>>();

        entries.sort_unstable_by_key(|&(term, count)| (Reverse(count), term));
        entries.truncate(n);
        entries
    }
}
