extern crate hashbrown;

use std::{fmt, io::Read};

use hashbrown::{hash_map::Entry, HashMap};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use tracing::warn;

use crate::error::TableError;

/// Surface forms whose lemma cannot be derived by suffix rules.
///
/// Keys are stored lowercase, so lookups must use a case-folded token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IrregularTable {
    inner: HashMap<String, String>,
}

impl IrregularTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(surface, lemma)` pairs.
    ///
    /// Keys are case-folded. Empty keys or lemmas, and keys that collide after
    /// folding, are rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let pairs = pairs.into_iter();
        let mut inner = HashMap::with_capacity(pairs.size_hint().0);
        let mut folded = 0usize;

        for (key, lemma) in pairs {
            let key = key.as_ref();
            let lemma = lemma.into();

            if key.is_empty() {
                return Err(TableError::EmptyKey);
            }

            if lemma.is_empty() {
                return Err(TableError::EmptyLemma { key: key.into() });
            }

            let lowercase = key.to_lowercase();
            if lowercase != key {
                folded += 1;
            }

            match inner.entry(lowercase) {
                Entry::Occupied(entry) => {
                    return Err(TableError::DuplicateKey {
                        key: entry.key().clone(),
                    })
                }
                Entry::Vacant(entry) => {
                    entry.insert(lemma);
                }
            }
        }

        if folded > 0 {
            warn!(folded, "irregular keys were case-folded");
        }

        Ok(Self { inner })
    }

    /// Parses a JSON object mapping surface forms to lemmas.
    ///
    /// A key repeated in the object is a [`TableError::DuplicateKey`], the
    /// same as two keys that collide after folding.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let Entries(pairs) = serde_json::from_str(json)?;
        Self::from_pairs(pairs)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let Entries(pairs) = serde_json::from_reader(reader)?;
        Self::from_pairs(pairs)
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.inner.get(word).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains_key(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Every `key: value` member of a JSON object, in document order.
///
/// Deserializing into a map would keep only the last of two equal keys.
struct Entries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping surface forms to lemmas")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(pair) = map.next_entry::<String, String>()? {
                    pairs.push(pair);
                }
                Ok(Entries(pairs))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
