//! Orthographic normalization of a single, already case-folded word.
//!
//! A [`Normalizer`] is an ordered list of [`WordNormalizer`] steps. The
//! Gaelic pipeline is built explicitly by [`Normalizer::gaelic`]:
//!
//! 1. [`Accents`]: acute vowels become grave vowels.
//! 2. [`EmphaticSuffix`]: at most one of `-sa`, `-se`, `-san`, `-ne` is removed.
//! 3. [`Prosthetic`]: a leading `t-`, `h-` or `n-` is removed.
//! 4. [`Lenition`]: an `h` in second position is removed.

pub mod accent;
pub mod emphatic;
pub mod lenition;
pub mod prosthetic;

pub use {
    accent::Accents,
    emphatic::EmphaticSuffix,
    lenition::Lenition,
    prosthetic::{Prosthetic, ProstheticPolicy},
};

use std::sync::OnceLock;

pub trait WordNormalizerClone {
    fn clone_box(&self) -> Box<dyn WordNormalizer>;
}

impl<T> WordNormalizerClone for T
where
    T: 'static + WordNormalizer + Clone,
{
    fn clone_box(&self) -> Box<dyn WordNormalizer> {
        Box::new(self.clone())
    }
}

/// One rewriting step over a single word.
pub trait WordNormalizer: WordNormalizerClone + std::fmt::Debug + Send + Sync {
    fn normalize(&self, word: &mut String);
}

impl Clone for Box<dyn WordNormalizer> {
    fn clone(&self) -> Box<dyn WordNormalizer> {
        self.clone_box()
    }
}

#[derive(Clone, Debug)]
pub struct Normalizer(Vec<Box<dyn WordNormalizer>>);

impl Normalizer {
    /// An empty normalizer, which returns every word unchanged.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The canonical Gaelic pipeline with the hyphen-required prosthetic policy.
    pub fn gaelic() -> Self {
        Self::with_policy(ProstheticPolicy::Hyphenated)
    }

    pub fn with_policy(policy: ProstheticPolicy) -> Self {
        let mut normalizer = Self::new();
        normalizer
            .insert(Box::new(Accents::new()))
            .insert(Box::new(EmphaticSuffix::new()))
            .insert(Box::new(Prosthetic::new(policy)))
            .insert(Box::new(Lenition::new()));
        normalizer
    }

    pub fn insert(&mut self, step: Box<dyn WordNormalizer>) -> &mut Self {
        self.0.push(step);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Runs every step, in order, over `word` and returns the canonical form.
    pub fn normalize(&self, word: &str) -> String {
        let mut canonical = word.to_string();
        self.0.iter().for_each(|step| step.normalize(&mut canonical));
        canonical
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::gaelic()
    }
}

/// Normalizes `word` with the canonical Gaelic pipeline.
///
/// The caller is expected to have case-folded `word` already.
pub fn normalize(word: &str) -> String {
    gaelic().normalize(word)
}

pub(crate) fn gaelic() -> &'static Normalizer {
    static GAELIC: OnceLock<Normalizer> = OnceLock::new();
    GAELIC.get_or_init(Normalizer::gaelic)
}

#[cfg(test)]
mod tests {
    use super::{normalize, Accents, Normalizer, ProstheticPolicy};

    #[test]
    fn test_normalizer_unchanged() {
        assert_eq!(normalize("eilein"), "eilein");
        assert_eq!(normalize("taighean"), "taighean");
    }

    #[test]
    fn test_normalizer_prosthetic() {
        assert_eq!(normalize("t-each"), "each");
        assert_eq!(normalize("h-uile"), "uile");
        assert_eq!(normalize("n-eilean"), "eilean");
    }

    #[test]
    fn test_normalizer_accent_first() {
        assert_eq!(normalize("cás"), "càs");
        assert_eq!(normalize("óran"), "òran");
    }

    #[test]
    fn test_normalizer_step_order() {
        // The emphatic suffix goes before the prosthetic, which goes before lenition.
        assert_eq!(normalize("t-éilean-sa"), "èilean");
        assert_eq!(normalize("h-bhàta"), "bàta");
    }

    #[test]
    fn test_normalizer_lenition() {
        assert_eq!(normalize("bhàta"), "bàta");
        assert_eq!(normalize("mhòr"), "mòr");
        assert_eq!(normalize("th"), "th");
    }

    #[test]
    fn test_normalizer_bare_policy() {
        let normalizer = Normalizer::with_policy(ProstheticPolicy::BareBeforeVowel);
        assert_eq!(normalizer.normalize("tòran"), "òran");
        assert_eq!(Normalizer::gaelic().normalize("tòran"), "tòran");
    }

    #[test]
    fn test_normalizer_custom_pipeline() {
        let mut normalizer = Normalizer::new();
        assert!(normalizer.is_empty());
        assert_eq!(normalizer.normalize("bhá"), "bhá");

        normalizer.insert(Box::new(Accents::new()));
        assert_eq!(normalizer.len(), 1);
        assert_eq!(normalizer.normalize("bhá"), "bhà");
    }
}
