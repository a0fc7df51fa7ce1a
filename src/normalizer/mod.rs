//! Token-stream stages run ahead of counting and reporting.

pub mod case;
pub mod lemma;
pub mod stopwords;

pub use {case::Lowercase, lemma::LemmaReplacer, stopwords::Stopwords};

use gdlemma::{token::Tokens, Lemmatizer};

pub trait TextNormalizerClone {
    fn clone_box(&self) -> Box<dyn TextNormalizer>;
}

impl<T> TextNormalizerClone for T
where
    T: 'static + TextNormalizer + Clone,
{
    fn clone_box(&self) -> Box<dyn TextNormalizer> {
        Box::new(self.clone())
    }
}

pub trait TextNormalizer: TextNormalizerClone + std::fmt::Debug + Send + Sync {
    fn normalize(&mut self, tokens: &mut Tokens);
}

impl Clone for Box<dyn TextNormalizer> {
    fn clone(&self) -> Box<dyn TextNormalizer> {
        self.clone_box()
    }
}

#[derive(Clone, Debug, Default)]
pub struct NormalizerPipeline(Vec<Box<dyn TextNormalizer>>);

impl NormalizerPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, normalizer: Box<dyn TextNormalizer>) -> &mut Self {
        self.0.push(normalizer);
        self
    }

    /// Lowercases and drops stop-words. With a lemmatizer, tokens are then
    /// replaced by their lemmas and stop-words are dropped a second time, so a
    /// lemma that is itself a stop-word is not counted.
    pub fn frequency(stopwords: Stopwords, lemmatizer: Option<Lemmatizer>) -> Self {
        let mut pipeline = Self::new();
        pipeline.insert(Box::new(Lowercase::new()));
        pipeline.insert(Box::new(stopwords.clone()));

        if let Some(lemmatizer) = lemmatizer {
            pipeline.insert(Box::new(LemmaReplacer::new(lemmatizer)));
            pipeline.insert(Box::new(stopwords));
        }

        pipeline
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn run(&mut self, tokens: &mut Tokens) {
        self.0.iter_mut().for_each(|normalizer| {
            normalizer.normalize(tokens);
        })
    }
}
