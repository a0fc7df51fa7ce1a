use crate::normalizer::WordNormalizer;

/// Emphatic particles in scan order. Only the first match is removed.
pub const EMPHATIC_SUFFIXES: [&str; 4] = ["-sa", "-se", "-san", "-ne"];

#[derive(Clone, Debug, Default)]
pub struct EmphaticSuffix;

impl EmphaticSuffix {
    pub fn new() -> Self {
        Self
    }
}

impl WordNormalizer for EmphaticSuffix {
    fn normalize(&self, word: &mut String) {
        let matched = EMPHATIC_SUFFIXES
            .iter()
            .find(|suffix| word.len() > suffix.len() && word.ends_with(*suffix));

        if let Some(suffix) = matched {
            word.truncate(word.len() - suffix.len());
        }
    }
}
