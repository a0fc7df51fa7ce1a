use crate::normalizer::WordNormalizer;

/// Maps acute vowels onto their grave counterparts and the modifier
/// apostrophe (U+02BC) onto a plain apostrophe.
#[derive(Clone, Debug, Default)]
pub struct Accents;

impl Accents {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn canonical(ch: char) -> char {
        match ch {
            'á' => 'à',
            'é' => 'è',
            'í' => 'ì',
            'ó' => 'ò',
            'ú' => 'ù',
            'Á' => 'À',
            'É' => 'È',
            'Í' => 'Ì',
            'Ó' => 'Ò',
            'Ú' => 'Ù',
            '\u{02BC}' => '\'',
            other => other,
        }
    }
}

impl WordNormalizer for Accents {
    fn normalize(&self, word: &mut String) {
        if word.is_ascii() {
            return;
        }

        *word = word.chars().map(Self::canonical).collect();
    }
}
