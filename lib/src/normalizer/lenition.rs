use crate::normalizer::WordNormalizer;

/// Drops a lenition `h` written in second position, e.g. `bhàta` to `bàta`.
#[derive(Clone, Debug, Default)]
pub struct Lenition;

impl Lenition {
    pub fn new() -> Self {
        Self
    }
}

impl WordNormalizer for Lenition {
    fn normalize(&self, word: &mut String) {
        let mut chars = word.char_indices().skip(1);

        if let (Some((index, 'h')), Some(_)) = (chars.next(), chars.next()) {
            word.remove(index);
        }
    }
}
