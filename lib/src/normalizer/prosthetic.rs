use crate::normalizer::WordNormalizer;

const HYPHENATED: [&str; 3] = ["t-", "h-", "n-"];
const BARE: [char; 3] = ['t', 'h', 'n'];
const VOWELS: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'à', 'è', 'ì', 'ò', 'ù'];

/// How a prosthetic consonant is recognised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProstheticPolicy {
    /// Only the explicit `t-`, `h-` and `n-` prefixes.
    #[default]
    Hyphenated,

    /// Also a bare leading `t`, `h` or `n` directly followed by a vowel.
    ///
    /// This strips genuine initial consonants too (`tìr` becomes `ìr`).
    BareBeforeVowel,
}

#[derive(Clone, Debug, Default)]
pub struct Prosthetic {
    policy: ProstheticPolicy,
}

impl Prosthetic {
    pub fn new(policy: ProstheticPolicy) -> Self {
        Self { policy }
    }
}

impl WordNormalizer for Prosthetic {
    fn normalize(&self, word: &mut String) {
        if HYPHENATED.iter().any(|prefix| word.starts_with(prefix)) {
            word.drain(..2);
            return;
        }

        if self.policy == ProstheticPolicy::BareBeforeVowel {
            let mut chars = word.chars();
            let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
                return;
            };

            // Keep at least two characters behind.
            if BARE.contains(&first) && VOWELS.contains(&second) && chars.next().is_some() {
                word.remove(0);
            }
        }
    }
}
