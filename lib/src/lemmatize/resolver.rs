//! Resolves a surface token to its lemma.
//!
//! The irregular table is consulted on the lowercased raw token, before any
//! normalization. Otherwise the token is normalized and the first matching
//! suffix rule produces the lemma, unless the result would be a single
//! character or less, in which case the canonical form is kept.

use std::sync::Arc;

use tracing::trace;

use crate::{
    lemmatize::{irregular::IrregularTable, rule::RuleTable},
    normalizer::{self, Normalizer},
};

/// Which step produced a lemma.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Irregular,
    Rule { suffix: String },

    /// A rule matched but its result was rejected by the length guard.
    Degenerate { suffix: String },
    Canonical,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub lemma: String,
    pub source: Source,
}

#[derive(Clone, Debug)]
pub struct Lemmatizer {
    irregulars: Arc<IrregularTable>,
    rules: Arc<RuleTable>,
    normalizer: Normalizer,
}

impl Lemmatizer {
    pub fn new(irregulars: Arc<IrregularTable>, rules: Arc<RuleTable>) -> Self {
        Self::with_normalizer(irregulars, rules, Normalizer::gaelic())
    }

    pub fn with_normalizer(
        irregulars: Arc<IrregularTable>,
        rules: Arc<RuleTable>,
        normalizer: Normalizer,
    ) -> Self {
        Self {
            irregulars,
            rules,
            normalizer,
        }
    }

    #[inline]
    pub fn irregulars(&self) -> &IrregularTable {
        &self.irregulars
    }

    #[inline]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn lemmatize(&self, token: &str) -> String {
        self.explain(token).lemma
    }

    pub fn explain(&self, token: &str) -> Resolution {
        let token = token.to_lowercase();

        if let Some(lemma) = self.irregulars.get(&token) {
            trace!(%token, lemma, "irregular");
            return Resolution {
                lemma: lemma.to_string(),
                source: Source::Irregular,
            };
        }

        let canonical = self.normalizer.normalize(&token);

        let resolution = match self.rules.find(&canonical) {
            Some(rule) => {
                let candidate = rule.apply(&canonical);

                if candidate.chars().nth(1).is_some() {
                    Resolution {
                        lemma: candidate,
                        source: Source::Rule {
                            suffix: rule.suffix.clone(),
                        },
                    }
                } else {
                    Resolution {
                        lemma: canonical,
                        source: Source::Degenerate {
                            suffix: rule.suffix.clone(),
                        },
                    }
                }
            }
            None => Resolution {
                lemma: canonical,
                source: Source::Canonical,
            },
        };

        trace!(%token, lemma = %resolution.lemma, source = ?resolution.source, "resolved");
        resolution
    }

    /// One `(token, lemma)` pair per input token, in input order.
    pub fn lemmatize_all<I, T>(&self, tokens: I) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        tokens
            .into_iter()
            .map(|token| {
                let token = token.into();
                let lemma = self.lemmatize(&token);
                (token, lemma)
            })
            .collect()
    }
}

/// Resolves `token` against `irregulars` and `rules` using the Gaelic normalizer.
pub fn resolve(token: &str, irregulars: &IrregularTable, rules: &RuleTable) -> String {
    let token = token.to_lowercase();

    if let Some(lemma) = irregulars.get(&token) {
        return lemma.to_string();
    }

    let canonical = normalizer::gaelic().normalize(&token);

    match rules.find(&canonical).map(|rule| rule.apply(&canonical)) {
        Some(candidate) if candidate.chars().nth(1).is_some() => candidate,
        _ => canonical,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::lemmatize::{
        irregular::IrregularTable,
        resolver::{resolve, Lemmatizer, Resolution, Source},
        rule::{RuleTable, SuffixRule},
    };

    fn irregulars() -> IrregularTable {
        IrregularTable::from_pairs([("bha", "bi"), ("rinn", "dèan"), ("taighean", "taigh")])
            .unwrap()
    }

    fn lemmatizer() -> Lemmatizer {
        Lemmatizer::new(Arc::new(irregulars()), Arc::new(RuleTable::gaelic()))
    }

    #[test]
    fn test_resolve_rule_in() {
        let rules = RuleTable::unchecked(vec![
            SuffixRule::new("in", 2, "an"),
            SuffixRule::new("anan", 5, ""),
            SuffixRule::new("ean", 3, ""),
        ]);

        assert_eq!(resolve("eilein", &IrregularTable::new(), &rules), "eilean");
    }

    #[test]
    fn test_resolve_longer_suffix_first() {
        let rules = RuleTable::new(vec![
            SuffixRule::new("ean", 3, ""),
            SuffixRule::new("an", 2, ""),
        ])
        .unwrap();

        assert_eq!(resolve("taighean", &IrregularTable::new(), &rules), "taigh");
    }

    #[test]
    fn test_resolve_longest_match_precedence() {
        let rules = RuleTable::new(vec![
            SuffixRule::new("aichean", 7, "a"),
            SuffixRule::new("ean", 3, "-ean"),
            SuffixRule::new("an", 2, "-an"),
        ])
        .unwrap();

        assert_eq!(resolve("notaichean", &IrregularTable::new(), &rules), "nota");
    }

    #[test]
    fn test_resolve_irregular() {
        assert_eq!(resolve("bha", &irregulars(), &RuleTable::gaelic()), "bi");
    }

    #[test]
    fn test_resolve_irregular_is_case_folded() {
        assert_eq!(resolve("Bha", &irregulars(), &RuleTable::gaelic()), "bi");
        assert_eq!(resolve("BHA", &irregulars(), &RuleTable::gaelic()), "bi");
    }

    #[test]
    fn test_resolve_irregular_before_normalization() {
        // `t-bha` normalizes through `bha`, but the table is keyed on the raw form.
        assert_eq!(resolve("t-bha", &irregulars(), &RuleTable::gaelic()), "ba");
    }

    #[test]
    fn test_resolve_prosthetic() {
        assert_eq!(resolve("t-each", &IrregularTable::new(), &RuleTable::gaelic()), "each");
    }

    #[test]
    fn test_resolve_accent() {
        assert_eq!(resolve("cás", &IrregularTable::new(), &RuleTable::gaelic()), "càs");
        assert_eq!(resolve("CÁS", &IrregularTable::new(), &RuleTable::gaelic()), "càs");
    }

    #[test]
    fn test_resolve_degenerate() {
        let rules = RuleTable::new(vec![SuffixRule::new("an", 2, "")]).unwrap();

        assert_eq!(resolve("an", &IrregularTable::new(), &rules), "an");
        assert_eq!(resolve("ban", &IrregularTable::new(), &rules), "ban");
        assert_eq!(resolve("bàan", &IrregularTable::new(), &rules), "bà");
    }

    #[test]
    fn test_resolve_no_rule() {
        assert_eq!(resolve("cù", &IrregularTable::new(), &RuleTable::gaelic()), "cù");
    }

    #[test]
    fn test_lemmatizer_explain() {
        let lemmatizer = lemmatizer();

        assert_eq!(
            lemmatizer.explain("rinn"),
            Resolution {
                lemma: "dèan".into(),
                source: Source::Irregular
            }
        );
        assert_eq!(
            lemmatizer.explain("bàtaichean"),
            Resolution {
                lemma: "bàta".into(),
                source: Source::Rule {
                    suffix: "aichean".into()
                }
            }
        );
        assert_eq!(
            lemmatizer.explain("ban"),
            Resolution {
                lemma: "ban".into(),
                source: Source::Degenerate {
                    suffix: "an".into()
                }
            }
        );
        assert_eq!(
            lemmatizer.explain("mhòr"),
            Resolution {
                lemma: "mòr".into(),
                source: Source::Canonical
            }
        );
    }

    #[test]
    fn test_lemmatizer_matches_resolve() {
        let lemmatizer = lemmatizer();

        for token in ["bha", "eilein", "cailleachan", "h-òrain", "sinn-ne", "Taighean"] {
            assert_eq!(
                lemmatizer.lemmatize(token),
                resolve(token, &irregulars(), &RuleTable::gaelic())
            );
        }
    }

    #[test]
    fn test_lemmatizer_all_pairs() {
        let pairs = lemmatizer().lemmatize_all(["eilein", "bha", "cailleachan"]);

        assert_eq!(
            pairs,
            vec![
                ("eilein".to_string(), "eilean".to_string()),
                ("bha".to_string(), "bi".to_string()),
                ("cailleachan".to_string(), "cailleach".to_string()),
            ]
        );
    }

    #[test]
    fn test_lemmatizer_shared_across_threads() {
        let lemmatizer = lemmatizer();

        let handles = (0..4)
            .map(|_| {
                let lemmatizer = lemmatizer.clone();
                std::thread::spawn(move || lemmatizer.lemmatize("òran"))
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "òr");
        }
    }

    proptest! {
        #[test]
        fn test_resolve_deterministic(word in "[a-zàèìòùáéíóú-]{1,12}") {
            let first = resolve(&word, &irregulars(), &RuleTable::gaelic());
            let second = resolve(&word, &irregulars(), &RuleTable::gaelic());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_resolve_irregular_wins(word in "[a-z]{1,12}", lemma in "[a-z]{1,12}") {
            let table = IrregularTable::from_pairs([(word.clone(), lemma.clone())]).unwrap();
            prop_assert_eq!(resolve(&word, &table, &RuleTable::gaelic()), lemma);
        }

        #[test]
        fn test_resolve_guard(word in "[a-z]{1,12}") {
            let lemma = resolve(&word, &IrregularTable::new(), &RuleTable::gaelic());
            let canonical = crate::normalizer::normalize(&word);
            prop_assert!(lemma.chars().count() > 1 || lemma == canonical);
        }
    }
}
