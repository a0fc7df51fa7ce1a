use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gdlemma::{normalize, resolve, IrregularTable, Lemmatizer, RuleTable};

fn get_test_tokens() -> Vec<String> {
    [
        "bha", "taighean", "eilein", "t-each", "cás", "bàtaichean", "cailleachan", "mhòr",
        "iad-san", "h-uile", "òran", "chaidh",
    ]
    .iter()
    .cycle()
    .take(1_200)
    .map(|token| token.to_string())
    .collect::<Vec<_>>()
}

fn bench_lemmatize(c: &mut Criterion) {
    let tokens = black_box(get_test_tokens());
    let irregulars = IrregularTable::from_pairs([("bha", "bi"), ("chaidh", "rach")]).unwrap();
    let rules = RuleTable::gaelic();

    c.bench_function("normalize", |b| {
        b.iter(|| tokens.iter().map(|token| normalize(token)).count())
    });

    c.bench_function("resolve", |b| {
        b.iter(|| {
            tokens
                .iter()
                .map(|token| resolve(token, &irregulars, &rules))
                .count()
        })
    });

    let lemmatizer = Lemmatizer::new(Arc::new(irregulars.clone()), Arc::new(rules.clone()));
    c.bench_function("lemmatizer", |b| {
        b.iter(|| tokens.iter().map(|token| lemmatizer.lemmatize(token)).count())
    });
}

criterion_group!(benches, bench_lemmatize);
criterion_main!(benches);
