use std::sync::Arc;

use gdlemma::{IrregularTable, Lemmatizer, RuleTable};

pub(crate) const IRREGULARS: &str = include_str!("../data/irregulars.json");

pub(crate) fn irregulars() -> IrregularTable {
    IrregularTable::from_json_str(IRREGULARS).unwrap()
}

pub(crate) fn lemmatizer() -> Lemmatizer {
    Lemmatizer::new(Arc::new(irregulars()), Arc::new(RuleTable::gaelic()))
}

pub(crate) fn get_test_corpus() -> Vec<String> {
    [
        "Bha an t-each anns an achadh.",
        "Chaidh na daoine dhan eilean.",
        "Tha na taighean mòra air an eilein.",
        "Chunnaic mi na bàtaichean agus na cailleachan.",
        "Rinn iad-san an obair.",
    ]
    .iter()
    .map(|document| document.to_string())
    .collect::<Vec<_>>()
}
