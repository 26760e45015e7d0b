use serde::Serialize;

/// A document after tokenization: ordered sentences of lowercase words.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TokenizedDocument {
    pub source_name: String,
    pub sentences: Vec<Vec<String>>,
}

impl TokenizedDocument {
    pub fn new(source_name: &str, sentences: Vec<Vec<String>>) -> Self {
        Self {
            source_name: source_name.to_string(),
            sentences,
        }
    }

    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }
}
