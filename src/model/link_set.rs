//! Full link set extraction: the words that tie at least two sentences together.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::lexicon::Lexicon;

/// One word of the full link set, with the diagnostics it was selected by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSetEntry {
    pub surface: String,
    /// Document-wide token position of the first occurrence.
    pub first_position: usize,
    /// Number of distinct sentences containing the word.
    pub sentence_count: usize,
}

/// Non-stopword words found in more than one sentence, ordered by first
/// appearance. Every token consumes a position, stopwords and repeats included,
/// and a word repeated inside one sentence is counted once.
pub fn extract_full_link_set(
    sentences: &[Vec<String>],
    stopwords: &HashSet<String>,
) -> Vec<LinkSetEntry> {
    let mut first_positions: HashMap<&str, usize> = HashMap::new();
    let mut sentence_counts: HashMap<&str, usize> = HashMap::new();

    let mut position = 0usize;
    for sentence in sentences {
        let mut seen_in_sentence: HashSet<&str> = HashSet::new();
        for word in sentence {
            let word_position = position;
            position += 1;
            if !seen_in_sentence.insert(word.as_str()) {
                continue;
            }
            if stopwords.contains(word.as_str()) {
                continue;
            }
            first_positions.entry(word.as_str()).or_insert(word_position);
            *sentence_counts.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<LinkSetEntry> = first_positions
        .into_iter()
        .filter_map(|(word, first_position)| {
            let sentence_count = sentence_counts.get(word).copied().unwrap_or(0);
            (sentence_count > 1).then(|| LinkSetEntry {
                surface: word.to_string(),
                first_position,
                sentence_count,
            })
        })
        .collect();
    entries.sort_by_key(|entry| entry.first_position);
    entries
}

impl Lexicon {
    /// Lexicon whose IDs are the link set order.
    pub fn from_link_set(entries: &[LinkSetEntry]) -> Self {
        Lexicon::from_surfaces(entries.iter().map(|entry| entry.surface.as_str()))
    }
}
