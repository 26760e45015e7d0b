//! Sentences rewritten as lexeme ID sequences.

use serde::Serialize;

use super::lexicon::{Lexicon, LexemeId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Position among the surviving sentences, in document order.
    pub index: usize,
    pub lexeme_ids: Vec<LexemeId>,
}

/// Maps every word to its lexeme ID, dropping words outside the lexicon and
/// sentences left with nothing.
pub fn build_text_index(sentences: &[Vec<String>], lexicon: &Lexicon) -> Vec<Sentence> {
    sentences
        .iter()
        .map(|words| {
            words
                .iter()
                .filter_map(|word| lexicon.get_id(word))
                .collect::<Vec<LexemeId>>()
        })
        .filter(|ids| !ids.is_empty())
        .enumerate()
        .map(|(index, lexeme_ids)| Sentence { index, lexeme_ids })
        .collect()
}

/// Drops references to removed lexemes, deletes emptied sentences and
/// re-indexes the survivors densely.
pub fn refresh_text_index(text: &mut Vec<Sentence>, lexicon: &Lexicon) {
    for sentence in text.iter_mut() {
        sentence.lexeme_ids.retain(|&id| lexicon.is_active(id));
    }
    text.retain(|sentence| !sentence.lexeme_ids.is_empty());
    for (index, sentence) in text.iter_mut().enumerate() {
        sentence.index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unknown_words_and_empty_sentences_are_dropped() {
        let lexicon = Lexicon::from_surfaces(["sun", "sea"]);
        let sentences = vec![
            words(&["the", "sun", "and", "sea", "sun"]),
            words(&["nothing", "here"]),
            words(&["sea"]),
        ];
        let text = build_text_index(&sentences, &lexicon);
        assert_eq!(
            text,
            vec![
                Sentence { index: 0, lexeme_ids: vec![0, 1, 0] },
                Sentence { index: 1, lexeme_ids: vec![1] },
            ]
        );
    }

    #[test]
    fn refresh_follows_lexicon_removals() {
        let mut lexicon = Lexicon::from_surfaces(["sun", "sea", "sky"]);
        let mut text = vec![
            Sentence { index: 0, lexeme_ids: vec![0, 1] },
            Sentence { index: 1, lexeme_ids: vec![1, 1] },
            Sentence { index: 2, lexeme_ids: vec![2, 0] },
        ];
        lexicon.remove(1).unwrap();
        refresh_text_index(&mut text, &lexicon);
        assert_eq!(
            text,
            vec![
                Sentence { index: 0, lexeme_ids: vec![0] },
                Sentence { index: 1, lexeme_ids: vec![2, 0] },
            ]
        );
    }
}
