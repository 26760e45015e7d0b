//! Existence areas: the sentences each lexeme lives in.

use std::collections::BTreeMap;

use super::indexer::Sentence;
use super::lexicon::{Lexicon, LexemeId};
use crate::errors::{ModelError, Result};

/// Lexeme ID -> ascending sentence indices containing it, one entry per
/// active lexeme.
pub type ExistenceAreas = BTreeMap<LexemeId, Vec<usize>>;

/// Recomputes every area from scratch. A sentence is recorded once per lexeme
/// however often the lexeme repeats in it.
pub fn calculate_existence_areas(text: &[Sentence], lexicon: &Lexicon) -> ExistenceAreas {
    let mut areas: ExistenceAreas = lexicon.active_ids().map(|id| (id, Vec::new())).collect();
    for sentence in text {
        for id in &sentence.lexeme_ids {
            if let Some(area) = areas.get_mut(id) {
                if area.last() != Some(&sentence.index) {
                    area.push(sentence.index);
                }
            }
        }
    }
    for area in areas.values_mut() {
        area.sort_unstable();
        area.dedup();
    }
    areas
}

pub fn area_of(areas: &ExistenceAreas, id: LexemeId) -> Result<&[usize]> {
    areas.get(&id).map(Vec::as_slice).ok_or_else(|| {
        ModelError::InvariantViolation(format!("no existence area for lexeme {}", id))
    })
}
