//! Associative power and the dominance cut.

use std::collections::{BTreeMap, BTreeSet};

use super::existence::ExistenceAreas;
use super::indexer::Sentence;
use super::lexicon::LexemeId;
use crate::config::DominanceConfig;
use crate::errors::{ModelError, Result};

pub type AssociativePowers = BTreeMap<LexemeId, usize>;

fn sentence_at(text: &[Sentence], index: usize) -> Result<&Sentence> {
    text.binary_search_by_key(&index, |sentence| sentence.index)
        .map(|pos| &text[pos])
        .map_err(|_| {
            ModelError::InvariantViolation(format!(
                "existence area points at missing sentence {}",
                index
            ))
        })
}

/// Distinct lexemes sharing a sentence with `id`, the generative sentence
/// (first of `area`) left out.
pub fn lexeme_associative_power(
    id: LexemeId,
    area: &[usize],
    text: &[Sentence],
) -> Result<usize> {
    let mut adjacent: BTreeSet<LexemeId> = BTreeSet::new();
    for &index in area.iter().skip(1) {
        adjacent.extend(sentence_at(text, index)?.lexeme_ids.iter().copied());
    }
    adjacent.remove(&id);
    Ok(adjacent.len())
}

pub fn calculate_associative_powers(
    text: &[Sentence],
    areas: &ExistenceAreas,
) -> Result<AssociativePowers> {
    areas
        .iter()
        .map(|(&id, area)| Ok((id, lexeme_associative_power(id, area, text)?)))
        .collect()
}

/// `base + rank_factor * R`, with R the number of distinct power values.
pub fn critical_power(powers: &AssociativePowers, dominance: &DominanceConfig) -> f64 {
    let ranks = powers.values().collect::<BTreeSet<_>>().len();
    dominance.base + dominance.rank_factor * ranks as f64
}

pub fn is_dominant(power: usize, critical: f64) -> bool {
    power as f64 > critical
}

pub fn extract_dominants(powers: &AssociativePowers, critical: f64) -> Vec<LexemeId> {
    powers
        .iter()
        .filter(|&(_, &power)| is_dominant(power, critical))
        .map(|(&id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::existence::calculate_existence_areas;
    use crate::model::lexicon::Lexicon;

    fn indexed(sentences: &[&[LexemeId]]) -> Vec<Sentence> {
        sentences
            .iter()
            .enumerate()
            .map(|(index, ids)| Sentence { index, lexeme_ids: ids.to_vec() })
            .collect()
    }

    #[test]
    fn generative_sentence_is_not_counted() {
        let lexicon = Lexicon::from_surfaces(["a", "b", "c", "d"]);
        let text = indexed(&[&[0, 1, 2], &[0, 3], &[3, 1]]);
        let areas = calculate_existence_areas(&text, &lexicon);
        let powers = calculate_associative_powers(&text, &areas).unwrap();
        // a: only sentence 1 counts -> {d}
        assert_eq!(powers[&0], 1);
        // b: sentence 2 -> {d}
        assert_eq!(powers[&1], 1);
        // c lives in its generative sentence only
        assert_eq!(powers[&2], 0);
        // d: sentence 2 -> {b}
        assert_eq!(powers[&3], 1);
    }

    #[test]
    fn critical_power_counts_distinct_values() {
        let powers: AssociativePowers = [(0, 3), (1, 3), (2, 2), (3, 0)].into_iter().collect();
        let c = critical_power(&powers, &DominanceConfig::default());
        assert_eq!(c, 2.5);
        assert_eq!(extract_dominants(&powers, c), vec![0, 1]);
    }

    #[test]
    fn power_equal_to_critical_is_not_dominant() {
        let powers: AssociativePowers = [(0, 3), (1, 2)].into_iter().collect();
        let c = critical_power(&powers, &DominanceConfig::default());
        assert_eq!(c, 2.0);
        assert!(!is_dominant(2, c));
        assert_eq!(extract_dominants(&powers, c), vec![0]);
    }

    #[test]
    fn stale_area_is_reported() {
        let text = indexed(&[&[0], &[0]]);
        let err = lexeme_associative_power(0, &[0, 5], &text).unwrap_err();
        assert!(matches!(err, ModelError::InvariantViolation(_)));
    }

    #[test]
    fn no_lexemes_no_ranks() {
        let powers = AssociativePowers::new();
        assert_eq!(critical_power(&powers, &DominanceConfig::default()), 1.0);
        assert!(extract_dominants(&powers, 1.0).is_empty());
    }
}
