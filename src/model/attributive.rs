//! Attributive lexemes: words whose whole context sits inside a broader word's.

use super::existence::ExistenceAreas;
use super::lexicon::LexemeId;

/// `target` is attributive to `other` when it is a subset of `other` and
/// `other` has at least one sentence more. Both slices are sorted.
pub fn is_attributive(target: &[usize], other: &[usize]) -> bool {
    target.len() < other.len() && target.iter().all(|s| other.binary_search(s).is_ok())
}

/// Every lexeme attributive to some other lexeme, judged against the areas as
/// given; nothing is recomputed between checks.
pub fn find_attributive_lexemes(areas: &ExistenceAreas) -> Vec<LexemeId> {
    areas
        .iter()
        .filter(|(id, area)| {
            areas
                .iter()
                .any(|(other_id, other_area)| other_id != *id && is_attributive(area, other_area))
        })
        .map(|(id, _)| *id)
        .collect()
}
