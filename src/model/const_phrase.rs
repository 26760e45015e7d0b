//! Constant phrases: lexemes that never appear apart from each other.
//!
//! Two mechanisms live here. The general one groups lexeme IDs sharing an
//! identical existence area and collapses each group into its lowest ID. The
//! word-level one fuses adjacent word pairs that always occur together and is
//! available as a pre-pass over tokenized text.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use super::existence::{calculate_existence_areas, ExistenceAreas};
use super::indexer::Sentence;
use super::lexicon::{Lexicon, LexemeId};
use crate::errors::Result;

/// Groups of two or more lexemes with identical existence areas. IDs inside a
/// group ascend; groups are ordered by their lowest ID.
pub fn extract_constant_phrases(areas: &ExistenceAreas) -> Vec<Vec<LexemeId>> {
    let mut by_area: BTreeMap<&[usize], Vec<LexemeId>> = BTreeMap::new();
    for (id, area) in areas {
        if area.is_empty() {
            continue;
        }
        by_area.entry(area.as_slice()).or_default().push(*id);
    }
    let mut groups: Vec<Vec<LexemeId>> = by_area
        .into_values()
        .filter(|group| group.len() > 1)
        .collect();
    groups.sort_by_key(|group| group[0]);
    groups
}

/// Collapses every group into its first ID: the survivor takes the joined
/// surfaces of the group, the other members leave the lexicon and are
/// rewritten out of the sentences.
pub fn merge_constant_phrases(
    lexicon: &mut Lexicon,
    text: &mut [Sentence],
    groups: &[Vec<LexemeId>],
) -> Result<()> {
    let mut replace_map: HashMap<LexemeId, LexemeId> = HashMap::new();
    for group in groups {
        let Some((&survivor, members)) = group.split_first() else {
            continue;
        };
        let phrase = group
            .iter()
            .map(|&id| lexicon.surface(id))
            .collect::<Result<Vec<&str>>>()?
            .join(" ");
        for &member in members {
            lexicon.remove(member)?;
            replace_map.insert(member, survivor);
        }
        lexicon.rename(survivor, &phrase)?;
        debug!("constant phrase {:?} -> {} '{}'", group, survivor, phrase);
    }

    for sentence in text.iter_mut() {
        sentence.lexeme_ids = rewrite_ids(&sentence.lexeme_ids, &replace_map);
    }
    Ok(())
}

/// Substitutes merged IDs and collapses the adjacent duplicates the
/// substitution creates. Repeats already present in the input stay.
fn rewrite_ids(ids: &[LexemeId], replace_map: &HashMap<LexemeId, LexemeId>) -> Vec<LexemeId> {
    let mut rewritten: Vec<LexemeId> = Vec::with_capacity(ids.len());
    let mut previous_replaced = false;
    for &id in ids {
        let (new_id, replaced) = match replace_map.get(&id) {
            Some(&survivor) => (survivor, true),
            None => (id, false),
        };
        if rewritten.last() == Some(&new_id) && (replaced || previous_replaced) {
            previous_replaced = true;
            continue;
        }
        rewritten.push(new_id);
        previous_replaced = replaced;
    }
    rewritten
}

/// Merges constant phrases until no two lexemes share an existence area.
/// `areas` is kept fresh after every round. Returns the number of groups merged.
pub fn merge_to_fixpoint(
    lexicon: &mut Lexicon,
    text: &mut [Sentence],
    areas: &mut ExistenceAreas,
) -> Result<usize> {
    let mut merged = 0;
    let mut changed = true;
    while changed {
        let groups = extract_constant_phrases(areas);
        changed = !groups.is_empty();
        if changed {
            merge_constant_phrases(lexicon, text, &groups)?;
            *areas = calculate_existence_areas(text, lexicon);
            merged += groups.len();
        }
    }
    Ok(merged)
}

/// Repeatedly fuses adjacent word pairs whose pair count equals the count of
/// each of their words, until no such pair is left.
pub fn merge_constant_bigrams(sentences: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut text = sentences.to_vec();
    let mut changed = true;
    while changed {
        match fuse_constant_bigrams(&text) {
            Some(next) => text = next,
            None => changed = false,
        }
    }
    text
}

fn fuse_constant_bigrams(text: &[Vec<String>]) -> Option<Vec<Vec<String>>> {
    let mut unigram_freqs: HashMap<&str, usize> = HashMap::new();
    let mut bigram_freqs: HashMap<(&str, &str), usize> = HashMap::new();
    for sentence in text {
        for word in sentence {
            *unigram_freqs.entry(word.as_str()).or_insert(0) += 1;
        }
        for pair in sentence.windows(2) {
            *bigram_freqs.entry((pair[0].as_str(), pair[1].as_str())).or_insert(0) += 1;
        }
    }

    let constant: HashSet<(&str, &str)> = bigram_freqs
        .iter()
        .filter(|&(&(first, second), &count)| {
            unigram_freqs.get(first) == Some(&count) && unigram_freqs.get(second) == Some(&count)
        })
        .map(|(&pair, _)| pair)
        .collect();
    if constant.is_empty() {
        return None;
    }

    let fused = text
        .iter()
        .map(|sentence| {
            let mut out = Vec::with_capacity(sentence.len());
            let mut i = 0;
            while i < sentence.len() {
                if i + 1 < sentence.len()
                    && constant.contains(&(sentence[i].as_str(), sentence[i + 1].as_str()))
                {
                    out.push(format!("{} {}", sentence[i], sentence[i + 1]));
                    i += 2;
                } else {
                    out.push(sentence[i].clone());
                    i += 1;
                }
            }
            out
        })
        .collect();
    Some(fused)
}
