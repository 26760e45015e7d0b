//! The associative model: one document taken through every stage.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::attributive::find_attributive_lexemes;
use super::const_phrase::{merge_constant_bigrams, merge_to_fixpoint};
use super::existence::{area_of, calculate_existence_areas, ExistenceAreas};
use super::indexer::{build_text_index, refresh_text_index, Sentence};
use super::lexicon::{Lexicon, LexemeId};
use super::link_set::{extract_full_link_set, LinkSetEntry};
use super::power::{
    calculate_associative_powers, critical_power, extract_dominants, AssociativePowers,
};
use crate::config::ModelConfig;
use crate::errors::{ModelError, Result};
use crate::stopwords::remove_stopwords;

/// A lexeme as it stood when associative power was measured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLexeme {
    pub id: LexemeId,
    pub surface: String,
    pub power: usize,
}

/// Active lexeme and sentence counts after each stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StageStats {
    pub link_set: usize,
    pub indexed_sentences: usize,
    pub attributive_removed: usize,
    pub phrases_merged: usize,
    pub scored: usize,
    pub dominant: usize,
    pub final_sentences: usize,
}

#[derive(Debug, Clone)]
pub struct AssociativeModel {
    link_set: Vec<LinkSetEntry>,
    lexicon: Lexicon,
    sentences: Vec<Sentence>,
    existence_areas: ExistenceAreas,
    scored: Vec<ScoredLexeme>,
    critical_power: f64,
    stats: StageStats,
}

impl AssociativeModel {
    /// Runs the whole pipeline over tokenized `sentences`.
    pub fn build(
        sentences: &[Vec<String>],
        stopwords: &HashSet<String>,
        config: &ModelConfig,
    ) -> Result<Self> {
        let mut model = Self::reduce(sentences, stopwords, config)?;
        let powers = model.calculate_associative_power()?;
        model.remove_nondominants(&powers, config)?;
        debug!("model stats: {:?}", model.stats);
        Ok(model)
    }

    /// Every stage up to and including constant-phrase merging. Rebuilding
    /// from the surfaces of a reduced model reduces to the same sentences;
    /// the dominance cut does not share that property.
    pub fn reduce(
        sentences: &[Vec<String>],
        stopwords: &HashSet<String>,
        config: &ModelConfig,
    ) -> Result<Self> {
        let mut model = Self::index(sentences, stopwords, config)?;
        model.remove_attributive_lexemes()?;
        model.merge_constant_phrases()?;
        Ok(model)
    }

    /// Link set extraction and text indexing only, with fresh existence areas.
    pub fn index(
        sentences: &[Vec<String>],
        stopwords: &HashSet<String>,
        config: &ModelConfig,
    ) -> Result<Self> {
        let merged;
        let source: &[Vec<String>] = if config.merge_bigrams {
            merged = merge_constant_bigrams(&remove_stopwords(sentences, stopwords));
            &merged
        } else {
            sentences
        };

        let link_set = extract_full_link_set(source, stopwords);
        let lexicon = Lexicon::from_link_set(&link_set);
        let text = build_text_index(source, &lexicon);
        let existence_areas = calculate_existence_areas(&text, &lexicon);
        if lexicon.is_empty() {
            debug!("no word links two sentences; the model stays empty");
        }
        debug!(
            "full link set: {} lexemes over {} indexed sentences",
            lexicon.active_count(),
            text.len()
        );

        let model = Self {
            stats: StageStats {
                link_set: link_set.len(),
                indexed_sentences: text.len(),
                ..StageStats::default()
            },
            link_set,
            lexicon,
            sentences: text,
            existence_areas,
            scored: Vec::new(),
            critical_power: 0.0,
        };
        model.verify_invariants()?;
        Ok(model)
    }

    /// Re-syncs sentences and existence areas with the lexicon.
    fn refresh(&mut self) -> Result<()> {
        refresh_text_index(&mut self.sentences, &self.lexicon);
        self.existence_areas = calculate_existence_areas(&self.sentences, &self.lexicon);
        self.verify_invariants()
    }

    pub fn remove_attributive_lexemes(&mut self) -> Result<Vec<LexemeId>> {
        let attributive = find_attributive_lexemes(&self.existence_areas);
        for &id in &attributive {
            self.lexicon.remove(id)?;
        }
        self.refresh()?;
        self.stats.attributive_removed = attributive.len();
        debug!(
            "removed {} attributive lexemes, {} remain",
            attributive.len(),
            self.lexicon.active_count()
        );
        Ok(attributive)
    }

    pub fn merge_constant_phrases(&mut self) -> Result<usize> {
        let merged = merge_to_fixpoint(
            &mut self.lexicon,
            &mut self.sentences,
            &mut self.existence_areas,
        )?;
        self.refresh()?;
        self.stats.phrases_merged = merged;
        debug!(
            "merged {} constant phrases, {} lexemes remain",
            merged,
            self.lexicon.active_count()
        );
        Ok(merged)
    }

    pub fn calculate_associative_power(&mut self) -> Result<AssociativePowers> {
        let powers = calculate_associative_powers(&self.sentences, &self.existence_areas)?;
        self.scored = powers
            .iter()
            .map(|(&id, &power)| {
                Ok(ScoredLexeme {
                    id,
                    surface: self.lexicon.surface(id)?.to_string(),
                    power,
                })
            })
            .collect::<Result<Vec<ScoredLexeme>>>()?;
        self.stats.scored = self.scored.len();
        Ok(powers)
    }

    pub fn remove_nondominants(
        &mut self,
        powers: &AssociativePowers,
        config: &ModelConfig,
    ) -> Result<Vec<LexemeId>> {
        self.critical_power = critical_power(powers, &config.dominance);
        let dominant: HashSet<LexemeId> = extract_dominants(powers, self.critical_power)
            .into_iter()
            .collect();
        let nondominant: Vec<LexemeId> = self
            .lexicon
            .active_ids()
            .filter(|id| !dominant.contains(id))
            .collect();
        for &id in &nondominant {
            self.lexicon.remove(id)?;
        }
        self.refresh()?;
        self.stats.dominant = self.lexicon.active_count();
        self.stats.final_sentences = self.sentences.len();
        debug!(
            "critical power {:.1}: {} dominant, {} dropped",
            self.critical_power,
            dominant.len(),
            nondominant.len()
        );
        Ok(nondominant)
    }

    /// Checks that sentences only reference active lexemes, that no sentence is
    /// empty and that the existence areas match the current state.
    pub fn verify_invariants(&self) -> Result<()> {
        for sentence in &self.sentences {
            if sentence.lexeme_ids.is_empty() {
                return Err(ModelError::InvariantViolation(format!(
                    "sentence {} is empty",
                    sentence.index
                )));
            }
            for &id in &sentence.lexeme_ids {
                if !self.lexicon.is_active(id) {
                    return Err(ModelError::InvariantViolation(format!(
                        "sentence {} references inactive lexeme {}",
                        sentence.index, id
                    )));
                }
            }
        }
        let fresh = calculate_existence_areas(&self.sentences, &self.lexicon);
        if self.existence_areas.len() != fresh.len() {
            return Err(ModelError::InvariantViolation(format!(
                "{} existence areas for {} active lexemes",
                self.existence_areas.len(),
                fresh.len()
            )));
        }
        for id in self.lexicon.active_ids() {
            let held = area_of(&self.existence_areas, id)?;
            let expected = area_of(&fresh, id)?;
            if held != expected {
                return Err(ModelError::InvariantViolation(format!(
                    "existence area of lexeme {} is stale: {:?}, expected {:?}",
                    id, held, expected
                )));
            }
        }
        Ok(())
    }

    pub fn link_set(&self) -> &[LinkSetEntry] {
        &self.link_set
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn existence_areas(&self) -> &ExistenceAreas {
        &self.existence_areas
    }

    /// Every lexeme that reached the power stage, in ID order.
    pub fn scored_lexemes(&self) -> &[ScoredLexeme] {
        &self.scored
    }

    pub fn critical_power(&self) -> f64 {
        self.critical_power
    }

    pub fn stats(&self) -> &StageStats {
        &self.stats
    }

    /// Surfaces of the remaining sentences, in order.
    pub fn sentence_surfaces(&self) -> Result<Vec<Vec<String>>> {
        self.sentences
            .iter()
            .map(|sentence| {
                sentence
                    .lexeme_ids
                    .iter()
                    .map(|&id| self.lexicon.surface(id).map(str::to_string))
                    .collect()
            })
            .collect()
    }
}
