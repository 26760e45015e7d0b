use std::collections::HashMap;

use crate::errors::{ModelError, Result};

/// Stable integer handle of a lexeme. IDs are indices into the lexicon and are
/// never reused within one model.
pub type LexemeId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct LexemeRecord {
    pub surface: String,
    pub active: bool,
}

/// All lexemes of one document, active or removed.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    records: Vec<LexemeRecord>, // Index is the LexemeId
    str_to_id: HashMap<String, LexemeId>, // Active lexemes only
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon {
            records: Vec::new(),
            str_to_id: HashMap::new(),
        }
    }

    /// Builds a lexicon whose IDs follow the order of `surfaces`, starting at 0.
    pub fn from_surfaces<I, S>(surfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for surface in surfaces {
            lexicon.get_id_or_insert(surface.as_ref());
        }
        lexicon
    }

    /// Gets the ID of an active surface form, assigning the next ID if it is new.
    pub fn get_id_or_insert(&mut self, surface: &str) -> LexemeId {
        if let Some(id) = self.str_to_id.get(surface) {
            return *id;
        }
        let id = self.records.len() as LexemeId;
        self.str_to_id.insert(surface.to_string(), id);
        self.records.push(LexemeRecord {
            surface: surface.to_string(),
            active: true,
        });
        id
    }

    /// Gets the ID for an active surface form. This method does not add lexemes.
    pub fn get_id(&self, surface: &str) -> Option<LexemeId> {
        self.str_to_id.get(surface).copied()
    }

    pub fn is_active(&self, id: LexemeId) -> bool {
        self.records
            .get(id as usize)
            .map_or(false, |record| record.active)
    }

    /// Surface form of an active lexeme. Asking for a removed or unknown ID is
    /// an invariant violation.
    pub fn surface(&self, id: LexemeId) -> Result<&str> {
        match self.records.get(id as usize) {
            Some(record) if record.active => Ok(&record.surface),
            Some(record) => Err(ModelError::InvariantViolation(format!(
                "lexeme {} ('{}') was already removed",
                id, record.surface
            ))),
            None => Err(ModelError::InvariantViolation(format!(
                "lexeme {} was never assigned",
                id
            ))),
        }
    }

    /// Active IDs in ascending order.
    pub fn active_ids(&self) -> impl Iterator<Item = LexemeId> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.active)
            .map(|(id, _)| id as LexemeId)
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|record| record.active).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn remove(&mut self, id: LexemeId) -> Result<()> {
        let surface = self.surface(id)?.to_string();
        if self.str_to_id.get(&surface) == Some(&id) {
            self.str_to_id.remove(&surface);
        }
        self.records[id as usize].active = false;
        Ok(())
    }

    /// Replaces the surface form of an active lexeme, keeping its ID. The new
    /// surface must not already name another active lexeme.
    pub fn rename(&mut self, id: LexemeId, surface: &str) -> Result<()> {
        let old = self.surface(id)?.to_string();
        if let Some(&holder) = self.str_to_id.get(surface) {
            if holder != id {
                return Err(ModelError::InvariantViolation(format!(
                    "cannot rename lexeme {} to '{}': already lexeme {}",
                    id, surface, holder
                )));
            }
        }
        if self.str_to_id.get(&old) == Some(&id) {
            self.str_to_id.remove(&old);
        }
        self.str_to_id.insert(surface.to_string(), id);
        self.records[id as usize].surface = surface.to_string();
        Ok(())
    }
}
