//! Reduced-text and ranked dumps of a built model.

use serde::Serialize;

use crate::config::OutputConfig;
use crate::errors::Result;
use crate::model::power::is_dominant;
use crate::model::AssociativeModel;

/// Surviving sentences as one flat token stream: each sentence's surfaces
/// followed by the terminator, all joined by the separator.
pub fn text_as_string(model: &AssociativeModel, output: &OutputConfig) -> Result<String> {
    let mut result_text: Vec<&str> = Vec::new();
    for sentence in model.sentences() {
        for &id in &sentence.lexeme_ids {
            result_text.push(model.lexicon().surface(id)?);
        }
        result_text.push(&output.terminator);
    }
    Ok(result_text.join(output.separator.as_str()))
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub surface: String,
    pub power: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RankedDump {
    pub critical_power: f64,
    pub dominant: Vec<RankedEntry>,
    pub non_dominant: Vec<RankedEntry>,
}

/// Every scored lexeme, strongest first (ties by ID), split at the critical power.
pub fn ranked_dump(model: &AssociativeModel) -> RankedDump {
    let mut scored = model.scored_lexemes().to_vec();
    scored.sort_by(|a, b| b.power.cmp(&a.power).then(a.id.cmp(&b.id)));

    let critical = model.critical_power();
    let (dominant, non_dominant): (Vec<_>, Vec<_>) = scored
        .into_iter()
        .map(|lexeme| RankedEntry {
            surface: lexeme.surface,
            power: lexeme.power,
        })
        .partition(|entry| is_dominant(entry.power, critical));

    RankedDump {
        critical_power: critical,
        dominant,
        non_dominant,
    }
}

impl RankedDump {
    /// Two tab-separated lists, one `surface<TAB>power` line per lexeme.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# critical power {}\n", self.critical_power));
        out.push_str("# dominant\n");
        for entry in &self.dominant {
            out.push_str(&format!("{}\t{}\n", entry.surface, entry.power));
        }
        out.push_str("# non-dominant\n");
        for entry in &self.non_dominant {
            out.push_str(&format!("{}\t{}\n", entry.surface, entry.power));
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
