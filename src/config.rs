use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::errors::{ModelError, Result};

/// Constants of the critical power `C = base + rank_factor * R`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DominanceConfig {
    pub base: f64,
    pub rank_factor: f64,
}

impl Default for DominanceConfig {
    fn default() -> Self {
        Self { base: 1.0, rank_factor: 0.5 }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub separator: String,
    pub terminator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
            terminator: ".".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Language tag used to pick the built-in stopword list.
    pub language: String,
    /// One stopword per line; replaces the built-in list when set.
    pub stopwords_file: Option<PathBuf>,
    /// Fuse constant word bigrams before the lexicon is built.
    pub merge_bigrams: bool,
    pub dominance: DominanceConfig,
    pub output: OutputConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            language: crate::stopwords::DEFAULT_LANGUAGE.to_string(),
            stopwords_file: None,
            merge_bigrams: false,
            dominance: DominanceConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl ModelConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.stopwords_file {
            if !path.is_file() {
                return Err(ModelError::Config(format!(
                    "stopwords_file '{}' is not a readable file",
                    path.display()
                )));
            }
        }
        let d = &self.dominance;
        if !d.base.is_finite() || !d.rank_factor.is_finite() || d.rank_factor < 0.0 {
            return Err(ModelError::Config(format!(
                "dominance constants must be finite with a non-negative rank_factor (base={}, rank_factor={})",
                d.base, d.rank_factor
            )));
        }
        Ok(())
    }
}

pub fn load_config_from_file(file_path: &str) -> Result<ModelConfig> {
    let contents = fs::read_to_string(file_path)?;
    let loaded_config = toml::from_str::<ModelConfig>(&contents)?;
    loaded_config.validate()?;
    Ok(loaded_config)
}
