//! Stopword lookup per language.
//!
//! Only English ships built in (the NLTK English corpus list). Any other
//! language needs a `stopwords_file` in the configuration.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::{ModelError, Result};

pub const DEFAULT_LANGUAGE: &str = "english";

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Built-in stopword set for `language`.
pub fn stopwords_for(language: &str) -> Result<HashSet<String>> {
    match language.trim().to_lowercase().as_str() {
        "english" | "en" => Ok(ENGLISH.iter().map(|s| s.to_string()).collect()),
        other => Err(ModelError::UnsupportedLanguage(other.to_string())),
    }
}

/// Reads a stopword list, one word per line. Words are trimmed and lowercased;
/// blank lines and `#` comments are skipped.
pub fn load_stopwords_file(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path)?;
    let set: HashSet<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();
    if set.is_empty() {
        warn!("stopword file {} holds no words; nothing will be filtered", path.display());
    }
    debug!("loaded {} stopwords from {}", set.len(), path.display());
    Ok(set)
}

/// Drops stopwords from every sentence and removes sentences left empty.
pub fn remove_stopwords(
    sentences: &[Vec<String>],
    stopwords: &HashSet<String>,
) -> Vec<Vec<String>> {
    sentences
        .iter()
        .map(|sentence| {
            sentence
                .iter()
                .filter(|word| !stopwords.contains(word.as_str()))
                .cloned()
                .collect::<Vec<String>>()
        })
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
