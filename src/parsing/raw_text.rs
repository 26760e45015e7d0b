//! Default raw-text tokenizer used by the CLI.
//!
//! Sentences end at runs of `.`, `!` or `?`. Words are runs of word characters,
//! lowercased; punctuation-only tokens never survive.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::types::text_data::TokenizedDocument;

fn sentence_end_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence terminator pattern"))
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("word pattern"))
}

/// Joins the trimmed lines of a file into one space-separated text.
pub fn join_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Splits raw text into sentences of lowercase words. Sentences without any
/// word are dropped.
pub fn tokenize_sentences(raw_text: &str) -> Vec<Vec<String>> {
    sentence_end_re()
        .split(raw_text)
        .map(|chunk| {
            word_re()
                .find_iter(chunk)
                .map(|m| m.as_str().to_lowercase())
                .collect::<Vec<String>>()
        })
        .filter(|words| !words.is_empty())
        .collect()
}

pub fn tokenize_document(source_name: &str, raw: &str) -> TokenizedDocument {
    let sentences = tokenize_sentences(&join_lines(raw));
    let document = TokenizedDocument::new(source_name, sentences);
    debug!(
        "tokenized {}: {} sentences, {} words",
        source_name,
        document.sentences.len(),
        document.word_count()
    );
    document
}
