//! Associative lexical model builder.
//!
//! Takes a document already split into sentences of normalized words and keeps
//! the lexemes (and constant phrases) that dominate its co-occurrence
//! structure: full link set, existence areas, attributive filtering,
//! constant-phrase merging, associative power and the dominance cut.

pub mod config;
pub mod errors;
pub mod types {
    pub mod text_data;
}
pub mod parsing {
    pub mod raw_text;
    pub use raw_text::{join_lines, tokenize_document, tokenize_sentences};
}
pub mod stopwords;
pub mod model;
pub mod output;

pub use config::ModelConfig;
pub use errors::{ModelError, Result};
pub use model::AssociativeModel;
pub use output::{ranked_dump, text_as_string, RankedDump};
