pub mod lexicon;
pub mod link_set;
pub mod indexer;
pub mod existence;
pub mod attributive;
pub mod const_phrase;
pub mod power;
pub mod builder;

// Re-export the items the CLI and output layer reach for
pub use builder::{AssociativeModel, ScoredLexeme, StageStats};
pub use existence::ExistenceAreas;
pub use indexer::Sentence;
pub use lexicon::{Lexicon, LexemeId};
pub use link_set::LinkSetEntry;
