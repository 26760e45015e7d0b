//! Error types for the model builder.

use thiserror::Error;

/// Top-level error type for model building and its collaborators.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Reading the input text, a config file or a stopword file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration values that parse but make no sense.
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed TOML configuration.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON serialization of a dump failed.
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),

    /// No stopword list is known for the requested language.
    #[error("no stopword list for language '{0}'")]
    UnsupportedLanguage(String),

    /// A removed lexeme (or its existence area) was referenced.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
