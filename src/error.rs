//! Error type shared by the extraction pipeline and its collaborators.

use thiserror::Error;

#[derive(Error, Debug)]
/// Everything that can go wrong between an article URL and its paragraphs.
pub enum ExtractError {
    /// A token was neither a heading nor a text run; the whole build is rejected.
    #[error("invalid token kind `{kind}` at position {position}")]
    InvalidTokenKind {
        /// Kind name reported by the tokenizer.
        kind: String,
        /// Zero-based index of the token in the stream.
        position: usize,
    },

    /// URL does not point at a Wikipedia article.
    #[error("{0} is not a valid wikipedia url")]
    InvalidUrl(String),

    /// The API answered without an extract for the requested title.
    #[error("no extract returned for {0}")]
    MissingExtract(String),

    /// A tokenizer could not parse its input.
    #[error("parse error: {0}")]
    Parse(String),

    /// JSON (API response or token stream) failed to deserialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request to the MediaWiki API failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;
