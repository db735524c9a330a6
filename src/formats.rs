//! Format trait and implementations for different article sources.
//!
//! This module defines the `Format` trait which abstracts over the tokenizers that feed the
//! section tree builder: the plain-text extract served by the MediaWiki API, markdown parsed
//! with tree-sitter, and pre-tokenized JSON streams from an external tokenizer.

pub mod markdown;
pub mod tokens;
pub mod wikitext;

use crate::error::Result;
use crate::token::Token;

/// A tokenizer producing heading and text tokens in document order.
pub trait Format {
    /// Short name used on the command line.
    fn name(&self) -> &'static str;

    /// Tokenize a whole source document.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed in this format.
    fn tokenize(&self, source: &str) -> Result<Vec<Token>>;
}
