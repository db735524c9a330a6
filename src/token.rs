//! Token stream handed to the section tree builder by a tokenizer.
//!
//! Tokenizers (see [`crate::formats`]) reduce raw article markup to a flat,
//! document-ordered sequence of headings and text runs. Anything a tokenizer
//! cannot classify as either is passed through as [`Token::Other`] so that the
//! builder can refuse it rather than silently lose structure.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// One unit of tokenized article markup, in document order.
pub enum Token {
    /// Section heading at a nesting level (1 for top-level).
    Heading {
        /// Nesting depth as reported by the tokenizer, accepted as given.
        level: usize,
        /// Heading text, possibly with surrounding whitespace.
        title: String,
    },
    /// Run of plain text between headings.
    Text {
        /// Raw text, possibly spanning several lines.
        content: String,
    },
    /// Token shape the tokenizer emitted but the builder does not understand.
    ///
    /// Serialized as `{"kind": "other", "name": ...}`; `kind` is taken by the tag.
    Other {
        /// Tokenizer-specific kind name, kept for error reporting.
        name: String,
    },
}

impl Token {
    #[must_use]
    /// Convenience constructor for a heading token.
    pub fn heading(level: usize, title: impl Into<String>) -> Self {
        Self::Heading {
            level,
            title: title.into(),
        }
    }

    #[must_use]
    /// Convenience constructor for a text token.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }
}
