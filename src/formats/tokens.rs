//! Pre-tokenized JSON streams from an external wikitext tokenizer.
//!
//! Accepts either a JSON array of token objects or newline-delimited JSON (one object per
//! line). Objects carry a `kind` tag; `heading` needs `level` and `title`, `text` needs
//! `content`. Any other kind is kept as [`Token::Other`] so the builder can reject it with its
//! position in the stream; `other` objects written by [`Token`]'s own serializer carry the
//! original kind in `name`.

use crate::error::{ExtractError, Result};
use crate::formats::Format;
use crate::token::Token;
use serde::Deserialize;

/// Token object as written by an external tokenizer.
#[derive(Debug, Deserialize)]
struct RawToken {
    kind: String,
    #[serde(default)]
    level: Option<usize>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl RawToken {
    fn into_token(self) -> Result<Token> {
        match self.kind.as_str() {
            "heading" => {
                let level = self.level.ok_or_else(|| missing("heading", "level"))?;
                let title = self.title.ok_or_else(|| missing("heading", "title"))?;
                Ok(Token::Heading { level, title })
            }
            "text" => {
                let content = self.content.ok_or_else(|| missing("text", "content"))?;
                Ok(Token::Text { content })
            }
            // Round-tripped `Token::Other` values keep their original kind in `name`.
            "other" => Ok(Token::Other {
                name: self.name.unwrap_or(self.kind),
            }),
            _ => Ok(Token::Other { name: self.kind }),
        }
    }
}

fn missing(kind: &str, field: &str) -> ExtractError {
    ExtractError::Parse(format!("{kind} token without `{field}`"))
}

/// JSON token stream reader.
pub struct TokenStreamFormat;

impl Format for TokenStreamFormat {
    fn name(&self) -> &'static str {
        "tokens"
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        let raw: Vec<RawToken> = if source.trim_start().starts_with('[') {
            serde_json::from_str(source)?
        } else {
            source
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(serde_json::from_str::<RawToken>)
                .collect::<std::result::Result<_, _>>()?
        };

        raw.into_iter().map(RawToken::into_token).collect()
    }
}

#[cfg(test)]
#[path = "../tests/tokens.rs"]
mod tests;
