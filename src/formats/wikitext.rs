//! Plain-text extract format, as returned by the MediaWiki API with `explaintext`.
//!
//! Headings survive in the extract as `== Title ==` lines; everything else is prose. The level
//! of a heading is the shorter of its two `=` runs, capped at six, with any surplus `=` kept in
//! the title.

use crate::error::Result;
use crate::formats::Format;
use crate::token::Token;

/// Deepest heading level; longer `=` runs spill into the title.
const MAX_LEVEL: usize = 6;

/// Line-oriented tokenizer for MediaWiki plain-text extracts.
pub struct WikitextFormat;

impl Format for WikitextFormat {
    fn name(&self) -> &'static str {
        "wikitext"
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut text = String::new();

        for line in source.split_inclusive('\n') {
            if let Some((level, title)) = parse_heading(line) {
                if !text.is_empty() {
                    tokens.push(Token::text(std::mem::take(&mut text)));
                }
                tokens.push(Token::heading(level, title));
            } else {
                text.push_str(line);
            }
        }
        if !text.is_empty() {
            tokens.push(Token::text(text));
        }

        Ok(tokens)
    }
}

/// Parse a `== Title ==` line into its level and untrimmed title.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let line = line.trim_end();
    let open = line.len() - line.trim_start_matches('=').len();
    let close = line.len() - line.trim_end_matches('=').len();
    // A line of only `=` has overlapping runs and is not a heading.
    if open == 0 || close == 0 || open + close >= line.len() {
        return None;
    }
    let level = open.min(close).min(MAX_LEVEL);
    let title = &line[level..line.len() - level];
    Some((level, title))
}

#[cfg(test)]
#[path = "../tests/wikitext.rs"]
mod tests;
