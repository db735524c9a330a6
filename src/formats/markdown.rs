//! Markdown format implementation using tree-sitter-md.
//!
//! This module tokenizes markdown documents with tree-sitter, turning ATX (`#` syntax) and
//! setext headings into heading tokens and every paragraph into a text token.

use crate::error::{ExtractError, Result};
use crate::formats::Format;
use crate::token::Token;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

const BLOCK_QUERY: &str = "(atx_heading) @heading (setext_heading) @heading (paragraph) @paragraph";

/// Tree-sitter backed tokenizer for markdown documents.
pub struct MarkdownFormat;

impl MarkdownFormat {
    fn language() -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>> {
        let language = Self::language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::Parse("tree-sitter produced no tree".to_string()))?;
        let query =
            Query::new(&language, BLOCK_QUERY).map_err(|e| ExtractError::Parse(e.to_string()))?;

        let bytes = source.as_bytes();
        let mut located: Vec<(usize, Token)> = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), bytes);

        while let Some(m) = matches.next() {
            for capture in m.captures {
                let node = capture.node;
                let token = match query.capture_names()[capture.index as usize] {
                    "heading" => heading_token(node, bytes)?,
                    _ => {
                        // Setext heading text is a paragraph node; the heading already covers it.
                        if node.parent().is_some_and(|p| p.kind() == "setext_heading") {
                            continue;
                        }
                        Token::text(node_text(node, bytes)?)
                    }
                };
                located.push((node.start_byte(), token));
            }
        }

        located.sort_by_key(|(start, _)| *start);
        Ok(located.into_iter().map(|(_, token)| token).collect())
    }
}

fn node_text<'a>(node: Node<'_>, bytes: &'a [u8]) -> Result<&'a str> {
    node.utf8_text(bytes)
        .map_err(|e| ExtractError::Parse(e.to_string()))
}

fn heading_token(node: Node<'_>, bytes: &[u8]) -> Result<Token> {
    let mut level = 1;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let kind = child.kind();
        if let Some(n) = kind
            .strip_prefix("atx_h")
            .and_then(|rest| rest.strip_suffix("_marker"))
            .and_then(|n| n.parse::<usize>().ok())
        {
            level = n;
        } else if kind == "setext_h2_underline" {
            level = 2;
        }
    }

    let content = node.child_by_field_name("heading_content").or_else(|| {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .find(|child| matches!(child.kind(), "inline" | "paragraph"))
    });
    let title = match content {
        Some(content) => node_text(content, bytes)?,
        None => "",
    };
    Ok(Token::heading(level, title))
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
