//! Turns a flat token stream into a nested section tree.
//!
//! The builder keeps the implicit root and a stack of open sections, each one
//! a heading that has been seen but whose content may still grow. Text always
//! lands in the innermost open section, or the root when none is open. Closing
//! a section wraps its content in a [`SectionNode::Branch`] and appends it to
//! the enclosing section, which cannot have received anything since the
//! section was opened, so document order is preserved.
//!
//! Heading levels drive the stack:
//!
//! - a heading at or above the current level closes one section;
//! - a heading strictly above the current level closes a second one as well,
//!   however many levels were skipped (under `## x` / `### y` / `#### a`, a
//!   following `## b` ends up nested in `x` rather than beside it);
//! - the new heading then opens a section of its own.

use crate::error::{ExtractError, Result};
use crate::section::SectionNode;
use crate::token::Token;

struct Frame {
    title: String,
    children: Vec<SectionNode>,
}

/// Implicit root plus the stack of open sections, with the current heading level.
struct TreeBuilder {
    root: Vec<SectionNode>,
    open: Vec<Frame>,
    level: usize,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            root: Vec::new(),
            open: Vec::new(),
            level: 1,
        }
    }

    /// Innermost open section, or the root when none is open.
    fn top(&mut self) -> &mut Vec<SectionNode> {
        match self.open.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }

    /// Close the innermost open section into its parent. The root is never closed.
    fn close(&mut self) {
        if let Some(Frame { title, children }) = self.open.pop() {
            self.top().push(SectionNode::Branch { title, children });
        }
    }

    fn push_text(&mut self, content: &str) {
        let text = clean_text(content);
        if !text.is_empty() {
            self.top().push(SectionNode::Leaf(text));
        }
    }

    fn push_heading(&mut self, level: usize, title: &str) {
        if level <= self.level {
            self.close();
        }
        if level < self.level {
            self.close();
        }
        self.open.push(Frame {
            title: title.trim().to_string(),
            children: Vec::new(),
        });
        self.level = level;
    }

    fn finish(mut self) -> Vec<SectionNode> {
        while !self.open.is_empty() {
            self.close();
        }
        self.root
    }
}

/// Trim a text run and turn each line break into a space.
///
/// A `\r\n` pair counts as one line break; other interior whitespace is kept as is.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    raw.trim().replace("\r\n", "\n").replace('\n', " ")
}

/// Build the section tree for one article.
///
/// Sections still open when the stream ends are closed as they stand; no
/// terminating token is needed. Empty text runs are dropped.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidTokenKind`] on the first [`Token::Other`];
/// nothing is returned for the partial tree.
pub fn build<I>(tokens: I) -> Result<Vec<SectionNode>>
where
    I: IntoIterator<Item = Token>,
{
    let mut builder = TreeBuilder::new();
    for (position, token) in tokens.into_iter().enumerate() {
        match token {
            Token::Heading { level, title } => builder.push_heading(level, &title),
            Token::Text { content } => builder.push_text(&content),
            Token::Other { name } => {
                return Err(ExtractError::InvalidTokenKind {
                    kind: name,
                    position,
                });
            }
        }
    }
    let tree = builder.finish();
    tracing::debug!(top_level = tree.len(), "built section tree");
    Ok(tree)
}

#[cfg(test)]
#[path = "tests/builder.rs"]
mod tests;
