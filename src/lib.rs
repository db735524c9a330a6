//! wikisect: body-text paragraph extraction from Wikipedia articles.
//!
//! Articles arrive as a token stream of headings and text runs. The stream is built into a
//! section tree mirroring the heading hierarchy, boilerplate sections (references, external
//! links and the like) are pruned by title, and the surviving text is flattened back into
//! reading-order paragraphs for downstream language processing.
#![allow(clippy::multiple_crate_versions)]

pub mod builder;
pub mod config;
pub mod error;
pub mod flatten;
pub mod formats;
pub mod prune;
pub mod section;
pub mod token;
pub mod wikipedia;

pub use error::{ExtractError, Result};
pub use prune::IgnoreSet;
pub use section::SectionNode;
pub use token::Token;

/// Run the whole pipeline on one article: build, prune, flatten.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidTokenKind`] if the stream holds a token that is neither a
/// heading nor text.
pub fn extract_paragraphs<I>(tokens: I, ignore: &IgnoreSet) -> Result<Vec<String>>
where
    I: IntoIterator<Item = Token>,
{
    let tree = builder::build(tokens)?;
    let pruned = prune::prune(tree, ignore);
    let paragraphs = flatten::flatten(pruned);
    tracing::debug!(paragraphs = paragraphs.len(), "extracted paragraphs");
    Ok(paragraphs)
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
