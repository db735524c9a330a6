//! Flattening a section tree back into reading-order paragraphs.

use crate::error::Result;
use crate::section::SectionNode;
use std::io::Write;

/// Collect leaf text depth-first, in document order. Titles are not emitted.
#[must_use]
pub fn flatten(nodes: Vec<SectionNode>) -> Vec<String> {
    let mut paragraphs = Vec::new();
    flatten_into(nodes, &mut paragraphs);
    paragraphs
}

fn flatten_into(nodes: Vec<SectionNode>, out: &mut Vec<String>) {
    for node in nodes {
        match node {
            SectionNode::Leaf(text) => out.push(text),
            SectionNode::Branch { children, .. } => flatten_into(children, out),
        }
    }
}

/// Write paragraphs one per line.
///
/// Paragraphs never contain line breaks after cleaning, so no escaping is done.
///
/// # Errors
///
/// Returns an error if the sink fails.
pub fn write_paragraphs<W: Write>(paragraphs: &[String], mut sink: W) -> Result<()> {
    for paragraph in paragraphs {
        writeln!(sink, "{paragraph}")?;
    }
    sink.flush()?;
    Ok(())
}

/// Hand paragraphs to a downstream consumer one at a time, in order.
///
/// This is the library hook for an external sentence or dependency parser; the CLI only
/// prints paragraphs and goes through [`write_paragraphs`] instead.
///
/// # Errors
///
/// Stops at and returns the first error the consumer reports.
pub fn for_each_paragraph<F>(paragraphs: &[String], mut consume: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    for paragraph in paragraphs {
        consume(paragraph)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/flatten.rs"]
mod tests;
