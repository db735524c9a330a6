//! Removal of boilerplate sections from a section tree.
//!
//! Matching is by exact title. A matched branch is dropped whole without
//! looking inside it; any branch left with no children afterwards is dropped
//! too. Leaves are never touched.

use crate::section::SectionNode;
use std::collections::HashSet;

/// Section titles dropped by default: reference apparatus and navigation.
pub const DEFAULT_IGNORE_SECTIONS: [&str; 8] = [
    "See also",
    "Explanatory notes",
    "References",
    "Other sources",
    "Further reading",
    "External links",
    "Sources",
    "Selected bibliography",
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Set of section titles to prune, compared exactly (case and accents matter).
pub struct IgnoreSet {
    titles: HashSet<String>,
}

impl IgnoreSet {
    #[must_use]
    /// Ignore set holding exactly the given titles.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    /// Whether a section with this title should be pruned.
    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    #[must_use]
    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[must_use]
    /// True when nothing will be pruned by title.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_SECTIONS)
    }
}

/// Drop ignored and empty sections, keeping the survivors in order.
#[must_use]
pub fn prune(nodes: Vec<SectionNode>, ignore: &IgnoreSet) -> Vec<SectionNode> {
    nodes
        .into_iter()
        .filter_map(|node| match node {
            SectionNode::Leaf(text) => Some(SectionNode::Leaf(text)),
            SectionNode::Branch { title, children } => {
                if ignore.contains(&title) {
                    tracing::trace!(%title, "pruned ignored section");
                    return None;
                }
                let children = prune(children, ignore);
                if children.is_empty() {
                    None
                } else {
                    Some(SectionNode::Branch { title, children })
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/prune.rs"]
mod tests;
