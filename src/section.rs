//! Section tree representation for tokenized articles.
//!
//! A section is a hierarchical division of an article introduced by a heading.
//! Branches own their children in document order; leaves hold cleaned
//! paragraph text. The tree root is a plain `Vec<SectionNode>`, standing in
//! for an unnamed top-level section.

#[derive(Debug, Clone, PartialEq, Eq)]
/// Node of the section tree: either a paragraph or a titled section.
pub enum SectionNode {
    /// Cleaned, non-empty paragraph text.
    Leaf(String),
    /// Titled section with its nested content in document order.
    Branch {
        /// Heading text, trimmed.
        title: String,
        /// Paragraphs and subsections under this heading.
        children: Vec<SectionNode>,
    },
}

impl SectionNode {
    #[must_use]
    /// Section title, or `None` for a leaf.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch { title, .. } => Some(title),
        }
    }

    #[must_use]
    /// Direct children of a branch; leaves have none.
    pub fn children(&self) -> &[SectionNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch { children, .. } => children,
        }
    }
}
