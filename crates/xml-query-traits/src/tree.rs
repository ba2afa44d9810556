//! Document tree abstraction trait

use std::fmt::Debug;

/// A node resolved against the tree that owns it.
///
/// Borrowed from the tree, so it can never outlive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef<'t> {
    /// Element node
    Element {
        /// Local name of the element
        name: &'t str,
        /// Concatenated content of the element's direct text children,
        /// `None` when it has none
        text: Option<String>,
    },
    /// Text node
    Text {
        /// Raw character content
        content: &'t str,
    },
    /// Any other node kind (attribute, comment, document, ...)
    Other,
}

/// Trait for parsed document trees.
///
/// Query results only carry `Self::Node` handles; the tree turns them
/// back into something renderable.
pub trait DocumentTree {
    /// Non-owning handle to a node of this tree
    type Node: Copy + Debug;

    /// Resolve a node handle into its renderable shape
    fn resolve(&self, node: Self::Node) -> NodeRef<'_>;
}
