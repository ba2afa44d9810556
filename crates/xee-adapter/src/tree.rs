//! DocumentTree implementation for xot

use xee_xpath::{DocumentHandle, Documents};
use xml_query_traits::tree::{DocumentTree, NodeRef};
use xot::{Node, Xot};

/// A parsed document, held in its own xee document store
pub struct XeeTree {
    pub(crate) documents: Documents,
    pub(crate) handle: DocumentHandle,
}

impl XeeTree {
    pub(crate) fn new(documents: Documents, handle: DocumentHandle) -> Self {
        Self { documents, handle }
    }

    /// Handle of the parsed document inside its store
    pub fn document(&self) -> DocumentHandle {
        self.handle
    }

    /// Get a reference to the underlying Xot
    pub fn xot(&self) -> &Xot {
        self.documents.xot()
    }
}

impl std::fmt::Debug for XeeTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XeeTree").finish_non_exhaustive()
    }
}

impl DocumentTree for XeeTree {
    type Node = Node;

    fn resolve(&self, node: Node) -> NodeRef<'_> {
        let xot = self.xot();
        match xot.value(node) {
            xot::Value::Element(element) => NodeRef::Element {
                name: xot.local_name_str(element.name()),
                text: direct_text(xot, node),
            },
            xot::Value::Text(text) => NodeRef::Text {
                content: text.get(),
            },
            _ => NodeRef::Other,
        }
    }
}

/// Concatenate the text children of `node`, without descending into
/// child elements. `None` when there are no text children at all.
fn direct_text(xot: &Xot, node: Node) -> Option<String> {
    let mut text: Option<String> = None;
    for child in xot.children(node) {
        if let Some(s) = xot.text_str(child) {
            text.get_or_insert_with(String::new).push_str(s);
        }
    }
    text
}

/// True for a whitespace-only text node that a blank-dropping parser
/// would have discarded.
///
/// A blank is kept when it is its parent's only child, or when it sits in
/// a parent whose first child is non-blank text (mixed content). Leading
/// blanks and blanks between elements are indentation.
pub(crate) fn is_ignorable_blank(xot: &Xot, node: Node) -> bool {
    if !xot.text_str(node).is_some_and(is_blank) {
        return false;
    }
    let Some(parent) = xot.parent(node) else {
        return false;
    };

    let mut children = xot.children(parent);
    let Some(first) = children.next() else {
        return false;
    };
    if children.next().is_none() {
        return false;
    }

    // a leading blank is dropped itself, so it never makes content mixed
    let mixed = first != node && xot.text_str(first).is_some_and(|text| !is_blank(text));
    !mixed
}

fn is_blank(text: &str) -> bool {
    text.bytes()
        .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
}
