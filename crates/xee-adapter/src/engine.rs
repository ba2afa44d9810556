//! QueryEngine implementation for xee

use log::debug;
use xee_xpath::{Atomic, DocumentHandle, Documents, Item, Queries, Query, Sequence};
use xml_query_traits::{
    error::{Error, Result},
    result::QueryResult,
    QueryEngine,
};
use xot::{Node, Xot};

use crate::tree::{is_ignorable_blank, XeeTree};

/// UTF-8 byte order mark
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// xee XPath engine adapter
///
/// Stateless: every parsed document gets its own document store, so
/// nothing is shared between inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct XeeEngine;

impl XeeEngine {
    /// Create a new xee engine
    pub fn new() -> Self {
        Self
    }
}

/// Execution context for xee, bound to the document it was created for
pub struct XeeContext {
    queries: Queries<'static>,
    document: DocumentHandle,
}

impl XeeContext {
    /// Handle of the document queries run against
    pub fn document(&self) -> DocumentHandle {
        self.document
    }
}

impl QueryEngine for XeeEngine {
    type Tree = XeeTree;
    type Context = XeeContext;

    fn parse(&self, bytes: &[u8], label: &str) -> Result<XeeTree> {
        let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
        let xml = std::str::from_utf8(bytes).map_err(|source| Error::Utf8 {
            label: label.to_string(),
            source,
        })?;

        let mut documents = Documents::new();
        let handle = documents
            .add_string_without_uri(xml)
            .map_err(|e| Error::parse(label, e))?;
        debug!("{}: parsed {} bytes", label, xml.len());

        Ok(XeeTree::new(documents, handle))
    }

    fn new_context(&self, tree: &XeeTree, label: &str) -> Result<XeeContext> {
        debug!("{}: context bound to {:?}", label, tree.handle);
        Ok(XeeContext {
            queries: Queries::default(),
            document: tree.handle,
        })
    }

    fn evaluate(
        &self,
        context: &mut XeeContext,
        tree: &mut XeeTree,
        expression: &str,
        label: &str,
    ) -> Result<QueryResult<Node>> {
        let query = context
            .queries
            .sequence(expression)
            .map_err(|e| Error::eval(label, e))?;

        let sequence = query
            .execute(&mut tree.documents, context.document)
            .map_err(|e| Error::eval(label, e))?;

        Ok(sequence_to_result(&sequence, tree.xot()))
    }

    fn engine_name(&self) -> &'static str {
        "xee"
    }
}

/// Map an XPath 3.1 sequence onto the four XPath 1.0 result shapes.
///
/// A sequence of nodes only (including the empty one) is a node
/// collection, a single atomic is a scalar, and everything else has no
/// node-collection form at all.
fn sequence_to_result(sequence: &Sequence, xot: &Xot) -> QueryResult<Node> {
    let items: Vec<Item> = sequence.iter().collect();

    if items.iter().all(|item| matches!(item, Item::Node(_))) {
        let nodes = items
            .into_iter()
            .filter_map(|item| match item {
                Item::Node(node) => Some(node),
                _ => None,
            })
            .filter(|node| !is_ignorable_blank(xot, *node))
            .collect();
        return QueryResult::Nodes(Some(nodes));
    }

    match items.as_slice() {
        [Item::Atomic(atomic)] => convert_atomic(atomic, xot),
        _ => QueryResult::Nodes(None),
    }
}

fn convert_atomic(atomic: &Atomic, xot: &Xot) -> QueryResult<Node> {
    match atomic {
        Atomic::String(_, s) => QueryResult::String(s.to_string()),
        Atomic::Untyped(s) => QueryResult::String(s.to_string()),
        Atomic::Boolean(b) => QueryResult::Boolean(*b),
        Atomic::Integer(_, i) => {
            QueryResult::Number(i.to_string().parse().unwrap_or(f64::NAN))
        }
        Atomic::Decimal(d) => {
            QueryResult::Number(d.to_string().parse().unwrap_or(f64::NAN))
        }
        Atomic::Float(f) => QueryResult::Number(f.into_inner() as f64),
        Atomic::Double(d) => QueryResult::Number(d.into_inner()),
        // dates, durations, QNames and the like print in their canonical form
        _ => Item::Atomic(atomic.clone())
            .string_value(xot)
            .map(QueryResult::String)
            .unwrap_or(QueryResult::Nodes(None)),
    }
}
