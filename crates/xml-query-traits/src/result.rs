//! Query result types

/// The value produced by evaluating an expression.
///
/// `N` is the node handle type of the tree the result was evaluated
/// against. Handles stay valid only as long as that tree is alive.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<N> {
    /// A string value
    String(String),
    /// A numeric value
    Number(f64),
    /// A boolean value
    Boolean(bool),
    /// An ordered node collection.
    ///
    /// `None` is a collection the engine could not produce at all and is
    /// distinct from `Some(vec![])`.
    Nodes(Option<Vec<N>>),
}

impl<N> QueryResult<N> {
    /// Short name of the variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            QueryResult::String(_) => "string",
            QueryResult::Number(_) => "number",
            QueryResult::Boolean(_) => "boolean",
            QueryResult::Nodes(Some(_)) => "node-set",
            QueryResult::Nodes(None) => "null node-set",
        }
    }
}
