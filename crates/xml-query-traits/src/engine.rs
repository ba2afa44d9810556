//! Query engine abstraction trait

use crate::error::Result;
use crate::result::QueryResult;
use crate::tree::DocumentTree;

/// Trait for XPath query engines.
///
/// The pipeline drives an engine in three steps: parse the bytes into a
/// tree, build an evaluation context for that tree, then evaluate the
/// expression. Each step may fail independently; none is retried.
///
/// Note: This trait does not require Send + Sync as most XML
/// libraries use Rc<T> for internal references.
pub trait QueryEngine {
    /// The tree type produced by parsing
    type Tree: DocumentTree;

    /// Type representing an evaluation context
    type Context;

    /// Parse document bytes into a tree. `label` names the input in errors.
    fn parse(&self, bytes: &[u8], label: &str) -> Result<Self::Tree>;

    /// Create an evaluation context bound to `tree`
    fn new_context(&self, tree: &Self::Tree, label: &str) -> Result<Self::Context>;

    /// Evaluate `expression` against the tree the context is bound to
    fn evaluate(
        &self,
        context: &mut Self::Context,
        tree: &mut Self::Tree,
        expression: &str,
        label: &str,
    ) -> Result<QueryResult<<Self::Tree as DocumentTree>::Node>>;

    /// Name of the engine, for diagnostics
    fn engine_name(&self) -> &'static str;
}
