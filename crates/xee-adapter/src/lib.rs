//! xee engine adapter for the query pipeline
//!
//! This adapter wraps the xee XPath 3.1 engine and the xot tree to
//! implement the xml-query-traits interfaces.

pub mod engine;
pub mod tree;

// Re-export main types
pub use engine::{XeeContext, XeeEngine};
pub use tree::XeeTree;

// Re-export key types for convenience
pub use xot::Node;
