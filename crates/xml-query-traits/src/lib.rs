//! Core trait abstractions for XPath query engines.
//!
//! This crate defines the contract between the result-rendering pipeline
//! and whatever library actually parses documents and evaluates
//! expressions.

pub mod engine;
pub mod error;
pub mod result;
pub mod tree;

pub use engine::QueryEngine;
pub use error::{Error, ErrorKind, Result};
pub use result::QueryResult;
pub use tree::{DocumentTree, NodeRef};
