//! xpath-render: evaluate one XPath expression over many documents and
//! render each result as deterministic text.
//!
//! The pipeline for every input is
//! read bytes → neutralize the default namespace → parse → build context
//! → evaluate → render, with all per-input resources released before the
//! next input starts. Parsing and evaluation are delegated to any
//! [`QueryEngine`](xml_query_traits::QueryEngine).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use xpath_render::{Batch, Input, StdSource};
//! use xee_adapter::XeeEngine;
//!
//! let engine = XeeEngine::new();
//! let mut batch = Batch::new(&engine, StdSource, "//item");
//! batch.run(&[Input::from_arg("doc.xml")], &mut std::io::stdout(), &mut std::io::stderr())?;
//! ```

pub mod batch;
pub mod lifecycle;
pub mod neutralize;
pub mod render;
pub mod source;

pub use batch::{process_input, Batch};
pub use lifecycle::{Held, Scope, Stage};
pub use neutralize::neutralize;
pub use render::{format_number, render_result, trim_space};
pub use source::{ByteSource, DocumentBuffer, Input, StdSource, STDIN_LABEL};

// Re-export the engine contract
pub use xml_query_traits::{
    DocumentTree, Error, ErrorKind, NodeRef, QueryEngine, QueryResult, Result,
};
