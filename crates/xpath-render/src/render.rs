//! Text rendering of query results.
//!
//! The format is line oriented and lossy; it is meant for people and log
//! scrapers, not for parsing back:
//!
//! ```text
//! 'some string'
//! '2.000000'
//! 'true'
//! NULL
//! '[
//!  "element": "trimmed text",
//! "text node content"
//! ]'
//! ```
//!
//! Every record is prefixed with `<label>: ` unless the input is standard
//! input.

use std::fmt::{self, Write};

use xml_query_traits::{DocumentTree, NodeRef, QueryResult};

use crate::source::STDIN_LABEL;

/// Trim the C-locale `isspace` set from both ends of `s`
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Format a number with six fractional digits, as `printf("%f")` does
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        // `{:.6}` already renders infinities as `inf` / `-inf`
        format!("{:.6}", value)
    }
}

/// One input's rendered output, built in memory so it reaches the sink in
/// a single write.
struct Block<'a> {
    label: &'a str,
    text: String,
}

impl<'a> Block<'a> {
    fn new(label: &'a str) -> Self {
        Self {
            label,
            text: String::new(),
        }
    }

    fn record(&mut self, args: fmt::Arguments<'_>) {
        if self.label != STDIN_LABEL {
            self.text.push_str(self.label);
            self.text.push_str(": ");
        }
        // Writing into a String cannot fail
        let _ = self.text.write_fmt(args);
    }
}

/// Render `result` as text.
///
/// `tree` is the tree the result was evaluated against; node handles in
/// the result are resolved through it.
pub fn render_result<T: DocumentTree>(
    tree: &T,
    result: &QueryResult<T::Node>,
    label: &str,
) -> String {
    let mut block = Block::new(label);

    match result {
        QueryResult::String(s) => block.record(format_args!("'{}'\n", trim_space(s))),
        QueryResult::Number(n) => block.record(format_args!("'{}'\n", format_number(*n))),
        QueryResult::Boolean(b) => block.record(format_args!("'{}'\n", b)),
        QueryResult::Nodes(None) => block.record(format_args!("NULL\n")),
        QueryResult::Nodes(Some(nodes)) => {
            block.record(format_args!("'[\n"));
            for node in nodes {
                match tree.resolve(*node) {
                    NodeRef::Element { name, text } => block.record(format_args!(
                        " \"{}\": \"{}\",\n",
                        name,
                        text.as_deref().map(trim_space).unwrap_or("")
                    )),
                    NodeRef::Text { content } => {
                        block.record(format_args!("\"{}\"\n", trim_space(content)))
                    }
                    NodeRef::Other => {}
                }
            }
            block.record(format_args!("]'\n"));
        }
    }

    block.text
}
