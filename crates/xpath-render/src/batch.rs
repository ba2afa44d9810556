//! Running one expression over a sequence of inputs

use std::io::{self, Write};

use log::debug;
use xml_query_traits::{Error, QueryEngine, Result};

use crate::lifecycle::{Scope, Stage};
use crate::neutralize::neutralize;
use crate::render::render_result;
use crate::source::{ByteSource, Input};

/// Process a single input from bytes to rendered text.
///
/// Every resource acquired on the way is held by `scope` and released
/// before this returns, whether or not a stage failed.
pub fn process_input<E, S>(
    engine: &E,
    source: &mut S,
    scope: &Scope,
    input: &Input,
    expression: &str,
) -> Result<String>
where
    E: QueryEngine,
    S: ByteSource,
{
    let label = scope.label();

    let mut buffer = scope.hold(Stage::Buffer, source.read(input)?);
    if let Some(offset) = neutralize(buffer.as_mut_slice()) {
        debug!("{}: neutralized namespace declaration at byte {}", label, offset);
    }

    let mut tree = scope.hold(Stage::Tree, engine.parse(buffer.as_slice(), label)?);
    let mut context = scope.hold(Stage::Context, engine.new_context(&tree, label)?);
    let result = scope.hold(
        Stage::Result,
        engine.evaluate(&mut context, &mut tree, expression, label)?,
    );
    debug!("{}: {} evaluated to a {}", label, engine.engine_name(), result.type_name());

    Ok(render_result(&*tree, &*result, label))
}

/// Applies one expression to each input in turn.
///
/// A failing input is reported on the diagnostics channel and skipped;
/// it never stops the batch.
pub struct Batch<'e, E, S> {
    engine: &'e E,
    source: S,
    expression: String,
}

impl<'e, E, S> Batch<'e, E, S>
where
    E: QueryEngine,
    S: ByteSource,
{
    pub fn new<X: Into<String>>(engine: &'e E, source: S, expression: X) -> Self {
        Self {
            engine,
            source,
            expression: expression.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Process `inputs` in order, writing rendered blocks to `out` and
    /// per-input failures to `diagnostics`.
    ///
    /// Only failures to write to `out` or `diagnostics` are returned.
    pub fn run<O, D>(
        &mut self,
        inputs: &[Input],
        out: &mut O,
        diagnostics: &mut D,
    ) -> io::Result<()>
    where
        O: Write,
        D: Write,
    {
        for input in inputs {
            let scope = Scope::new(input.label());
            match process_input(self.engine, &mut self.source, &scope, input, &self.expression) {
                Ok(block) => {
                    out.write_all(block.as_bytes())?;
                    out.flush()?;
                }
                Err(err) => report(diagnostics, &err)?,
            }
            debug!("{}: released {:?}", scope.label(), scope.released());
        }
        Ok(())
    }
}

fn report<D: Write>(diagnostics: &mut D, err: &Error) -> io::Result<()> {
    debug!("{}: {:?}", err.label(), err.kind());
    writeln!(diagnostics, "{}", err)?;
    diagnostics.flush()
}
