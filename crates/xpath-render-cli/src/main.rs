//! CLI for evaluating an XPath expression over XML files

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use xee_adapter::XeeEngine;
use xpath_render::{Batch, Input, StdSource, STDIN_LABEL};

/// Evaluate an XPath expression against XML documents and print the result.
///
/// Node collections print one line per element (name and trimmed text) or
/// text node; strings, numbers and booleans print as a single quoted
/// value. Output for named files is prefixed with the file name.
#[derive(Debug, Parser)]
#[command(name = "xpath-render", version, about)]
struct Cli {
    /// Log each processing stage (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// XPath expression to evaluate
    expression: String,

    /// Files to read; `-` or no files at all reads standard input
    files: Vec<PathBuf>,
}

impl Cli {
    fn inputs(&self) -> Vec<Input> {
        if self.files.is_empty() {
            return vec![Input::from_arg(STDIN_LABEL)];
        }
        self.files.iter().cloned().map(Input::from_path).collect()
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let engine = XeeEngine::new();
    let mut batch = Batch::new(&engine, StdSource, cli.expression.as_str());
    log::debug!("evaluating {:?}", batch.expression());

    let stdout = io::stdout();
    let stderr = io::stderr();
    batch
        .run(&cli.inputs(), &mut stdout.lock(), &mut stderr.lock())
        .context("failed to write results")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_files_means_stdin() {
        let cli = Cli::try_parse_from(["xpath-render", "//a"]).unwrap();
        assert_eq!(cli.inputs(), vec![Input::Stdin]);
        assert!(!cli.verbose);
    }

    #[test]
    fn files_keep_their_order() {
        let cli = Cli::try_parse_from(["xpath-render", "-v", "//a", "b.xml", "-", "a.xml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.expression, "//a");
        assert_eq!(
            cli.inputs(),
            vec![
                Input::from_arg("b.xml"),
                Input::Stdin,
                Input::from_arg("a.xml"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_names_are_accepted() {
        use std::ffi::{OsStr, OsString};
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.xml");
        let args: Vec<OsString> = vec!["xpath-render".into(), "//a".into(), name.into()];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.inputs(), vec![Input::Path(PathBuf::from(name))]);
    }

    #[test]
    fn expression_is_required() {
        assert!(Cli::try_parse_from(["xpath-render"]).is_err());
    }
}
