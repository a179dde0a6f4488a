//! CLI command implementations.

pub mod check;
pub mod parse;
pub mod tokens;

use std::fs;

use jack_diagnostic::emit;
use jack_syntax::ParseTree;

/// Read a source file.
fn read_source(file: &str) -> Result<String, String> {
    fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))
}

/// Read and parse a file, rendering any diagnostics to stderr.
fn load(file: &str) -> Result<ParseTree, String> {
    let source = read_source(file)?;

    match jack_parser::parse_source(&source) {
        Ok(tree) => Ok(tree),
        Err(diagnostics) => {
            for diag in &diagnostics {
                emit(&source, file, diag).map_err(|e| format!("cannot write diagnostics: {e}"))?;
            }
            Err(format!("{} error(s) found in '{}'", diagnostics.len(), file))
        }
    }
}
