//! Parser for Jack.
//!
//! This crate provides a recursive descent parser that turns a flat token
//! sequence into a concrete [`ParseTree`]. Every choice is made with one
//! token of lookahead and the parse stops at the first [`SyntaxError`];
//! there is no error recovery.

mod error;
pub mod grammar;
mod parser;

pub use error::{Expected, Found, SyntaxError};
pub use parser::{MAX_DEPTH, ParseResult, Parser};

use jack_diagnostic::Diagnostic;
use jack_lexer::Lexer;
use jack_syntax::{ParseTree, Token};

/// Parse a complete token sequence into a `program` tree.
///
/// Unlike [`Parser::parse_program`], tokens left over after the class are
/// an error.
pub fn parse(tokens: &[Token]) -> Result<ParseTree, SyntaxError> {
    let mut parser = Parser::new(tokens);
    let tree = parser.parse_program()?;
    parser.expect_end()?;
    Ok(tree)
}

/// Lex and parse source text.
///
/// Lexer errors are returned without parsing; otherwise the syntax error,
/// if any, is returned as a single diagnostic.
pub fn parse_source(source: &str) -> Result<ParseTree, Vec<Diagnostic>> {
    let (tokens, diagnostics) = Lexer::new(source).tokenize();
    if diagnostics.iter().any(Diagnostic::is_error) {
        return Err(diagnostics);
    }
    parse(&tokens).map_err(|err| vec![err.to_diagnostic()])
}
