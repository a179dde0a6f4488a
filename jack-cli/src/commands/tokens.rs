//! The `jack tokens` command.

use jack_diagnostic::emit;
use jack_lexer::Lexer;
use jack_syntax::Token;

use super::read_source;

/// Print the tokens of a file as `kind text` lines.
pub fn run(file: &str) -> Result<(), String> {
    let source = read_source(file)?;
    let (tokens, diagnostics) = Lexer::new(&source).tokenize();

    for diag in &diagnostics {
        emit(&source, file, diag).map_err(|e| format!("cannot write diagnostics: {e}"))?;
    }

    print!("{}", listing(&tokens));

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(format!("{} lexical error(s) found", diagnostics.len()))
    }
}

fn listing(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} {}\n", token.kind(), token.text()))
        .collect()
}
