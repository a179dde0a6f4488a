//! The `jack check` command.

use jack_syntax::NodeKind;

use super::load;
use crate::output;

/// Check that a Jack file is syntactically valid.
pub fn run(file: &str, verbose: bool) -> Result<(), String> {
    let tree = load(file)?;

    if verbose {
        let class = &tree.children()[0];
        let name = class.children()[1].text();
        output::info(&format!(
            "class {} with {} field/static declaration(s) and {} subroutine(s)",
            name,
            class.nodes_of(NodeKind::ClassVarDec).count(),
            class.nodes_of(NodeKind::Subroutine).count(),
        ));
    }

    output::success("OK - No errors found");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source_file(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_check_valid_file() {
        let file = source_file(
            "class Main {\n  function void main() {\n    do Output.printInt(1 + 2);\n    return;\n  }\n}\n",
        );
        assert!(run(file.path().to_str().unwrap(), true).is_ok());
    }

    #[test]
    fn test_check_lexer_error() {
        let file = source_file("class Main { # }");
        assert!(run(file.path().to_str().unwrap(), false).is_err());
    }

    #[test]
    fn test_check_missing_file() {
        let err = run("/nonexistent/Main.jack", false).unwrap_err();
        assert!(err.starts_with("cannot read file"));
    }
}
