//! The `jack parse` command.

use jack_syntax::{ParseTree, PrintConfig, printer};

use super::load;

/// Parse a file and print its tree.
pub fn run(file: &str, json: bool, ascii: bool) -> Result<(), String> {
    let tree = load(file)?;
    print!("{}", render(&tree, json, ascii)?);
    Ok(())
}

fn render(tree: &ParseTree, json: bool, ascii: bool) -> Result<String, String> {
    if json {
        serde_json::to_string_pretty(tree)
            .map(|mut out| {
                out.push('\n');
                out
            })
            .map_err(|e| format!("cannot serialize tree: {e}"))
    } else {
        Ok(printer::render(tree, &PrintConfig::new().ascii(ascii)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tree() -> ParseTree {
        jack_parser::parse_source("class Main { }").unwrap()
    }

    #[test]
    fn test_render_outline() {
        let out = render(&tree(), false, true).unwrap();
        assert!(out.starts_with("program\n  `- class\n"));
        assert!(out.contains("`- identifier Main\n"));
    }

    #[test]
    fn test_render_json() {
        let out = render(&tree(), true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kind"], "program");
        assert_eq!(value["children"][0]["children"][1]["text"], "Main");
    }

    #[test]
    fn test_run_reports_syntax_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "class Main {{").unwrap();
        let path = file.path().to_str().unwrap();
        let err = run(path, false, false).unwrap_err();
        assert!(err.contains("1 error(s)"));
    }
}
