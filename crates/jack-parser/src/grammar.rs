//! Fixed terminal sets consulted at the parser's choice points.
//!
//! Each set is paired with a token kind at the call site, so membership is
//! always "kind is K and text is one of S".

/// Keywords that open a class variable declaration.
pub const CLASS_VAR_KINDS: &[&str] = &["static", "field"];

/// Keywords that open a subroutine declaration.
pub const SUBROUTINE_KINDS: &[&str] = &["constructor", "function", "method"];

/// Built-in type names. Class names are identifiers and checked separately.
pub const PRIMITIVE_TYPES: &[&str] = &["int", "char", "boolean"];

/// Keywords that open a statement.
pub const STATEMENT_KEYWORDS: &[&str] = &["let", "if", "while", "do", "return"];

/// Infix operators. All share one precedence level.
pub const BINARY_OPS: &[&str] = &["+", "-", "*", "/", "&", "|", "<", ">", "="];

pub const UNARY_OPS: &[&str] = &["-", "~"];

pub const KEYWORD_CONSTANTS: &[&str] = &["true", "false", "null", "this"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_are_keywords_where_expected() {
        for set in [
            CLASS_VAR_KINDS,
            SUBROUTINE_KINDS,
            PRIMITIVE_TYPES,
            STATEMENT_KEYWORDS,
            KEYWORD_CONSTANTS,
        ] {
            assert!(set.iter().all(|word| jack_syntax::is_keyword(word)));
        }
    }

    #[test]
    fn test_minus_is_both_unary_and_binary() {
        assert!(UNARY_OPS.contains(&"-"));
        assert!(BINARY_OPS.contains(&"-"));
        assert!(!BINARY_OPS.contains(&"~"));
    }
}
