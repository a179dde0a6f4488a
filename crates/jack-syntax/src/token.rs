//! Token definitions for Jack.

use std::fmt;

use serde::Serialize;

use crate::Span;

/// The lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Keyword,
    Symbol,
    Identifier,
    IntegerConstant,
    StringConstant,
}

impl TokenKind {
    /// The label used for leaves of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerConstant => "integerConstant",
            TokenKind::StringConstant => "stringConstant",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 21 reserved words of Jack.
pub const KEYWORDS: &[&str] = &[
    "class",
    "constructor",
    "function",
    "method",
    "field",
    "static",
    "var",
    "int",
    "char",
    "boolean",
    "void",
    "true",
    "false",
    "null",
    "this",
    "let",
    "do",
    "if",
    "else",
    "while",
    "return",
];

/// Returns true if `word` is a Jack keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// An immutable lexical unit: a kind and the literal lexeme.
///
/// String constants hold their contents without the surrounding quotes.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    #[serde(skip)]
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self::with_span(kind, text, Span::DUMMY)
    }

    pub fn with_span(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, text)
    }

    pub fn symbol(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Symbol, text)
    }

    pub fn identifier(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, text)
    }

    pub fn int(text: impl Into<String>) -> Self {
        Self::new(TokenKind::IntegerConstant, text)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::new(TokenKind::StringConstant, text)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true if this token has the given kind and lexeme.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

/// Tokens compare by kind and lexeme; the span is location only.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_span() {
        let a = Token::with_span(TokenKind::Identifier, "x", Span::new(4, 5));
        let b = Token::identifier("x");
        assert_eq!(a, b);
        assert_ne!(a, Token::keyword("x"));
    }

    #[test]
    fn test_keyword_table() {
        assert_eq!(KEYWORDS.len(), 21);
        assert!(is_keyword("constructor"));
        assert!(!is_keyword("Main"));
    }
}
