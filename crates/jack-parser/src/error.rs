//! Syntax errors raised by the parser.

use std::fmt;

use jack_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use jack_syntax::{Span, Token, TokenKind};
use thiserror::Error;

/// What the grammar required at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// A token of `kind`; `value` is `None` when any lexeme is accepted.
    Token {
        kind: TokenKind,
        value: Option<&'static str>,
    },
    /// A token of `kind` whose lexeme is one of `values`.
    OneOf {
        kind: TokenKind,
        values: &'static [&'static str],
    },
    /// `int`, `char`, `boolean` or a class name.
    Type,
    /// `void` or a type.
    ReturnType,
    /// Anything that can start a term.
    Term,
    /// No further tokens.
    EndOfInput,
    /// Terms or blocks nested no deeper than `limit`.
    Nesting { limit: usize },
}

impl Expected {
    /// The lexeme requirement as text, `any` when unconstrained.
    pub fn value(&self) -> String {
        match self {
            Expected::Token {
                value: Some(value), ..
            } => (*value).to_string(),
            Expected::OneOf { values, .. } => values.join("|"),
            _ => "any".to_string(),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token { kind, value: None } => write!(f, "{kind}"),
            Expected::Token {
                kind,
                value: Some(value),
            } => write!(f, "{kind} `{value}`"),
            Expected::OneOf { kind, values } => {
                write!(f, "{kind} ")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(if i + 1 == values.len() { " or " } else { ", " })?;
                    }
                    write!(f, "`{value}`")?;
                }
                Ok(())
            }
            Expected::Type => f.write_str("a type"),
            Expected::ReturnType => f.write_str("a return type"),
            Expected::Term => f.write_str("a term"),
            Expected::EndOfInput => f.write_str("end of input"),
            Expected::Nesting { limit } => write!(f, "at most {limit} levels of nesting"),
        }
    }
}

/// What the parser actually saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token(Token),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(token) => write!(f, "{token}"),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// The single error kind of the parser: the current token did not match
/// what the grammar required.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct SyntaxError {
    pub expected: Expected,
    pub found: Found,
    /// Cursor index at which the mismatch was detected.
    pub position: usize,
    span: Span,
}

impl SyntaxError {
    pub fn new(expected: Expected, found: Found, position: usize, span: Span) -> Self {
        Self {
            expected,
            found,
            position,
            span,
        }
    }

    /// Source location of the offending token, or just past the last token
    /// when the input ran out.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn code(&self) -> ErrorCode {
        match (&self.expected, &self.found) {
            (Expected::Nesting { .. }, _) => ErrorCode::NestingTooDeep,
            (_, Found::EndOfInput) => ErrorCode::UnexpectedEof,
            (Expected::EndOfInput, _) => ErrorCode::TrailingInput,
            (Expected::Type | Expected::ReturnType, _) => ErrorCode::ExpectedType,
            (Expected::Term, _) => ErrorCode::ExpectedTerm,
            _ => ErrorCode::UnexpectedToken,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(DiagnosticKind::Parser, self.span, self.to_string())
            .with_code(self.code())
            .with_label(Label::new(self.span, format!("expected {}", self.expected)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let err = SyntaxError::new(
            Expected::Token {
                kind: TokenKind::Symbol,
                value: Some(";"),
            },
            Found::Token(Token::identifier("y")),
            7,
            Span::DUMMY,
        );
        assert_eq!(err.to_string(), "expected symbol `;`, found identifier `y`");
        assert_eq!(err.code(), ErrorCode::UnexpectedToken);
    }

    #[test]
    fn test_one_of_message() {
        let expected = Expected::OneOf {
            kind: TokenKind::Keyword,
            values: &["constructor", "function", "method"],
        };
        assert_eq!(
            expected.to_string(),
            "keyword `constructor`, `function` or `method`"
        );
        assert_eq!(expected.value(), "constructor|function|method");
    }

    #[test]
    fn test_any_value() {
        let expected = Expected::Token {
            kind: TokenKind::Identifier,
            value: None,
        };
        assert_eq!(expected.value(), "any");
        assert_eq!(Expected::Term.value(), "any");
    }

    #[test]
    fn test_nesting_message() {
        let err = SyntaxError::new(
            Expected::Nesting { limit: 256 },
            Found::Token(Token::symbol("(")),
            300,
            Span::DUMMY,
        );
        assert_eq!(
            err.to_string(),
            "expected at most 256 levels of nesting, found symbol `(`"
        );
        assert_eq!(err.code(), ErrorCode::NestingTooDeep);
    }

    #[test]
    fn test_end_of_input_diagnostic() {
        let err = SyntaxError::new(Expected::Term, Found::EndOfInput, 3, Span::new(9, 9));
        assert_eq!(err.to_string(), "expected a term, found end of input");
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, Some(ErrorCode::UnexpectedEof));
        assert_eq!(diag.span, Span::new(9, 9));
        assert_eq!(diag.labels[0].message, "expected a term");
    }
}
