//! Error codes for Jack diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,
    UnterminatedComment,
    InvalidNumber,

    // Parser errors (E0100 - E0199)
    UnexpectedToken,
    ExpectedTerm,
    ExpectedType,
    UnexpectedEof,
    TrailingInput,
    NestingTooDeep,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::UnterminatedComment => "E0003",
            ErrorCode::InvalidNumber => "E0005",

            // Parser
            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::ExpectedTerm => "E0101",
            ErrorCode::ExpectedType => "E0103",
            ErrorCode::UnexpectedEof => "E0106",
            ErrorCode::TrailingInput => "E0107",
            ErrorCode::NestingTooDeep => "E0108",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnterminatedString => "string constant is not terminated",
            ErrorCode::UnterminatedComment => "comment is not terminated",
            ErrorCode::InvalidNumber => "integer constant out of range",
            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::ExpectedTerm => "expected a term",
            ErrorCode::ExpectedType => "expected a type",
            ErrorCode::UnexpectedEof => "unexpected end of input",
            ErrorCode::TrailingInput => "unexpected tokens after class declaration",
            ErrorCode::NestingTooDeep => "expression or block nested too deeply",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => {
                Some("add a closing quote `\"`; string constants cannot span lines")
            }
            ErrorCode::UnterminatedComment => Some("add `*/` to close the comment"),
            ErrorCode::InvalidNumber => Some("integer constants must be between 0 and 32767"),
            ErrorCode::ExpectedType => Some("use `int`, `char`, `boolean` or a class name"),
            ErrorCode::TrailingInput => Some("a Jack file contains exactly one class"),
            ErrorCode::NestingTooDeep => Some("move inner expressions into local variables"),
            _ => None,
        }
    }
}
