//! The Jack lexer.
//! Jack 词法分析器。

use jack_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use jack_syntax::{Span, Token, TokenKind, is_keyword};
use log::debug;
use logos::Logos;

/// Largest value an integer constant may hold.
const MAX_INT: u32 = 32767;

/// Failures the raw scanner can report.
/// 原始扫描器可能报告的错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexError {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
    UnterminatedComment,
}

/// Raw lexemes recognised by the scanner before classification.
/// 分类之前扫描器识别的原始词素。
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    /// `/* ... */` and `/** ... */`, dropped by the lexer.
    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    #[regex(r"[0-9]+")]
    Integer,

    #[token("\"", string_constant)]
    String,

    #[regex(r"[{}()\[\].,;+\-*/&|<>=~]")]
    Symbol,
}

/// Consume the body of a block comment up to and including `*/`.
fn block_comment(lex: &mut logos::Lexer<RawToken>) -> Result<(), LexError> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            Ok(())
        }
        None => {
            lex.bump(lex.remainder().len());
            Err(LexError::UnterminatedComment)
        }
    }
}

/// Consume a string constant; it must close before the end of the line.
fn string_constant(lex: &mut logos::Lexer<RawToken>) -> Result<(), LexError> {
    let rest = lex.remainder();
    match rest.find(['"', '\n']) {
        Some(end) if rest[end..].starts_with('"') => {
            lex.bump(end + 1);
            Ok(())
        }
        Some(end) => {
            lex.bump(end);
            Err(LexError::UnterminatedString)
        }
        None => {
            lex.bump(rest.len());
            Err(LexError::UnterminatedString)
        }
    }
}

/// The Jack lexer.
/// Jack 词法分析器。
///
/// Converts source code into the flat token sequence the parser consumes.
/// 将源代码转换为语法分析器所需的扁平 token 序列。
pub struct Lexer<'src> {
    source: &'src str,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    /// 对整个源代码进行词法分析，返回 token 列表和诊断信息。
    ///
    /// Scanning never stops early: malformed input is reported and skipped
    /// so every problem in the file surfaces at once.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        let mut raw = RawToken::lexer(self.source);

        while let Some(result) = raw.next() {
            let span = Span::from(raw.span());
            let slice = raw.slice();

            match result {
                Ok(RawToken::BlockComment) => {}
                Ok(RawToken::Word) => {
                    let kind = if is_keyword(slice) {
                        TokenKind::Keyword
                    } else {
                        TokenKind::Identifier
                    };
                    tokens.push(Token::with_span(kind, slice, span));
                }
                Ok(RawToken::Integer) => {
                    if slice.parse::<u32>().map_or(true, |value| value > MAX_INT) {
                        self.error(
                            span,
                            ErrorCode::InvalidNumber,
                            format!("integer constant `{slice}` is too large"),
                        );
                    }
                    tokens.push(Token::with_span(TokenKind::IntegerConstant, slice, span));
                }
                Ok(RawToken::String) => {
                    let text = &slice[1..slice.len() - 1];
                    tokens.push(Token::with_span(TokenKind::StringConstant, text, span));
                }
                Ok(RawToken::Symbol) => {
                    tokens.push(Token::with_span(TokenKind::Symbol, slice, span));
                }
                Err(LexError::UnexpectedCharacter) => self.error(
                    span,
                    ErrorCode::UnexpectedCharacter,
                    format!("unexpected character: '{slice}'"),
                ),
                Err(LexError::UnterminatedString) => self.error(
                    span,
                    ErrorCode::UnterminatedString,
                    "unterminated string constant",
                ),
                Err(LexError::UnterminatedComment) => self.error(
                    span,
                    ErrorCode::UnterminatedComment,
                    "unterminated block comment",
                ),
            }
        }

        debug!(
            "lexed {} tokens with {} diagnostics",
            tokens.len(),
            self.diagnostics.len()
        );
        (tokens, self.diagnostics)
    }

    fn error(&mut self, span: Span, code: ErrorCode, message: impl Into<String>) {
        self.diagnostics.push(
            Diagnostic::error(DiagnosticKind::Lexer, span, message)
                .with_code(code)
                .with_label(Label::new(span, code.description())),
        );
    }
}
