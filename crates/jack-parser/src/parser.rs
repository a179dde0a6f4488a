//! The Jack parser.
//!
//! One method per grammar rule. Every rule decides between alternatives by
//! looking at the current token only and never backtracks; the first
//! mismatch aborts the whole parse.

use jack_syntax::{Node, NodeKind, ParseTree, Span, Token, TokenKind};
use log::trace;

use crate::error::{Expected, Found, SyntaxError};
use crate::grammar::{
    BINARY_OPS, CLASS_VAR_KINDS, KEYWORD_CONSTANTS, PRIMITIVE_TYPES, STATEMENT_KEYWORDS,
    SUBROUTINE_KINDS, UNARY_OPS,
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// How deeply terms and statement blocks may nest before the parse is
/// rejected. Each level costs a few stack frames.
pub const MAX_DEPTH: usize = 256;

/// A cursor over a borrowed token sequence.
///
/// The cursor only moves forward. It may come to rest one past the last
/// token, which is how the parser observes end of input.
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.pos
    }

    // ========== Program Structure ==========

    /// program → class
    pub fn parse_program(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::Program);
        let mut node = Node::new(NodeKind::Program);
        node.add_child(self.parse_class()?);
        Ok(node.into())
    }

    /// class → 'class' identifier '{' classVarDec* subroutineDec* '}'
    pub fn parse_class(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::Class);
        let mut node = Node::new(NodeKind::Class);
        node.add_child(self.expect_value(TokenKind::Keyword, "class")?);
        node.add_child(self.expect(TokenKind::Identifier)?);
        node.add_child(self.expect_value(TokenKind::Symbol, "{")?);

        while self.check_one_of(TokenKind::Keyword, CLASS_VAR_KINDS) {
            node.add_child(self.parse_class_var_dec()?);
        }

        while self.check_one_of(TokenKind::Keyword, SUBROUTINE_KINDS) {
            node.add_child(self.parse_subroutine()?);
        }

        node.add_child(self.expect_value(TokenKind::Symbol, "}")?);
        Ok(node.into())
    }

    /// classVarDec → ('static'|'field') type identifier (',' identifier)* ';'
    pub fn parse_class_var_dec(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::ClassVarDec);
        let mut node = Node::new(NodeKind::ClassVarDec);
        node.add_child(self.expect_one_of(TokenKind::Keyword, CLASS_VAR_KINDS)?);
        node.add_child(self.expect_type()?);
        self.parse_name_list(&mut node)?;
        node.add_child(self.expect_value(TokenKind::Symbol, ";")?);
        Ok(node.into())
    }

    /// subroutineDec → ('constructor'|'function'|'method') ('void'|type)
    ///                 identifier '(' parameterList ')' subroutineBody
    pub fn parse_subroutine(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::Subroutine);
        let mut node = Node::new(NodeKind::Subroutine);
        node.add_child(self.expect_one_of(TokenKind::Keyword, SUBROUTINE_KINDS)?);
        node.add_child(self.expect_return_type()?);
        node.add_child(self.expect(TokenKind::Identifier)?);
        node.add_child(self.expect_value(TokenKind::Symbol, "(")?);
        node.add_child(self.parse_parameter_list()?);
        node.add_child(self.expect_value(TokenKind::Symbol, ")")?);
        node.add_child(self.parse_subroutine_body()?);
        Ok(node.into())
    }

    /// parameterList → (type identifier (',' type identifier)*)?
    pub fn parse_parameter_list(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::ParameterList);
        let mut node = Node::new(NodeKind::ParameterList);
        if self.at_type() {
            node.add_child(self.expect_type()?);
            node.add_child(self.expect(TokenKind::Identifier)?);
            while self.check_value(TokenKind::Symbol, ",") {
                node.add_child(self.expect_value(TokenKind::Symbol, ",")?);
                node.add_child(self.expect_type()?);
                node.add_child(self.expect(TokenKind::Identifier)?);
            }
        }
        Ok(node.into())
    }

    /// subroutineBody → '{' varDec* statements '}'
    pub fn parse_subroutine_body(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::SubroutineBody);
        let mut node = Node::new(NodeKind::SubroutineBody);
        node.add_child(self.expect_value(TokenKind::Symbol, "{")?);
        while self.check_value(TokenKind::Keyword, "var") {
            node.add_child(self.parse_var_dec()?);
        }
        node.add_child(self.parse_statements()?);
        node.add_child(self.expect_value(TokenKind::Symbol, "}")?);
        Ok(node.into())
    }

    /// varDec → 'var' type identifier (',' identifier)* ';'
    pub fn parse_var_dec(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::VarDec);
        let mut node = Node::new(NodeKind::VarDec);
        node.add_child(self.expect_value(TokenKind::Keyword, "var")?);
        node.add_child(self.expect_type()?);
        self.parse_name_list(&mut node)?;
        node.add_child(self.expect_value(TokenKind::Symbol, ";")?);
        Ok(node.into())
    }

    /// identifier (',' identifier)*, appended to the enclosing declaration.
    fn parse_name_list(&mut self, node: &mut Node) -> ParseResult<()> {
        node.add_child(self.expect(TokenKind::Identifier)?);
        while self.check_value(TokenKind::Symbol, ",") {
            node.add_child(self.expect_value(TokenKind::Symbol, ",")?);
            node.add_child(self.expect(TokenKind::Identifier)?);
        }
        Ok(())
    }

    // ========== Statements ==========

    /// statements → statement*
    pub fn parse_statements(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::Statements);
        let mut node = Node::new(NodeKind::Statements);
        while self.check_one_of(TokenKind::Keyword, STATEMENT_KEYWORDS) {
            let statement = match self.peek().map(Token::text) {
                Some("let") => self.parse_let()?,
                Some("if") => self.parse_if()?,
                Some("while") => self.parse_while()?,
                Some("do") => self.parse_do()?,
                _ => self.parse_return()?,
            };
            node.add_child(statement);
        }
        Ok(node.into())
    }

    /// letStatement → 'let' identifier ('[' expression ']')? '=' expression ';'
    pub fn parse_let(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::LetStatement);
        let mut node = Node::new(NodeKind::LetStatement);
        node.add_child(self.expect_value(TokenKind::Keyword, "let")?);
        node.add_child(self.expect(TokenKind::Identifier)?);
        if self.check_value(TokenKind::Symbol, "[") {
            node.add_child(self.expect_value(TokenKind::Symbol, "[")?);
            node.add_child(self.parse_expression()?);
            node.add_child(self.expect_value(TokenKind::Symbol, "]")?);
        }
        node.add_child(self.expect_value(TokenKind::Symbol, "=")?);
        node.add_child(self.parse_expression()?);
        node.add_child(self.expect_value(TokenKind::Symbol, ";")?);
        Ok(node.into())
    }

    /// ifStatement → 'if' '(' expression ')' '{' statements '}'
    ///               ('else' '{' statements '}')?
    pub fn parse_if(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::IfStatement);
        let mut node = Node::new(NodeKind::IfStatement);
        node.add_child(self.expect_value(TokenKind::Keyword, "if")?);
        self.parse_condition(&mut node)?;
        self.parse_block(&mut node)?;
        if self.check_value(TokenKind::Keyword, "else") {
            node.add_child(self.expect_value(TokenKind::Keyword, "else")?);
            self.parse_block(&mut node)?;
        }
        Ok(node.into())
    }

    /// whileStatement → 'while' '(' expression ')' '{' statements '}'
    pub fn parse_while(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::WhileStatement);
        let mut node = Node::new(NodeKind::WhileStatement);
        node.add_child(self.expect_value(TokenKind::Keyword, "while")?);
        self.parse_condition(&mut node)?;
        self.parse_block(&mut node)?;
        Ok(node.into())
    }

    /// doStatement → 'do' subroutineCall ';'
    pub fn parse_do(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::DoStatement);
        let mut node = Node::new(NodeKind::DoStatement);
        node.add_child(self.expect_value(TokenKind::Keyword, "do")?);
        node.add_child(self.parse_subroutine_call()?);
        node.add_child(self.expect_value(TokenKind::Symbol, ";")?);
        Ok(node.into())
    }

    /// returnStatement → 'return' expression? ';'
    pub fn parse_return(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::ReturnStatement);
        let mut node = Node::new(NodeKind::ReturnStatement);
        node.add_child(self.expect_value(TokenKind::Keyword, "return")?);
        if !self.check_value(TokenKind::Symbol, ";") {
            node.add_child(self.parse_expression()?);
        }
        node.add_child(self.expect_value(TokenKind::Symbol, ";")?);
        Ok(node.into())
    }

    /// '(' expression ')', appended to the enclosing statement.
    fn parse_condition(&mut self, node: &mut Node) -> ParseResult<()> {
        node.add_child(self.expect_value(TokenKind::Symbol, "(")?);
        node.add_child(self.parse_expression()?);
        node.add_child(self.expect_value(TokenKind::Symbol, ")")?);
        Ok(())
    }

    /// '{' statements '}', appended to the enclosing statement.
    fn parse_block(&mut self, node: &mut Node) -> ParseResult<()> {
        node.add_child(self.expect_value(TokenKind::Symbol, "{")?);
        node.add_child(self.nested(Self::parse_statements)?);
        node.add_child(self.expect_value(TokenKind::Symbol, "}")?);
        Ok(())
    }

    /// Run `rule` one nesting level deeper, failing once [`MAX_DEPTH`] is
    /// reached.
    fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(Expected::Nesting { limit: MAX_DEPTH }));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    // ========== Expressions ==========

    /// expression → term (binOp term)*
    ///
    /// Operators are collected as a flat chain; no precedence is applied.
    pub fn parse_expression(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::Expression);
        let mut node = Node::new(NodeKind::Expression);
        node.add_child(self.parse_term()?);
        while self.check_one_of(TokenKind::Symbol, BINARY_OPS) {
            node.add_child(self.expect_one_of(TokenKind::Symbol, BINARY_OPS)?);
            node.add_child(self.parse_term()?);
        }
        Ok(node.into())
    }

    /// term → intConst | strConst | keywordConst
    ///      | identifier ('[' expression ']' | '(' expressionList ')'
    ///                    | '.' identifier '(' expressionList ')')?
    ///      | '(' expression ')' | unaryOp term
    pub fn parse_term(&mut self) -> ParseResult<ParseTree> {
        self.nested(Self::term)
    }

    fn term(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::Term);
        let mut node = Node::new(NodeKind::Term);

        if self.check(TokenKind::IntegerConstant) {
            node.add_child(self.expect(TokenKind::IntegerConstant)?);
        } else if self.check(TokenKind::StringConstant) {
            node.add_child(self.expect(TokenKind::StringConstant)?);
        } else if self.check_one_of(TokenKind::Keyword, KEYWORD_CONSTANTS) {
            node.add_child(self.expect_one_of(TokenKind::Keyword, KEYWORD_CONSTANTS)?);
        } else if self.check(TokenKind::Identifier) {
            node.add_child(self.expect(TokenKind::Identifier)?);
            // The token after the name picks the continuation.
            if self.check_value(TokenKind::Symbol, "[") {
                node.add_child(self.expect_value(TokenKind::Symbol, "[")?);
                node.add_child(self.parse_expression()?);
                node.add_child(self.expect_value(TokenKind::Symbol, "]")?);
            } else if self.check_value(TokenKind::Symbol, "(") {
                self.parse_arguments(&mut node)?;
            } else if self.check_value(TokenKind::Symbol, ".") {
                node.add_child(self.expect_value(TokenKind::Symbol, ".")?);
                node.add_child(self.expect(TokenKind::Identifier)?);
                self.parse_arguments(&mut node)?;
            }
        } else if self.check_value(TokenKind::Symbol, "(") {
            node.add_child(self.expect_value(TokenKind::Symbol, "(")?);
            node.add_child(self.parse_expression()?);
            node.add_child(self.expect_value(TokenKind::Symbol, ")")?);
        } else if self.check_one_of(TokenKind::Symbol, UNARY_OPS) {
            node.add_child(self.expect_one_of(TokenKind::Symbol, UNARY_OPS)?);
            node.add_child(self.parse_term()?);
        } else {
            return Err(self.error(Expected::Term));
        }

        Ok(node.into())
    }

    /// expressionList → (expression (',' expression)*)?
    pub fn parse_expression_list(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::ExpressionList);
        let mut node = Node::new(NodeKind::ExpressionList);
        if !self.check_value(TokenKind::Symbol, ")") {
            node.add_child(self.parse_expression()?);
            while self.check_value(TokenKind::Symbol, ",") {
                node.add_child(self.expect_value(TokenKind::Symbol, ",")?);
                node.add_child(self.parse_expression()?);
            }
        }
        Ok(node.into())
    }

    /// subroutineCall → identifier ('.' identifier)? '(' expressionList ')'
    pub fn parse_subroutine_call(&mut self) -> ParseResult<ParseTree> {
        self.enter(NodeKind::SubroutineCall);
        let mut node = Node::new(NodeKind::SubroutineCall);
        node.add_child(self.expect(TokenKind::Identifier)?);
        if self.check_value(TokenKind::Symbol, ".") {
            node.add_child(self.expect_value(TokenKind::Symbol, ".")?);
            node.add_child(self.expect(TokenKind::Identifier)?);
        }
        self.parse_arguments(&mut node)?;
        Ok(node.into())
    }

    /// '(' expressionList ')', appended to the enclosing call.
    fn parse_arguments(&mut self, node: &mut Node) -> ParseResult<()> {
        node.add_child(self.expect_value(TokenKind::Symbol, "(")?);
        node.add_child(self.parse_expression_list()?);
        node.add_child(self.expect_value(TokenKind::Symbol, ")")?);
        Ok(())
    }

    // ========== Types ==========

    fn at_type(&self) -> bool {
        self.check_one_of(TokenKind::Keyword, PRIMITIVE_TYPES) || self.check(TokenKind::Identifier)
    }

    /// type → 'int' | 'char' | 'boolean' | identifier
    fn expect_type(&mut self) -> ParseResult<ParseTree> {
        if self.check_one_of(TokenKind::Keyword, PRIMITIVE_TYPES) {
            self.expect_one_of(TokenKind::Keyword, PRIMITIVE_TYPES)
        } else if self.check(TokenKind::Identifier) {
            self.expect(TokenKind::Identifier)
        } else {
            Err(self.error(Expected::Type))
        }
    }

    /// 'void' | type
    fn expect_return_type(&mut self) -> ParseResult<ParseTree> {
        if self.check_value(TokenKind::Keyword, "void") {
            self.expect_value(TokenKind::Keyword, "void")
        } else if self.at_type() {
            self.expect_type()
        } else {
            Err(self.error(Expected::ReturnType))
        }
    }

    // ========== Token Helpers ==========

    /// The current token, or `None` once the input is exhausted.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Move past the current token. A no-op at end of input.
    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind() == kind)
    }

    pub fn check_value(&self, kind: TokenKind, value: &str) -> bool {
        self.peek().is_some_and(|token| token.is(kind, value))
    }

    pub fn check_one_of(&self, kind: TokenKind, values: &[&str]) -> bool {
        self.peek()
            .is_some_and(|token| token.kind() == kind && values.contains(&token.text()))
    }

    /// Consume a token of `kind` with any lexeme as a leaf.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<ParseTree> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            Err(self.error(Expected::Token { kind, value: None }))
        }
    }

    /// Consume exactly `value` of `kind` as a leaf.
    pub fn expect_value(&mut self, kind: TokenKind, value: &'static str) -> ParseResult<ParseTree> {
        if self.check_value(kind, value) {
            Ok(self.bump())
        } else {
            Err(self.error(Expected::Token {
                kind,
                value: Some(value),
            }))
        }
    }

    /// Consume a token of `kind` whose lexeme is in `values` as a leaf.
    pub fn expect_one_of(
        &mut self,
        kind: TokenKind,
        values: &'static [&'static str],
    ) -> ParseResult<ParseTree> {
        if self.check_one_of(kind, values) {
            Ok(self.bump())
        } else {
            Err(self.error(Expected::OneOf { kind, values }))
        }
    }

    /// Require that every token has been consumed.
    pub fn expect_end(&self) -> ParseResult<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.error(Expected::EndOfInput))
        }
    }

    /// Turn the current token into a leaf and step past it.
    /// Callers have already checked that a token is present.
    fn bump(&mut self) -> ParseTree {
        let leaf = ParseTree::leaf(self.tokens[self.pos].clone());
        self.advance();
        leaf
    }

    fn error(&self, expected: Expected) -> SyntaxError {
        let (found, span) = match self.peek() {
            Some(token) => (Found::Token(token.clone()), token.span()),
            None => {
                let end = self.tokens.last().map_or(0, |token| token.span().end);
                (Found::EndOfInput, Span::new(end, end))
            }
        };
        trace!("syntax error at {}: expected {expected}, found {found}", self.pos);
        SyntaxError::new(expected, found, self.pos, span)
    }

    fn enter(&self, rule: NodeKind) {
        trace!("{rule}: next token = {:?}", self.peek().map(Token::text));
    }
}
