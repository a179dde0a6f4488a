//! Token and parse tree definitions for Jack.
//! Jack 的 token 与语法树定义。
//!
//! This crate is the leaf of the front end: the lexer produces [`Token`]s,
//! the parser consumes them and builds a [`ParseTree`].
//! 本 crate 是前端的基础：词法分析器产生 token，语法分析器消费它们并构建语法树。

mod span;
mod token;
mod tree;
pub mod printer;

pub use printer::PrintConfig;
pub use span::Span;
pub use token::{KEYWORDS, Token, TokenKind, is_keyword};
pub use tree::{Leaves, Node, NodeKind, ParseTree, Walk};

impl std::fmt::Display for ParseTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&printer::render(self, &PrintConfig::default()))
    }
}
