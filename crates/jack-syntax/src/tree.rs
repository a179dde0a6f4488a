//! Concrete parse tree.
//!
//! Interior nodes are labelled with the grammar rule that produced them and
//! own their children in derivation order. Leaves wrap the consumed token.

use std::fmt;

use serde::Serialize;

use crate::{Span, Token};

/// The grammar rule an interior node was built by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Program,
    Class,
    ClassVarDec,
    Subroutine,
    ParameterList,
    SubroutineBody,
    VarDec,
    Statements,
    LetStatement,
    IfStatement,
    WhileStatement,
    DoStatement,
    ReturnStatement,
    Expression,
    Term,
    ExpressionList,
    SubroutineCall,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::Class => "class",
            NodeKind::ClassVarDec => "classVarDec",
            NodeKind::Subroutine => "subroutine",
            NodeKind::ParameterList => "parameterList",
            NodeKind::SubroutineBody => "subroutineBody",
            NodeKind::VarDec => "varDec",
            NodeKind::Statements => "statements",
            NodeKind::LetStatement => "letStatement",
            NodeKind::IfStatement => "ifStatement",
            NodeKind::WhileStatement => "whileStatement",
            NodeKind::DoStatement => "doStatement",
            NodeKind::ReturnStatement => "returnStatement",
            NodeKind::Expression => "expression",
            NodeKind::Term => "term",
            NodeKind::ExpressionList => "expressionList",
            NodeKind::SubroutineCall => "subroutineCall",
        }
    }

    /// Rules whose body is a bare repetition and may therefore match nothing.
    pub fn may_be_empty(&self) -> bool {
        matches!(
            self,
            NodeKind::ParameterList | NodeKind::Statements | NodeKind::ExpressionList
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interior node under construction or complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    kind: NodeKind,
    children: Vec<ParseTree>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[ParseTree] {
        &self.children
    }

    /// Append a child after all existing children.
    pub fn add_child(&mut self, child: impl Into<ParseTree>) {
        self.children.push(child.into());
    }
}

/// A node of the concrete syntax tree: either a grammar production or a
/// terminal token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParseTree {
    Node(Node),
    Leaf(Token),
}

impl ParseTree {
    pub fn leaf(token: Token) -> Self {
        ParseTree::Leaf(token)
    }

    /// Rule name for interior nodes, token kind for leaves.
    pub fn label(&self) -> &'static str {
        match self {
            ParseTree::Node(node) => node.kind.as_str(),
            ParseTree::Leaf(token) => token.kind().as_str(),
        }
    }

    /// The lexeme of a leaf; empty for interior nodes.
    pub fn text(&self) -> &str {
        match self {
            ParseTree::Node(_) => "",
            ParseTree::Leaf(token) => token.text(),
        }
    }

    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Node(node) => &node.children,
            ParseTree::Leaf(_) => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ParseTree::Leaf(_))
    }

    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            ParseTree::Node(node) => Some(node.kind),
            ParseTree::Leaf(_) => None,
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseTree::Node(_) => None,
            ParseTree::Leaf(token) => Some(token),
        }
    }

    /// Every subtree in pre-order, starting with `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Leaf tokens in pre-order, i.e. in the order they were consumed.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { walk: self.walk() }
    }

    /// Compare the pre-order `(label, text)` sequence of the whole tree,
    /// interior nodes and leaves alike, against `expected`.
    pub fn matches(&self, expected: &[(&str, &str)]) -> bool {
        self.walk()
            .map(|tree| (tree.label(), tree.text()))
            .eq(expected.iter().copied())
    }

    /// Source range covered by this subtree's positioned leaves.
    pub fn span(&self) -> Span {
        self.leaves()
            .fold(Span::DUMMY, |span, token| span.merge(token.span()))
    }

    /// Children that are interior nodes of the given kind.
    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &ParseTree> {
        self.children()
            .iter()
            .filter(move |child| child.kind() == Some(kind))
    }
}

impl From<Node> for ParseTree {
    fn from(node: Node) -> Self {
        ParseTree::Node(node)
    }
}

impl From<Token> for ParseTree {
    fn from(token: Token) -> Self {
        ParseTree::Leaf(token)
    }
}

/// Pre-order iterator over every subtree.
pub struct Walk<'a> {
    stack: Vec<&'a ParseTree>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ParseTree;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        self.stack.extend(tree.children().iter().rev());
        Some(tree)
    }
}

/// Pre-order iterator over the leaves of a tree.
pub struct Leaves<'a> {
    walk: Walk<'a>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.find_map(ParseTree::token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseTree {
        let mut term = Node::new(NodeKind::Term);
        term.add_child(Token::identifier("x"));
        let mut expr = Node::new(NodeKind::Expression);
        expr.add_child(term);
        expr.add_child(Token::symbol("+"));
        let mut rhs = Node::new(NodeKind::Term);
        rhs.add_child(Token::int("1"));
        expr.add_child(rhs);
        expr.into()
    }

    #[test]
    fn test_leaf_and_node_accessors() {
        let tree = sample();
        assert_eq!(tree.label(), "expression");
        assert_eq!(tree.text(), "");
        assert_eq!(tree.children().len(), 3);
        assert!(!tree.is_leaf());

        let op = &tree.children()[1];
        assert!(op.is_leaf());
        assert_eq!(op.label(), "symbol");
        assert_eq!(op.text(), "+");
        assert!(op.children().is_empty());
    }

    #[test]
    fn test_leaves_in_order() {
        let tree = sample();
        let texts: Vec<_> = tree.leaves().map(Token::text).collect();
        assert_eq!(texts, ["x", "+", "1"]);
    }

    #[test]
    fn test_walk_pre_order() {
        let tree = sample();
        let labels: Vec<_> = tree.walk().map(ParseTree::label).collect();
        assert_eq!(
            labels,
            ["expression", "term", "identifier", "symbol", "term", "integerConstant"]
        );
    }

    #[test]
    fn test_matches() {
        let tree = sample();
        assert!(tree.matches(&[
            ("expression", ""),
            ("term", ""),
            ("identifier", "x"),
            ("symbol", "+"),
            ("term", ""),
            ("integerConstant", "1"),
        ]));
        assert!(!tree.matches(&[("expression", ""), ("term", ""), ("identifier", "x")]));
        assert!(!tree.matches(&[
            ("expression", ""),
            ("term", ""),
            ("identifier", "x"),
            ("symbol", "-"),
            ("term", ""),
            ("integerConstant", "1"),
        ]));
    }

    #[test]
    fn test_nodes_of() {
        let tree = sample();
        assert_eq!(tree.nodes_of(NodeKind::Term).count(), 2);
        assert_eq!(tree.nodes_of(NodeKind::Statements).count(), 0);
    }

    #[test]
    fn test_span_ignores_dummy() {
        let mut node = Node::new(NodeKind::Term);
        node.add_child(Token::with_span(
            crate::TokenKind::Identifier,
            "a",
            Span::new(3, 4),
        ));
        node.add_child(Token::symbol("["));
        assert_eq!(ParseTree::from(node).span(), Span::new(3, 4));
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["kind"], "expression");
        assert_eq!(json["children"][1]["kind"], "symbol");
        assert_eq!(json["children"][1]["text"], "+");
        assert_eq!(json["children"][2]["children"][0]["kind"], "integerConstant");
    }
}
