//! Integration tests for jack-syntax crate.

use jack_syntax::{Node, NodeKind, ParseTree, PrintConfig, Span, Token, TokenKind, printer};

#[test]
fn test_token_accessors() {
    let token = Token::with_span(TokenKind::IntegerConstant, "42", Span::new(10, 12));
    assert_eq!(token.kind(), TokenKind::IntegerConstant);
    assert_eq!(token.text(), "42");
    assert_eq!(token.span().range(), 10..12);
    assert_eq!(token.to_string(), "integerConstant `42`");
}

#[test]
fn test_token_kind_labels() {
    let labels: Vec<_> = [
        TokenKind::Keyword,
        TokenKind::Symbol,
        TokenKind::Identifier,
        TokenKind::IntegerConstant,
        TokenKind::StringConstant,
    ]
    .iter()
    .map(TokenKind::as_str)
    .collect();
    assert_eq!(
        labels,
        ["keyword", "symbol", "identifier", "integerConstant", "stringConstant"]
    );
}

#[test]
fn test_children_keep_insertion_order() {
    let mut node = Node::new(NodeKind::VarDec);
    for text in ["var", "int", "i", ",", "j", ";"] {
        node.add_child(Token::new(TokenKind::Symbol, text));
    }
    let texts: Vec<_> = node.children().iter().map(ParseTree::text).collect();
    assert_eq!(texts, ["var", "int", "i", ",", "j", ";"]);
}

#[test]
fn test_leaf_has_no_children() {
    let leaf = ParseTree::leaf(Token::identifier("x"));
    assert!(leaf.is_leaf());
    assert_eq!(leaf.label(), "identifier");
    assert_eq!(leaf.kind(), None);
    assert_eq!(leaf.token(), Some(&Token::identifier("x")));
    assert!(leaf.children().is_empty());
}

#[test]
fn test_empty_list_nodes() {
    assert!(NodeKind::Statements.may_be_empty());
    assert!(NodeKind::ParameterList.may_be_empty());
    assert!(NodeKind::ExpressionList.may_be_empty());
    assert!(!NodeKind::ReturnStatement.may_be_empty());

    let tree = ParseTree::from(Node::new(NodeKind::Statements));
    assert_eq!(tree.label(), "statements");
    assert_eq!(tree.text(), "");
    assert!(tree.children().is_empty());
}

#[test]
fn test_display_matches_default_printer() {
    let mut node = Node::new(NodeKind::ReturnStatement);
    node.add_child(Token::keyword("return"));
    node.add_child(Token::symbol(";"));
    let tree = ParseTree::from(node);
    assert_eq!(tree.to_string(), printer::render(&tree, &PrintConfig::default()));
    assert_eq!(
        tree.to_string(),
        "returnStatement\n  └ keyword return\n  └ symbol ;\n"
    );
}

#[test]
fn test_span_merge() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    assert_eq!(a.merge(b), Span::new(10, 30));
    assert_eq!(Span::DUMMY.merge(b), b);
    assert_eq!(a.merge(Span::DUMMY), a);
    assert_eq!(a.merge(b).range(), 10..30);
}
