//! Outline printer for parse trees.
//! 语法树的大纲式打印器。
//!
//! Renders one node per line. Interior nodes show their rule label, leaves
//! show `kind text`, and children hang off `└` guides beneath their parent:
//!
//! ```text
//! class
//!   └ keyword class
//!   └ identifier Main
//!   └ classVarDec
//!   │   └ keyword static
//! ```

use crate::ParseTree;

/// Printer configuration.
/// 打印器配置。
#[derive(Debug, Clone)]
pub struct PrintConfig {
    /// Spaces before each guide. / 每个引导线前的空格数。
    pub indent_width: usize,
    /// Use `|` and `` ` `` instead of box-drawing characters.
    /// 使用 ASCII 字符代替制表符。
    pub ascii: bool,
    /// Add trailing newline. / 添加结尾换行符。
    pub trailing_newline: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            ascii: false,
            trailing_newline: true,
        }
    }
}

impl PrintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    pub fn trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    fn branch(&self) -> &'static str {
        if self.ascii { "`- " } else { "└ " }
    }

    fn pipe(&self) -> &'static str {
        if self.ascii { "| " } else { "│ " }
    }
}

/// Render a tree with the given configuration.
/// 使用给定配置渲染语法树。
pub fn render(tree: &ParseTree, config: &PrintConfig) -> String {
    let mut printer = Printer::new(config.clone());
    printer.print_tree(tree);
    printer.finish()
}

/// Line-oriented printer that tracks nesting depth.
/// 跟踪嵌套深度的按行打印器。
pub struct Printer {
    config: PrintConfig,
    /// Padding written before every guide. / 每个引导线前的填充。
    pad: String,
    output: String,
    depth: usize,
}

impl Printer {
    pub fn new(config: PrintConfig) -> Self {
        Self {
            pad: " ".repeat(config.indent_width),
            config,
            output: String::new(),
            depth: 0,
        }
    }

    /// Get the rendered output.
    /// 获取渲染结果。
    pub fn finish(mut self) -> String {
        if !self.config.trailing_newline && self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output
    }

    /// Print `tree` and its descendants at the current depth.
    pub fn print_tree(&mut self, tree: &ParseTree) {
        match tree {
            ParseTree::Leaf(token) => {
                self.writeln(&format!("{} {}", token.kind(), token.text()));
            }
            ParseTree::Node(node) => {
                self.writeln(node.kind().as_str());
                self.indent();
                for child in node.children() {
                    self.print_tree(child);
                }
                self.dedent();
            }
        }
    }

    /// Write one line prefixed by the guides for the current depth.
    /// 写入一行，并加上当前深度的引导线前缀。
    pub fn writeln(&mut self, line: &str) {
        if self.depth > 0 {
            for _ in 1..self.depth {
                self.output.push_str(&self.pad);
                self.output.push_str(self.config.pipe());
            }
            self.output.push_str(&self.pad);
            self.output.push_str(self.config.branch());
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Node, NodeKind, Token};

    fn class_tree() -> ParseTree {
        let mut var = Node::new(NodeKind::ClassVarDec);
        var.add_child(Token::keyword("static"));
        let mut class = Node::new(NodeKind::Class);
        class.add_child(Token::keyword("class"));
        class.add_child(var);
        class.into()
    }

    #[test]
    fn test_render_unicode() {
        let out = render(&class_tree(), &PrintConfig::default());
        assert_eq!(
            out,
            "class\n  └ keyword class\n  └ classVarDec\n  │   └ keyword static\n"
        );
    }

    #[test]
    fn test_render_ascii_without_trailing_newline() {
        let config = PrintConfig::new().ascii(true).trailing_newline(false);
        let out = render(&class_tree(), &config);
        assert_eq!(
            out,
            "class\n  `- keyword class\n  `- classVarDec\n  |   `- keyword static"
        );
    }

    #[test]
    fn test_indent_width() {
        let config = PrintConfig::new().indent_width(0).ascii(true);
        let out = render(&class_tree(), &config);
        assert!(out.contains("\n| `- keyword static\n"));
    }
}
