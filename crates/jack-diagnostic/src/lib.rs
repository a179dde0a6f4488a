//! Diagnostic and error reporting for Jack.
//! Jack 的诊断和错误报告。
//!
//! This crate renders diagnostics using ariadne.
//! 本 crate 使用 ariadne 库渲染错误信息。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label, Severity};

use std::io::{self, Write};

use ariadne::{
    ColorGenerator, Config, IndexType, Label as AriadneLabel, Report, ReportKind, Source,
};

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    write(source, filename, diagnostic, io::stderr())
}

/// Render a diagnostic to any writer.
/// 将诊断信息渲染到任意输出。
///
/// Spans are byte offsets into `source`.
pub fn write<W: Write>(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    out: W,
) -> io::Result<()> {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
    };

    // Tokens without source positions carry a dummy span; clamp so ariadne
    // never points past the end of the text.
    let clamp = |span: jack_syntax::Span| {
        let end = span.end.min(source.len());
        span.start.min(end)..end
    };

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(kind, filename, clamp(diagnostic.span).start)
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let color = colors.next();
        let ariadne_label = AriadneLabel::new((filename, clamp(label.span)))
            .with_message(&label.message)
            .with_color(color);
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish().write((filename, Source::from(source)), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jack_syntax::Span;

    fn render(source: &str, diagnostic: &Diagnostic) -> String {
        let mut out = Vec::new();
        write(source, "Main.jack", diagnostic, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn missing_semicolon(source: &str) -> Diagnostic {
        let start = source.find("  }").unwrap() + 2;
        let span = Span::new(start, start + 1);
        Diagnostic::error(DiagnosticKind::Parser, span, "expected symbol ';'")
            .with_code(ErrorCode::UnexpectedToken)
            .with_label(Label::new(span, "expected symbol ';'"))
    }

    #[test]
    fn test_write_ascii_location() {
        let source = "class Main {\n  // plain\n  function void main() {\n    return\n  }\n}\n";
        let output = render(source, &missing_semicolon(source));
        assert!(output.contains("Main.jack:5:3"), "{output}");
        assert!(output.contains("expected symbol ';'"));
    }

    #[test]
    fn test_write_multibyte_location() {
        let source =
            "class Main {\n  // 日本語のコメント\n  function void main() {\n    return\n  }\n}\n";
        let output = render(source, &missing_semicolon(source));
        assert!(output.contains("Main.jack:5:3"), "{output}");
        assert!(output.contains("E0100"));
    }
}
