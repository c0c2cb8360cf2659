use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticKind {
    /// A character the scanner could not classify.
    Lexical,
    /// A token a grammar rule could not start or continue with.
    Syntax,
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = match self {
            DiagnosticKind::Lexical => "lexical error",
            DiagnosticKind::Syntax => "syntax error",
        };
        write!(f, "{val}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Byte offset of the offending token.
    pub offset: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            message: message.into(),
        }
    }

    /// 1-based line and column (in characters) of the offset within `src`.
    pub fn line_col(&self, src: &str) -> (usize, usize) {
        let before = src.get(..self.offset.min(src.len())).unwrap_or(src);
        let line = before.matches('\n').count() + 1;
        let col = before.rsplit('\n').next().unwrap_or("").chars().count() + 1;
        (line, col)
    }

    /// Formats the diagnostic with its source line and a caret under the
    /// offending column.
    pub fn render(&self, src: &str) -> String {
        let (line, col) = self.line_col(src);
        let text = src.lines().nth(line - 1).unwrap_or("");
        let marker = format!("{}^", " ".repeat(col - 1));
        format!(
            "{line}:{col}: {}: {}\n{text}\n{marker}",
            self.kind, self.message
        )
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.offset, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::{Diagnostic, DiagnosticKind};

    #[test]
    fn line_col_first_line() {
        let diag = Diagnostic::new(DiagnosticKind::Lexical, 11, "unexpected character '#'");
        assert_eq!(diag.line_col("int x = 10 # ;"), (1, 12));
    }

    #[test]
    fn line_col_after_newline() {
        let diag = Diagnostic::new(DiagnosticKind::Syntax, 17, "");
        assert_eq!(diag.line_col("int x = 1;\nprint y;"), (2, 7));
    }

    #[test]
    fn offset_past_end_is_clamped() {
        let diag = Diagnostic::new(DiagnosticKind::Syntax, 99, "");
        assert_eq!(diag.line_col("ab\n"), (2, 1));
        assert_eq!(diag.render("ab\n"), "2:1: syntax error: \n\n^");
    }

    #[test]
    fn render_points_at_column() {
        let src = "int x = 1;\nprint y;";
        let diag = Diagnostic::new(DiagnosticKind::Syntax, 17, "expected '('");
        assert_eq!(
            diag.render(src),
            "2:7: syntax error: expected '('\nprint y;\n      ^"
        );
    }

    #[test]
    fn display() {
        let diag = Diagnostic::new(DiagnosticKind::Lexical, 3, "unexpected character '$'");
        assert_eq!(
            diag.to_string(),
            "lexical error at 3: unexpected character '$'"
        );
    }
}
