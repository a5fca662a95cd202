//! Syntax error type produced by the parser
//!
//! Carries a categorized code, the offending range, and an optional hint.
//! Rendering to `line:col` form goes through [`crate::base::LineIndex`].

use rowan::TextRange;

use super::codes::ErrorCode;
use crate::base::LineIndex;

/// Related location information for an error
///
/// Used to point to related source locations, e.g.,
/// "unclosed brace opened here" pointing to the opening `{`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Description of this related location
    pub message: String,
    /// Source range
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
    /// Related source locations
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            hint: None,
            related: vec![],
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    /// Format the error for display, without position information
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }

    /// Format the error with a 1-based `line:col` prefix
    pub fn render(&self, index: &LineIndex) -> String {
        let start = index.line_col(self.range.start());
        let mut result = format!("{}: {}", start, self.format());
        for related in &self.related {
            let at = index.line_col(related.range.start());
            result.push_str(&format!("\n  {}: {}", at, related.message));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowan::TextSize;

    #[test]
    fn test_syntax_error_new() {
        let err = SyntaxError::new(
            "expected '}'",
            TextRange::new(TextSize::new(10), TextSize::new(11)),
            ErrorCode::E0202,
        );

        assert_eq!(err.message, "expected '}'");
        assert_eq!(err.code, ErrorCode::E0202);
        assert!(err.hint.is_none());
        assert!(err.related.is_empty());
    }

    #[test]
    fn test_format_error_with_hint() {
        let err = SyntaxError::new("expected type", TextRange::empty(TextSize::new(3)), ErrorCode::E0401)
            .with_hint("add a type after ':'");

        let formatted = err.format();
        assert!(formatted.contains("E0401"));
        assert!(formatted.contains("expected type"));
        assert!(formatted.contains("hint: add a type"));
    }

    #[test]
    fn test_render_uses_line_and_column() {
        let source = "type A = B;\ninterface C {";
        let index = LineIndex::new(source);
        let err = SyntaxError::new("unclosed '{'", TextRange::empty(TextSize::new(25)), ErrorCode::E0202)
            .with_related(RelatedInfo::new(
                "opened here",
                TextRange::new(TextSize::new(24), TextSize::new(25)),
            ));

        let rendered = err.render(&index);
        assert!(rendered.starts_with("2:14: E0202"), "got {rendered}");
        assert!(rendered.contains("2:13: opened here"), "got {rendered}");
    }
}
