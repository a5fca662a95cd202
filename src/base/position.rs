//! Position tracking for diagnostics
//!
//! Converts byte offsets from the CST into 1-based line/column pairs
//! for error reporting.

use std::fmt;
use text_size::TextSize;

/// A 1-based line/column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Maps byte offsets to line/column positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self { line_starts }
    }

    /// Number of lines in the indexed text
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a 1-based line/column pair.
    ///
    /// Columns count bytes, which matches the lexer's offsets.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let col = offset - self.line_starts[line];
        LineCol {
            line: line as u32 + 1,
            col: u32::from(col) + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        let index = LineIndex::new("abc\ndef");
        assert_eq!(index.line_col(TextSize::new(0)), LineCol { line: 1, col: 1 });
        assert_eq!(index.line_col(TextSize::new(2)), LineCol { line: 1, col: 3 });
    }

    #[test]
    fn test_line_col_after_newline() {
        let index = LineIndex::new("abc\ndef\n");
        assert_eq!(index.line_col(TextSize::new(3)), LineCol { line: 1, col: 4 });
        assert_eq!(index.line_col(TextSize::new(4)), LineCol { line: 2, col: 1 });
        assert_eq!(index.line_col(TextSize::new(8)), LineCol { line: 3, col: 1 });
        assert_eq!(index.line_count(), 3);
    }

    #[test]
    fn test_line_col_display() {
        assert_eq!(LineCol { line: 12, col: 7 }.to_string(), "12:7");
    }
}
