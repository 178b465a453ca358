//! Source locations for CODEOWNERS lines and tokens.

/// A location span in the source file.
///
/// Line and column are 1-based for human-readable diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset from the start of the input (0-based).
    pub offset: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based).
    pub column: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span with the given position and length.
    pub fn new(offset: usize, line: usize, column: usize, length: usize) -> Self {
        Self {
            offset,
            line,
            column,
            length,
        }
    }

    /// Creates a span covering a token that starts `column_offset` bytes into a
    /// line beginning at `line_offset`.
    pub fn within_line(line_offset: usize, line: usize, column_offset: usize, length: usize) -> Self {
        Self::new(line_offset + column_offset, line, column_offset + 1, length)
    }

    /// Returns the end offset of this span.
    pub fn end_offset(&self) -> usize {
        self.offset + self.length
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 1, 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_line_converts_to_one_based_column() {
        let span = Span::within_line(12, 2, 5, 4);
        assert_eq!(span.offset, 17);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 6);
        assert_eq!(span.end_offset(), 21);
    }

    #[test]
    fn default_points_at_start() {
        let span = Span::default();
        assert_eq!(span, Span::new(0, 1, 1, 0));
    }
}
