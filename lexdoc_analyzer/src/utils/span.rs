//! Source location tracking
//!
//! Offsets throughout lexdoc are character offsets (Unicode scalar values),
//! matching what editors report. Lines and columns are 1-based.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and character offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Character offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number in characters (1-based)
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Offset 0, line 1, column 1
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }

    /// Advance position by one character
    pub fn advance(self, ch: char) -> Self {
        match ch {
            '\n' => Self::new(self.offset + 1, self.line + 1, 1),
            _ => Self::new(self.offset + 1, self.line, self.column + 1),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Check if this span contains a character offset
    pub fn contains_offset(&self, offset: usize) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Line table for converting between character offsets and line/column
#[derive(Debug, Clone)]
pub struct SourceMap {
    source: String,
    /// Character offsets of line starts
    line_starts: Vec<usize>,
    /// Byte offsets of line starts
    line_byte_starts: Vec<usize>,
    char_count: usize,
}

impl SourceMap {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut line_starts = vec![0];
        let mut line_byte_starts = vec![0];
        let mut char_count = 0;

        for (byte_offset, ch) in source.char_indices() {
            char_count += 1;
            if ch == '\n' {
                line_starts.push(char_count);
                line_byte_starts.push(byte_offset + 1);
            }
        }

        Self {
            source,
            line_starts,
            line_byte_starts,
            char_count,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line and column for a character offset (clamped to end of input)
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.char_count);
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);
        let column = offset - self.line_starts[line];

        Position::new(offset, (line + 1) as u32, (column + 1) as u32)
    }

    /// Span covering two character offsets
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.position_at(start), self.position_at(end))
    }

    /// Character offset for a 1-based line and column.
    ///
    /// The column may point one past the last character of the line.
    pub fn offset_at(&self, line: u32, column: u32) -> Option<usize> {
        if line == 0 || column == 0 {
            return None;
        }
        let text = self.get_line(line)?;
        let column_index = (column - 1) as usize;
        if column_index > text.chars().count() {
            return None;
        }
        Some(self.line_starts[(line - 1) as usize] + column_index)
    }

    /// Get a line of text by line number (1-based), without its terminator
    pub fn get_line(&self, line_num: u32) -> Option<&str> {
        if line_num == 0 {
            return None;
        }

        let line_idx = (line_num - 1) as usize;
        if line_idx >= self.line_byte_starts.len() {
            return None;
        }

        let start = self.line_byte_starts[line_idx];
        let end = if line_idx + 1 < self.line_byte_starts.len() {
            self.line_byte_starts[line_idx + 1] - 1
        } else {
            self.source.len()
        };

        Some(self.source[start..end].trim_end_matches('\r'))
    }

    /// Render the line holding `span` with a caret underline
    pub fn excerpt(&self, span: &Span) -> String {
        let mut result = String::new();
        result.push_str(&format!("  --> {}:{}\n", span.start.line, span.start.column));

        if let Some(line) = self.get_line(span.start.line) {
            let line_num_str = span.start.line.to_string();
            let padding = " ".repeat(line_num_str.len());

            result.push_str(&format!("{} |\n", padding));
            result.push_str(&format!("{} | {}\n", line_num_str, line));

            let span_len = if span.start.line == span.end.line {
                (span.end.column - span.start.column) as usize
            } else {
                line.chars().count() + 1 - span.start.column as usize
            };

            result.push_str(&format!(
                "{} | {}{}\n",
                padding,
                " ".repeat((span.start.column - 1) as usize),
                "^".repeat(span_len.max(1))
            ));
        }

        result
    }
}
