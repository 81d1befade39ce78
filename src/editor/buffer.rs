//! The built-in practice text buffer.

use super::service::EditorBackend;

/// Practice text shown when no file is supplied on the command line.
pub const DEFAULT_PRACTICE_TEXT: &str = "\
The quick brown fox jumps over the lazy dog.
Pack my box with five dozen liquor jugs.
How vexingly quick daft zebras jump!
Sphinx of black quartz, judge my vow.
Five quacking zephyrs jolt my wax bed.
The jay, pig, fox, zebra and my wolves quack!";

/// A plain line buffer holding the text being navigated.
///
/// This is the in-process stand-in for a full editor component: it owns
/// the practice text and a cursor, and exposes both through the 1-based
/// [`EditorBackend`] contract. It does no editing; vimdrill only needs
/// something to move around in.
///
/// # Example
///
/// ```
/// use vimdrill::editor::buffer::TextBuffer;
///
/// let buffer = TextBuffer::from_text("one\ntwo\nthree");
/// assert_eq!(buffer.lines().len(), 3);
/// assert_eq!(buffer.lines()[1], "two");
/// ```
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    /// 1-based cursor line.
    cursor_line: i32,
    /// 1-based cursor column.
    cursor_column: i32,
}

impl TextBuffer {
    /// Creates a buffer from raw text, split on line breaks.
    ///
    /// Empty input produces a buffer with zero lines, which the movement
    /// service treats as the degenerate single-cell bound.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            Vec::new()
        } else {
            text.lines().map(str::to_string).collect()
        };
        Self {
            lines,
            cursor_line: 1,
            cursor_column: 1,
        }
    }

    /// Creates a buffer holding the default practice text.
    pub fn with_practice_text() -> Self {
        Self::from_text(DEFAULT_PRACTICE_TEXT)
    }

    /// Returns the buffer's lines for rendering.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::with_practice_text()
    }
}

impl EditorBackend for TextBuffer {
    fn cursor_position(&self) -> (i32, i32) {
        (self.cursor_line, self.cursor_column)
    }

    fn set_cursor_position(&mut self, line: i32, column: i32) {
        self.cursor_line = line;
        self.cursor_column = column;
    }

    fn line_count(&self) -> i32 {
        self.lines.len() as i32
    }

    fn max_column(&self, line: i32) -> i32 {
        self.lines
            .get((line - 1).max(0) as usize)
            .map_or(0, |l| l.chars().count() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_at_origin() {
        let buffer = TextBuffer::from_text("abc");
        assert_eq!(buffer.cursor_position(), (1, 1));
    }

    #[test]
    fn test_line_count_and_columns() {
        let buffer = TextBuffer::from_text("abc\nde");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.max_column(1), 3);
        assert_eq!(buffer.max_column(2), 2);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        let buffer = TextBuffer::from_text("");
        assert_eq!(buffer.line_count(), 0);
        assert_eq!(buffer.max_column(1), 0);
    }
}
