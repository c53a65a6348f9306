//! In-memory text with a cursor, addressed by byte offsets.
//!
//! Lines are never materialized: every query derives the line from a
//! position on demand, so the answers always reflect the current text.
use crate::*;
use std::ops::Range;

/// Width of the leading run of spaces and tabs in `line`.
pub fn indentation_width(line: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    line.bytes()
        .take_while(|&b| matches!(b, b' ' | b'\t'))
        .fold(0, |column, b| match b {
            b'\t' => (column / tab_width + 1) * tab_width,
            _ => column + 1,
        })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    cursor: Cursor,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: Cursor::default(),
        }
    }

    pub fn with_cursor(mut self, offset: usize) -> Self {
        self.set_cursor(offset);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor, clamped to the text and snapped back to a character
    /// boundary.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = Cursor::new(self.floor_boundary(offset));
    }

    fn floor_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    /// Start of the line containing `position`.
    pub fn line_start(&self, position: usize) -> usize {
        let position = self.floor_boundary(position);
        self.text[..position].rfind('\n').map_or(0, |i| i + 1)
    }

    /// End of the line containing `position`, excluding the newline.
    pub fn line_end(&self, position: usize) -> usize {
        let position = self.floor_boundary(position);
        self.text[position..]
            .find('\n')
            .map_or(self.text.len(), |i| position + i)
    }

    /// Text of the line containing `position`, without its newline.
    pub fn line_text(&self, position: usize) -> &str {
        &self.text[self.line_start(position)..self.line_end(position)]
    }

    pub fn next_line_start(&self, position: usize) -> Option<usize> {
        let end = self.line_end(position);
        (end < self.text.len()).then_some(end + 1)
    }

    pub fn previous_line_start(&self, position: usize) -> Option<usize> {
        match self.line_start(position) {
            0 => None,
            start => Some(self.line_start(start - 1)),
        }
    }

    /// 1-based number of the line containing `position`.
    pub fn line_number(&self, position: usize) -> usize {
        let position = self.floor_boundary(position);
        self.text[..position].bytes().filter(|&b| b == b'\n').count() + 1
    }

    pub fn line_count(&self) -> usize {
        self.text.bytes().filter(|&b| b == b'\n').count() + 1
    }

    /// Start of the 1-based line `line`, if the document has that many lines.
    pub fn line_start_of(&self, line: usize) -> Option<usize> {
        match line {
            0 => None,
            1 => Some(0),
            _ => self
                .text
                .match_indices('\n')
                .nth(line - 2)
                .map(|(i, _)| i + 1),
        }
    }

    /// Position of the first character after the leading spaces and tabs.
    pub fn indentation_end(&self, position: usize) -> usize {
        let start = self.line_start(position);
        let line = self.line_text(start);
        start + line.len() - line.trim_start_matches([' ', '\t']).len()
    }

    /// Column width of the line's current indentation.
    pub fn indentation(&self, position: usize, tab_width: usize) -> usize {
        indentation_width(self.line_text(position), tab_width)
    }

    /// True when the line holds nothing but whitespace.
    pub fn is_blank_line(&self, position: usize) -> bool {
        self.line_text(position).trim().is_empty()
    }

    /// Replace `range` with `replacement`.
    ///
    /// The cursor behaves like a marker: after the range it shifts with the
    /// edit, inside the range it collapses to the range start.
    pub fn replace(&mut self, range: Range<usize>, replacement: &str) {
        let cursor = self.cursor.offset();
        let removed = range.len();
        let start = range.start;
        self.text.replace_range(range, replacement);
        let cursor = if cursor >= start + removed {
            cursor - removed + replacement.len()
        } else if cursor > start {
            start
        } else {
            cursor
        };
        self.cursor = Cursor::new(cursor);
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
