//! Offset to line/column translation.
//!
//! Compiler diagnostics carry flat offsets counted in UTF-16 code units.
//! [`LineIndex`] scans a source text once and answers line/column queries
//! for any offset in it.
//!
//! Recognized line terminators: `\n`, `\r\n`, `\r`, U+2028 and U+2029.
//! An offset that points at a terminator belongs to the line it ends.
//!
//! The offsets must have been computed against the same text. Mismatched
//! text gives wrong positions but never panics, and offsets past the end
//! clamp to the end of the text.

use super::span::{Location, Position};

/// Line-start table for one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// UTF-16 offset of the first character of each line.
    line_starts: Vec<usize>,
    /// Length of the text in UTF-16 code units.
    len: usize,
}

impl LineIndex {
    /// Scan `text` and record where each line starts.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut offset = 0;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            offset += c.len_utf16();
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                        offset += 1;
                    }
                    line_starts.push(offset);
                }
                '\n' | '\u{2028}' | '\u{2029}' => line_starts.push(offset),
                _ => {}
            }
        }

        Self {
            line_starts,
            len: offset,
        }
    }

    /// Translate an offset into a 1-based line and 0-based column.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        // Index of the last line starting at or before `offset`.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position::new(line + 1, offset - self.line_starts[line])
    }

    /// Translate a `[start, end)` offset range.
    pub fn locate(&self, start: usize, end: usize) -> Location {
        Location::new(self.position(start), self.position(end))
    }
}

/// Translate a `[start, end)` offset range of `text` into a [`Location`].
///
/// Scans the whole text; use a [`LineIndex`] when translating many ranges
/// of the same text.
pub fn locate(text: &str, start: usize, end: usize) -> Location {
    LineIndex::new(text).locate(start, end)
}
