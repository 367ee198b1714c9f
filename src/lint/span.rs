//! Source location spans.
//!
//! This module provides the line/column types findings are reported with.
//! Lines are 1-indexed; columns are 0-indexed and counted in UTF-16 code
//! units, the convention editors and the compiler share.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A line/column position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line (1-indexed).
    pub line: usize,
    /// Column (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A start/end range of positions in one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    /// Create a location.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A location inside a named file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path.
    pub file: PathBuf,
    /// Range in the file.
    pub location: Location,
}

impl Span {
    /// Create a span.
    pub fn new(file: impl Into<PathBuf>, location: Location) -> Self {
        Self {
            file: file.into(),
            location,
        }
    }

    /// Create a zero-width span at the start of a line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        let position = Position::new(line, 0);
        Self::new(file, Location::new(position, position))
    }

    /// Starting line (1-indexed).
    pub fn start_line(&self) -> usize {
        self.location.start.line
    }

    /// Starting column (0-indexed).
    pub fn start_column(&self) -> usize {
        self.location.start.column
    }
}
