//! Errors reported by the checked codec operations.

use thiserror::Error;

/// An offset or position that doesn't exist in a text buffer (e.g. because it was computed against a stale snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OffsetError {
    #[error("offset {offset} is past the end of the text ({len} bytes)")]
    OffsetOutOfBounds { offset: usize, len: usize },
    #[error("line {line} doesn't exist (the text has {line_count} lines)")]
    LineOutOfBounds { line: u32, line_count: usize },
    #[error("column {column} is past the end of line {line} ({len} bytes)")]
    ColumnOutOfBounds { line: u32, column: u32, len: usize },
}
