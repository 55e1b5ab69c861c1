//! Error types for the line index crate.

/// Errors that can occur while resolving offsets and positions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The global offset is at or past the total character count.
    #[error("offset {offset} is out of range (total characters: {total})")]
    OffsetOutOfRange { offset: usize, total: usize },

    /// The line number is not in the line table.
    #[error("line {line} is out of range (line count: {line_count})")]
    LineOutOfRange { line: usize, line_count: usize },

    /// The offset lies on a different line than the one given.
    #[error("offset {offset} is not on line {line}")]
    OffsetNotOnLine { offset: usize, line: usize },

    /// The running character count of the line table overflows `usize`.
    #[error("line table overflows at line {line}")]
    LengthOverflow { line: usize },

    /// The column is past the end of its line.
    #[error("column {column} is out of range for line {line} (length: {line_len})")]
    ColumnOutOfRange {
        line: usize,
        column: usize,
        line_len: usize,
    },
}

/// Convenience alias for line index results.
pub type LineResult<T> = Result<T, LineError>;
