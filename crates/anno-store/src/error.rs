//! Error types for the label store crate.

use anno_lines::LineError;
use anno_types::{LabelId, TypeError};

/// Errors that can occur during label store operations.
///
/// A failed operation never leaves a partial update behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No label with this id is registered.
    #[error("label id {0} does not map to a registered label")]
    UnknownId(LabelId),

    /// A label with this id is already registered.
    #[error("label id {0} is duplicated")]
    DuplicateId(LabelId),

    /// The line number is outside the line table.
    #[error("line {line} is out of range (line count: {line_count})")]
    OutOfRangeLine { line: usize, line_count: usize },

    /// A character offset is at or past the total character count.
    #[error("offset {offset} is out of range (total characters: {total})")]
    OutOfRangeOffset { offset: usize, total: usize },

    /// A character offset does not lie on the line it was paired with.
    #[error("offset {offset} is not on line {line}")]
    OffsetNotOnLine { offset: usize, line: usize },

    /// The line table's total character count overflows `usize`.
    #[error("line table overflows at line {line}")]
    LineTableOverflow { line: usize },

    /// A column is past the end of its line.
    #[error("column {column} is out of range for line {line} (length: {line_len})")]
    OutOfRangeColumn {
        line: usize,
        column: usize,
        line_len: usize,
    },

    /// No id above the given one is left to allocate.
    #[error("label id space exhausted after {0}")]
    IdSpaceExhausted(LabelId),

    /// The label span is malformed.
    #[error("invalid span: {0}")]
    InvalidSpan(#[from] TypeError),

    /// The indexes disagree about a label.
    #[error("index inconsistency for label {id}: {reason}")]
    Inconsistent { id: LabelId, reason: String },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<LineError> for StoreError {
    fn from(err: LineError) -> Self {
        match err {
            LineError::OffsetOutOfRange { offset, total } => {
                Self::OutOfRangeOffset { offset, total }
            }
            LineError::LineOutOfRange { line, line_count } => {
                Self::OutOfRangeLine { line, line_count }
            }
            LineError::OffsetNotOnLine { offset, line } => Self::OffsetNotOnLine { offset, line },
            LineError::LengthOverflow { line } => Self::LineTableOverflow { line },
            LineError::ColumnOutOfRange {
                line,
                column,
                line_len,
            } => Self::OutOfRangeColumn {
                line,
                column,
                line_len,
            },
        }
    }
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
