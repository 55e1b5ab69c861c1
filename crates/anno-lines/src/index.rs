//! The accumulated-offset table and its binary search.
//!
//! [`LineOffsetIndex`] keeps, for every line `i`, the exclusive upper bound
//! of all characters on lines `0..=i`. Resolving a global offset is a search
//! for the first bound strictly greater than the offset.
//!
//! # Invariants
//!
//! - `accumulated.len() == line_lengths.len()`.
//! - `accumulated` is non-decreasing (empty lines repeat the previous bound).
//! - An offset equal to a line's bound belongs to the following line.

use tracing::debug;

use anno_types::LinePosition;

use crate::error::{LineError, LineResult};

/// Per-line character counts together with their running sums.
///
/// The table is fixed for the lifetime of the index. Hosts whose text
/// changes build a new index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineOffsetIndex {
    line_lengths: Vec<usize>,
    accumulated: Vec<usize>,
}

impl LineOffsetIndex {
    /// Build the index from per-line character counts in one pass.
    ///
    /// Fails with [`LineError::LengthOverflow`] if the total character
    /// count does not fit in `usize`.
    pub fn new(line_lengths: Vec<usize>) -> LineResult<Self> {
        let mut accumulated = Vec::with_capacity(line_lengths.len());
        let mut sum = 0usize;
        for (line, &len) in line_lengths.iter().enumerate() {
            sum = sum
                .checked_add(len)
                .ok_or(LineError::LengthOverflow { line })?;
            accumulated.push(sum);
        }

        debug!(lines = line_lengths.len(), total = sum, "built line offset index");

        Ok(Self {
            line_lengths,
            accumulated,
        })
    }

    /// Number of lines in the table.
    pub fn line_count(&self) -> usize {
        self.line_lengths.len()
    }

    /// Returns `true` if the table has no lines.
    pub fn is_empty(&self) -> bool {
        self.line_lengths.is_empty()
    }

    /// Total number of characters over all lines.
    pub fn total_chars(&self) -> usize {
        self.accumulated.last().copied().unwrap_or(0)
    }

    /// The per-line character counts the index was built from.
    pub fn line_lengths(&self) -> &[usize] {
        &self.line_lengths
    }

    /// The running sums; entry `i` is the exclusive bound of line `i`.
    pub fn accumulated(&self) -> &[usize] {
        &self.accumulated
    }

    /// Fail with [`LineError::LineOutOfRange`] unless `line` is in the table.
    pub fn check_line(&self, line: usize) -> LineResult<()> {
        if line < self.line_count() {
            Ok(())
        } else {
            Err(LineError::LineOutOfRange {
                line,
                line_count: self.line_count(),
            })
        }
    }

    /// Character count of `line`.
    pub fn line_len(&self, line: usize) -> LineResult<usize> {
        self.check_line(line)?;
        Ok(self.line_lengths[line])
    }

    /// Global offset of the first character of `line`.
    pub fn line_start(&self, line: usize) -> LineResult<usize> {
        self.check_line(line)?;
        Ok(self.bound_before(line))
    }

    /// Resolve a global offset to its 0-based line.
    ///
    /// Finds the smallest line `i` with `offset < accumulated[i]`. The
    /// search narrows `[start, end]` and only compares against the bound
    /// at the midpoint, so a boundary offset moves on to the next line.
    /// Fails with [`LineError::OffsetOutOfRange`] when `offset` is at or
    /// past [`total_chars`](Self::total_chars).
    pub fn resolve(&self, offset: usize) -> LineResult<usize> {
        let out_of_range = || LineError::OffsetOutOfRange {
            offset,
            total: self.total_chars(),
        };

        let Some(last) = self.accumulated.len().checked_sub(1) else {
            return Err(out_of_range());
        };

        let (mut start, mut end) = (0, last);
        while start < end {
            let middle = (start + end) / 2;
            if self.accumulated[middle] > offset {
                end = middle;
            } else {
                start = middle + 1;
            }
        }

        if offset < self.accumulated[start] {
            Ok(start)
        } else {
            Err(out_of_range())
        }
    }

    /// Column of `offset` within `line`: `offset` minus the bound of the
    /// previous line.
    ///
    /// Fails with [`LineError::LineOutOfRange`] for a line outside the table
    /// and with [`LineError::OffsetNotOnLine`] when `offset` does not
    /// resolve to `line`.
    pub fn position_within_line(&self, offset: usize, line: usize) -> LineResult<usize> {
        self.check_line(line)?;
        let start = self.bound_before(line);
        if offset < start || offset >= self.accumulated[line] {
            return Err(LineError::OffsetNotOnLine { offset, line });
        }
        Ok(offset - start)
    }

    /// Resolve a global offset to a `(line, column)` position.
    pub fn locate(&self, offset: usize) -> LineResult<LinePosition> {
        let line = self.resolve(offset)?;
        Ok(LinePosition::new(line, offset - self.bound_before(line)))
    }

    /// Map a `(line, column)` position back to its global offset.
    pub fn offset_of(&self, pos: LinePosition) -> LineResult<usize> {
        let line_len = self.line_len(pos.line)?;
        if pos.position >= line_len {
            return Err(LineError::ColumnOutOfRange {
                line: pos.line,
                column: pos.position,
                line_len,
            });
        }
        Ok(self.bound_before(pos.line) + pos.position)
    }

    fn bound_before(&self, line: usize) -> usize {
        match line {
            0 => 0,
            _ => self.accumulated[line - 1],
        }
    }
}

impl TryFrom<Vec<usize>> for LineOffsetIndex {
    type Error = LineError;

    fn try_from(line_lengths: Vec<usize>) -> LineResult<Self> {
        Self::new(line_lengths)
    }
}
