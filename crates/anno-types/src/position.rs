//! Line-relative positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 0-based `(line, column)` position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LinePosition {
    pub line: usize,
    pub position: usize,
}

impl LinePosition {
    pub const fn new(line: usize, position: usize) -> Self {
        Self { line, position }
    }
}

impl fmt::Display for LinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.position)
    }
}

/// The resolved start and end of a label's span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelLineRange {
    pub start: LinePosition,
    pub end: LinePosition,
}

impl LabelLineRange {
    pub const fn new(start: LinePosition, end: LinePosition) -> Self {
        Self { start, end }
    }

    /// Returns `true` if both ends sit on the same line.
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// The distinct lines touched by the range: one entry, or two when the
    /// ends differ.
    pub fn touched_lines(&self) -> impl Iterator<Item = usize> {
        let second = (!self.is_single_line()).then_some(self.end.line);
        std::iter::once(self.start.line).chain(second)
    }
}

impl From<LabelLineRange> for (LinePosition, LinePosition) {
    fn from(range: LabelLineRange) -> Self {
        (range.start, range.end)
    }
}

impl fmt::Display for LabelLineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_range_touches_one_line() {
        let range = LabelLineRange::new(LinePosition::new(0, 1), LinePosition::new(0, 5));
        assert!(range.is_single_line());
        assert_eq!(range.touched_lines().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn multi_line_range_touches_both_ends_only() {
        let range = LabelLineRange::new(LinePosition::new(1, 0), LinePosition::new(3, 2));
        assert_eq!(range.touched_lines().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn display_uses_line_colon_column() {
        let range = LabelLineRange::new(LinePosition::new(0, 57), LinePosition::new(1, 23));
        assert_eq!(range.to_string(), "0:57-1:23");
    }
}
