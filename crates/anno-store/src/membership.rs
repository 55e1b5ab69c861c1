//! The line → labels index.
//!
//! A label is listed under the line its span starts on and, when different,
//! the line it ends on. Lines in between are not listed. Within a line,
//! labels appear in the order they were inserted.

use anno_lines::LineOffsetIndex;
use anno_types::{Label, LabelId, LabelLineRange};

use crate::error::{StoreError, StoreResult};

/// Per-line lists of label ids, one list per line of the line table.
#[derive(Clone, Debug, Default)]
pub struct LineMembershipIndex {
    lines: Vec<Vec<LabelId>>,
}

/// Resolve both ends of a label's span to line positions.
pub fn resolve_range(lines: &LineOffsetIndex, label: &Label) -> StoreResult<LabelLineRange> {
    let start = lines.locate(label.pos.start())?;
    let end = lines.locate(label.pos.end())?;
    Ok(LabelLineRange::new(start, end))
}

impl LineMembershipIndex {
    /// Create an index with an empty list for each of `line_count` lines.
    pub fn new(line_count: usize) -> Self {
        Self {
            lines: vec![Vec::new(); line_count],
        }
    }

    /// Number of lines tracked.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// List a label under its start and end lines.
    ///
    /// The span is resolved before anything is recorded, so an out-of-range
    /// offset leaves the index untouched. Returns the resolved range.
    pub fn insert(
        &mut self,
        label: &Label,
        lines: &LineOffsetIndex,
    ) -> StoreResult<LabelLineRange> {
        let range = resolve_range(lines, label)?;
        if range.end.line >= self.lines.len() {
            return Err(StoreError::OutOfRangeLine {
                line: range.end.line,
                line_count: self.lines.len(),
            });
        }
        for line in range.touched_lines() {
            self.lines[line].push(label.id);
        }
        Ok(range)
    }

    /// Remove every listing of `id`. Returns how many were removed.
    pub fn remove(&mut self, id: LabelId) -> usize {
        let mut removed = 0;
        for entries in &mut self.lines {
            let before = entries.len();
            entries.retain(|&other| other != id);
            removed += before - entries.len();
        }
        removed
    }

    /// Ids of the labels that start or end on `line`.
    pub fn query(&self, line: usize) -> StoreResult<&[LabelId]> {
        self.lines
            .get(line)
            .map(Vec::as_slice)
            .ok_or(StoreError::OutOfRangeLine {
                line,
                line_count: self.lines.len(),
            })
    }

    /// Lines on which `id` is listed, in line order. A line is repeated if
    /// the id is listed on it more than once.
    pub fn lines_of(&self, id: LabelId) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(line, entries)| {
                entries.iter().filter(move |&&other| other == id).map(move |_| line)
            })
            .collect()
    }

    /// Every listed id, once per listing.
    pub(crate) fn listed_ids(&self) -> impl Iterator<Item = LabelId> + '_ {
        self.lines.iter().flatten().copied()
    }

    /// Empty every line's list, keeping the line count.
    pub fn clear(&mut self) {
        for entries in &mut self.lines {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anno_types::{Category, Span};

    fn lines() -> LineOffsetIndex {
        LineOffsetIndex::new(vec![58, 69, 78, 67]).unwrap()
    }

    fn label(id: u64, start: usize, end: usize) -> Label {
        Label::new(LabelId::new(id), Category::new(1), Span::new(start, end).unwrap())
    }

    #[test]
    fn single_line_label_is_listed_once() {
        let mut index = LineMembershipIndex::new(4);
        index.insert(&label(1, 1, 5), &lines()).unwrap();
        assert_eq!(index.query(0).unwrap(), &[LabelId::new(1)]);
        assert_eq!(index.lines_of(LabelId::new(1)), vec![0]);
    }

    #[test]
    fn multi_line_label_is_listed_on_both_ends_only() {
        let mut index = LineMembershipIndex::new(4);
        index.insert(&label(3, 10, 210), &lines()).unwrap();
        assert_eq!(index.lines_of(LabelId::new(3)), vec![0, 3]);
        assert!(index.query(1).unwrap().is_empty());
        assert!(index.query(2).unwrap().is_empty());
    }

    #[test]
    fn insertion_order_is_kept_per_line() {
        let mut index = LineMembershipIndex::new(4);
        index.insert(&label(2, 30, 40), &lines()).unwrap();
        index.insert(&label(1, 1, 5), &lines()).unwrap();
        assert_eq!(index.query(0).unwrap(), &[LabelId::new(2), LabelId::new(1)]);
    }

    #[test]
    fn out_of_range_span_records_nothing() {
        let mut index = LineMembershipIndex::new(4);
        let err = index.insert(&label(1, 10, 272), &lines()).unwrap_err();
        assert_eq!(
            err,
            StoreError::OutOfRangeOffset {
                offset: 272,
                total: 272
            }
        );
        assert!(index.lines_of(LabelId::new(1)).is_empty());
    }

    #[test]
    fn remove_clears_both_listings() {
        let mut index = LineMembershipIndex::new(4);
        index.insert(&label(2, 57, 81), &lines()).unwrap();
        index.insert(&label(1, 1, 5), &lines()).unwrap();
        assert_eq!(index.remove(LabelId::new(2)), 2);
        assert_eq!(index.query(0).unwrap(), &[LabelId::new(1)]);
        assert!(index.query(1).unwrap().is_empty());
        assert_eq!(index.remove(LabelId::new(2)), 0);
    }

    #[test]
    fn query_past_last_line_fails() {
        let index = LineMembershipIndex::new(4);
        assert_eq!(
            index.query(4).unwrap_err(),
            StoreError::OutOfRangeLine {
                line: 4,
                line_count: 4
            }
        );
    }
}
