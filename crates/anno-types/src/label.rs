//! Label identity and span types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Unique identifier of a label within one store.
///
/// Ids are positive in practice. `LabelId(0)` is the value the store reports
/// as its last id while it holds no labels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(u64);

impl LabelId {
    /// The "no label" id.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` past `u64::MAX`.
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Debug for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabelId({})", self.0)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LabelId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Opaque category tag attached to a label.
///
/// The store never interprets categories; hosts map them to whatever
/// classification they render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(i64);

impl Category {
    /// Wrap a raw category value.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Category {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Global character offsets covered by a label.
///
/// Both ends are offsets into the concatenation of all lines. `start <= end`
/// always holds; whether the offsets fall inside the text is checked by the
/// store, which is the only party that knows the line table.
///
/// Serialized as a two-element `[start, end]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span, rejecting `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, TypeError> {
        if start > end {
            return Err(TypeError::InvertedSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Offset of the first character.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Offset of the last character.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of characters between the two offsets.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` when the span starts and ends on the same offset.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl TryFrom<(usize, usize)> for Span {
    type Error = TypeError;

    fn try_from((start, end): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// A categorized span.
///
/// `Label` is a plain value: the store hands out clones, so a caller can
/// change its copy freely without touching the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub category: Category,
    pub pos: Span,
}

impl Label {
    /// Create a label.
    pub fn new(id: LabelId, category: Category, pos: Span) -> Self {
        Self { id, category, pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_rejects_inverted_offsets() {
        let err = Span::new(9, 3).unwrap_err();
        assert_eq!(err, TypeError::InvertedSpan { start: 9, end: 3 });
    }

    #[test]
    fn span_allows_single_offset() {
        let span = Span::new(4, 4).unwrap();
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn span_serializes_as_pair() {
        let span = Span::new(57, 81).unwrap();
        assert_eq!(serde_json::to_string(&span).unwrap(), "[57,81]");
    }

    #[test]
    fn span_deserialization_checks_order() {
        let result: Result<Span, _> = serde_json::from_str("[81,57]");
        assert!(result.is_err());
    }

    #[test]
    fn label_json_matches_host_shape() {
        let label: Label =
            serde_json::from_str(r#"{"id":2,"category":4,"pos":[57,81]}"#).unwrap();
        assert_eq!(label.id, LabelId::new(2));
        assert_eq!(label.category, Category::new(4));
        assert_eq!(label.pos.end(), 81);
    }

    #[test]
    fn label_id_next_increments() {
        assert_eq!(LabelId::ZERO.checked_next(), Some(LabelId::new(1)));
        assert_eq!(LabelId::new(41).checked_next().map(LabelId::get), Some(42));
    }

    #[test]
    fn label_id_next_stops_at_max() {
        assert_eq!(LabelId::new(u64::MAX).checked_next(), None);
    }
}
