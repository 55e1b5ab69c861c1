//! The id → label index.
//!
//! [`LabelIndex`] holds the canonical copy of every label. It refuses
//! duplicate ids and tracks the highest id it currently holds, which the
//! store uses to allocate ids for new labels.

use std::collections::HashMap;

use anno_types::{Label, LabelId};

use crate::error::{StoreError, StoreResult};

/// Labels keyed by id, remembered in insertion order.
#[derive(Clone, Debug, Default)]
pub struct LabelIndex {
    /// Canonical labels, keyed by id.
    labels: HashMap<LabelId, Label>,
    /// Ids in insertion order, for stable listing.
    order: Vec<LabelId>,
    /// Highest id among `labels`, or zero when empty.
    last_id: LabelId,
}

impl LabelIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of labels in the index.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the index has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` if a label with `id` is registered.
    pub fn contains(&self, id: LabelId) -> bool {
        self.labels.contains_key(&id)
    }

    /// Highest id currently registered, or [`LabelId::ZERO`] when empty.
    pub fn last_id(&self) -> LabelId {
        self.last_id
    }

    /// Fail with [`StoreError::DuplicateId`] if `id` is already registered.
    pub fn check_vacant(&self, id: LabelId) -> StoreResult<()> {
        if self.contains(id) {
            return Err(StoreError::DuplicateId(id));
        }
        Ok(())
    }

    /// Register a label.
    pub fn insert(&mut self, label: Label) -> StoreResult<()> {
        self.check_vacant(label.id)?;
        self.last_id = self.last_id.max(label.id);
        self.order.push(label.id);
        self.labels.insert(label.id, label);
        Ok(())
    }

    /// A copy of the label registered under `id`.
    pub fn get(&self, id: LabelId) -> StoreResult<Label> {
        self.peek(id).cloned()
    }

    pub(crate) fn peek(&self, id: LabelId) -> StoreResult<&Label> {
        self.labels.get(&id).ok_or(StoreError::UnknownId(id))
    }

    /// Remove the label registered under `id` and return it.
    ///
    /// The last id is recomputed from the remaining labels, since the
    /// removed one may have been the highest.
    pub fn remove(&mut self, id: LabelId) -> StoreResult<Label> {
        let label = self.labels.remove(&id).ok_or(StoreError::UnknownId(id))?;
        self.order.retain(|&other| other != id);
        self.last_id = self.labels.keys().copied().max().unwrap_or(LabelId::ZERO);
        Ok(label)
    }

    /// Registered ids in insertion order.
    pub fn ids(&self) -> Vec<LabelId> {
        self.order.clone()
    }

    /// Copies of all labels in insertion order.
    pub fn all(&self) -> Vec<Label> {
        self.iter().cloned().collect()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Label> {
        self.order.iter().filter_map(|id| self.labels.get(id))
    }

    /// Drop every label and reset the last id.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.order.clear();
        self.last_id = LabelId::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anno_types::{Category, Span};

    fn label(id: u64, start: usize, end: usize) -> Label {
        Label::new(LabelId::new(id), Category::new(1), Span::new(start, end).unwrap())
    }

    #[test]
    fn insert_tracks_highest_id() {
        let mut index = LabelIndex::new();
        index.insert(label(3, 0, 1)).unwrap();
        index.insert(label(1, 2, 3)).unwrap();
        assert_eq!(index.last_id(), LabelId::new(3));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn duplicate_id_is_rejected_without_change() {
        let mut index = LabelIndex::new();
        index.insert(label(1, 0, 1)).unwrap();
        let err = index.insert(label(1, 5, 6)).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(LabelId::new(1)));
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(LabelId::new(1)).unwrap().pos.start(), 0);
    }

    #[test]
    fn remove_rescans_last_id() {
        let mut index = LabelIndex::new();
        index.insert(label(1, 0, 1)).unwrap();
        index.insert(label(7, 0, 1)).unwrap();
        index.insert(label(4, 0, 1)).unwrap();

        index.remove(LabelId::new(7)).unwrap();
        assert_eq!(index.last_id(), LabelId::new(4));

        index.remove(LabelId::new(1)).unwrap();
        index.remove(LabelId::new(4)).unwrap();
        assert_eq!(index.last_id(), LabelId::ZERO);
        assert!(index.is_empty());
    }

    #[test]
    fn remove_unknown_id_fails() {
        let mut index = LabelIndex::new();
        assert_eq!(
            index.remove(LabelId::new(9)).unwrap_err(),
            StoreError::UnknownId(LabelId::new(9))
        );
    }

    #[test]
    fn listing_keeps_insertion_order() {
        let mut index = LabelIndex::new();
        for id in [5, 2, 9] {
            index.insert(label(id, 0, 1)).unwrap();
        }
        index.remove(LabelId::new(2)).unwrap();
        assert_eq!(index.ids(), vec![LabelId::new(5), LabelId::new(9)]);
        let ids: Vec<u64> = index.all().iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn returned_labels_are_copies() {
        let mut index = LabelIndex::new();
        index.insert(label(1, 0, 1)).unwrap();
        let mut copy = index.get(LabelId::new(1)).unwrap();
        copy.pos = Span::new(10, 20).unwrap();
        assert_eq!(index.get(LabelId::new(1)).unwrap().pos, Span::new(0, 1).unwrap());
    }
}
