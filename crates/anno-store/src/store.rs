//! The [`LabelStore`] facade.
//!
//! The store owns the line table and the labels, and routes every query and
//! mutation through its three indexes. All reads hand out clones.
//!
//! # Invariants
//!
//! - Every label in the [`LabelIndex`] is listed in the
//!   [`LineMembershipIndex`] exactly on its start line and, when different,
//!   its end line, and nowhere else.
//! - Every id listed in the membership index is registered in the label
//!   index.
//! - A failed mutation leaves both indexes as they were.

use tracing::debug;

use anno_lines::LineOffsetIndex;
use anno_types::{Category, Label, LabelId, LabelLineRange, LinePosition, Span};

use crate::config::{IdAllocation, StoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::label_index::LabelIndex;
use crate::membership::{resolve_range, LineMembershipIndex};

/// A position-indexed set of labels over a fixed line table.
#[derive(Clone, Debug)]
pub struct LabelStore {
    config: StoreConfig,
    lines: LineOffsetIndex,
    labels: LabelIndex,
    membership: LineMembershipIndex,
    /// Highest id ever registered; only consulted under
    /// [`IdAllocation::Monotonic`].
    high_water: LabelId,
}

impl LabelStore {
    /// Build a store with the default configuration.
    ///
    /// See [`with_config`](Self::with_config).
    pub fn new(
        line_lengths: Vec<usize>,
        labels: impl IntoIterator<Item = Label>,
    ) -> StoreResult<Self> {
        Self::with_config(StoreConfig::default(), line_lengths, labels)
    }

    /// Build a store from per-line character counts and an initial label set.
    ///
    /// Labels are registered in the order given. An overflowing line table,
    /// or the first duplicate id or out-of-range span, aborts construction
    /// and no store is returned.
    pub fn with_config(
        config: StoreConfig,
        line_lengths: Vec<usize>,
        labels: impl IntoIterator<Item = Label>,
    ) -> StoreResult<Self> {
        let lines = LineOffsetIndex::new(line_lengths)?;
        let mut store = Self {
            membership: LineMembershipIndex::new(lines.line_count()),
            config,
            lines,
            labels: LabelIndex::new(),
            high_water: LabelId::ZERO,
        };

        for label in labels {
            store.register(label)?;
        }

        debug!(
            lines = store.lines.line_count(),
            labels = store.labels.len(),
            last_id = %store.labels.last_id(),
            "label store built"
        );
        Ok(store)
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// The configuration the store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The line table.
    pub fn lines(&self) -> &LineOffsetIndex {
        &self.lines
    }

    /// Number of labels in the store.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the store holds no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` if a label with `id` is registered.
    pub fn contains(&self, id: LabelId) -> bool {
        self.labels.contains(id)
    }

    /// Highest id currently registered, or [`LabelId::ZERO`] when empty.
    pub fn last_id(&self) -> LabelId {
        self.labels.last_id()
    }

    /// The id the next [`add`](Self::add) will assign.
    ///
    /// Fails with [`StoreError::IdSpaceExhausted`] once the base id is
    /// `u64::MAX`.
    pub fn next_id(&self) -> StoreResult<LabelId> {
        let base = match self.config.id_allocation {
            IdAllocation::HighestLive => self.labels.last_id(),
            IdAllocation::Monotonic => self.labels.last_id().max(self.high_water),
        };
        base.checked_next().ok_or(StoreError::IdSpaceExhausted(base))
    }

    /// Number of lines in the line table.
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    /// Total number of characters over all lines.
    pub fn total_chars(&self) -> usize {
        self.lines.total_chars()
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    /// Copies of all labels, in insertion order.
    pub fn select(&self) -> Vec<Label> {
        self.labels.all()
    }

    /// A copy of the label registered under `id`.
    pub fn get_by_id(&self, id: LabelId) -> StoreResult<Label> {
        self.labels.get(id)
    }

    /// Copies of the labels that start or end on `line`.
    ///
    /// `line` is checked against the line table, so a line with no labels
    /// (including an empty trailing line) yields an empty list.
    pub fn select_by_line(&self, line: usize) -> StoreResult<Vec<Label>> {
        self.lines.check_line(line)?;
        self.membership
            .query(line)?
            .iter()
            .map(|&id| self.labels.get(id))
            .collect()
    }

    /// The `(line, column)` positions of both ends of a label's span.
    pub fn line_range_by_id(&self, id: LabelId) -> StoreResult<LabelLineRange> {
        let label = self.labels.peek(id)?;
        resolve_range(&self.lines, label)
    }

    /// Resolve an arbitrary global offset to a `(line, column)` position.
    pub fn locate(&self, offset: usize) -> StoreResult<LinePosition> {
        Ok(self.lines.locate(offset)?)
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Create a label with the next id and register it.
    ///
    /// Fails with [`StoreError::OutOfRangeOffset`] if either end of `pos`
    /// lies outside the text; the store is left unchanged.
    pub fn add(&mut self, category: Category, pos: Span) -> StoreResult<Label> {
        let label = Label::new(self.next_id()?, category, pos);
        self.register(label.clone())?;
        debug!(
            id = %label.id,
            category = %label.category,
            start = label.pos.start(),
            end = label.pos.end(),
            "label added"
        );
        Ok(label)
    }

    /// Remove a label from every index and return it.
    pub fn remove(&mut self, id: LabelId) -> StoreResult<Label> {
        let label = self.labels.remove(id)?;
        let listings = self.membership.remove(id);
        debug!(id = %id, listings, last_id = %self.labels.last_id(), "label removed");
        Ok(label)
    }

    /// Drop every label. The line table is kept and id allocation starts
    /// over.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.membership.clear();
        self.high_water = LabelId::ZERO;
        debug!("label store cleared");
    }

    /// Register a label in both label indexes, or in neither.
    fn register(&mut self, label: Label) -> StoreResult<()> {
        self.labels.check_vacant(label.id)?;
        self.membership.insert(&label, &self.lines)?;
        self.high_water = self.high_water.max(label.id);
        self.labels.insert(label)
    }

    // ---------------------------------------------------------------
    // Consistency
    // ---------------------------------------------------------------

    /// Verify that the label and membership indexes agree.
    ///
    /// Every registered label must be listed exactly on the lines its span
    /// resolves to, and every listed id must be registered.
    pub fn check_consistency(&self) -> StoreResult<()> {
        for label in self.labels.iter() {
            let range = resolve_range(&self.lines, label)?;
            let expected: Vec<usize> = range.touched_lines().collect();
            let listed = self.membership.lines_of(label.id);
            if listed != expected {
                return Err(StoreError::Inconsistent {
                    id: label.id,
                    reason: format!("listed on lines {listed:?}, expected {expected:?}"),
                });
            }
        }

        if let Some(id) = self
            .membership
            .listed_ids()
            .find(|&id| !self.labels.contains(id))
        {
            return Err(StoreError::Inconsistent {
                id,
                reason: "listed on a line but not registered".to_string(),
            });
        }

        Ok(())
    }
}
