//! Label store for the annotator.
//!
//! A [`LabelStore`] owns a fixed line table and a mutable set of labels, and
//! keeps three derived views of them in step:
//!
//! - the [`LineOffsetIndex`] from `anno-lines`, mapping global offsets to lines,
//! - the [`LabelIndex`], mapping ids to labels and tracking the last id,
//! - the [`LineMembershipIndex`], mapping each line to the labels that start
//!   or end on it.
//!
//! Every query returns owned copies, and every mutation either updates all
//! three views or none of them.
//!
//! # Modules
//!
//! - [`config`] — [`StoreConfig`] and the [`IdAllocation`] policy
//! - [`error`] — [`StoreError`] and [`StoreResult`]
//! - [`label_index`] — [`LabelIndex`]
//! - [`membership`] — [`LineMembershipIndex`]
//! - [`store`] — the [`LabelStore`] facade

pub mod config;
pub mod error;
pub mod label_index;
pub mod membership;
pub mod store;

pub use anno_lines::LineOffsetIndex;
pub use anno_types::{Category, Label, LabelId, LabelLineRange, LinePosition, Span};
pub use config::{IdAllocation, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use label_index::LabelIndex;
pub use membership::LineMembershipIndex;
pub use store::LabelStore;
