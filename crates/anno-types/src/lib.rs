//! Foundation types for the annotator label store.
//!
//! A *label* is a tagged span over a flat character stream that the host
//! splits into lines. This crate holds the value types shared by the line
//! index and the label store; it has no behavior of its own beyond
//! construction checks.
//!
//! # Key Types
//!
//! - [`LabelId`] — Unique label identifier
//! - [`Category`] — Opaque category tag
//! - [`Span`] — Global `[start, end]` character offsets of a label
//! - [`Label`] — A categorized span with an id
//! - [`LinePosition`] / [`LabelLineRange`] — Resolved `(line, column)` positions

pub mod error;
pub mod label;
pub mod position;

pub use error::TypeError;
pub use label::{Category, Label, LabelId, Span};
pub use position::{LabelLineRange, LinePosition};
