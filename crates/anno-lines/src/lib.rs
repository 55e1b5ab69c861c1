//! Line offset index for the annotator label store.
//!
//! The host describes its text as a list of per-line character counts. This
//! crate turns that list into an accumulated-offset table and maps global
//! character offsets to 0-based lines and columns with a binary search.
//!
//! # Key Types
//!
//! - [`LineOffsetIndex`] — Accumulated-offset table with offset resolution
//! - [`LineError`] — Offset, line, and column range failures

pub mod error;
pub mod index;

pub use error::{LineError, LineResult};
pub use index::LineOffsetIndex;
