use thiserror::Error;

/// Errors produced by type construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("inverted span: start {start} is past end {end}")]
    InvertedSpan { start: usize, end: usize },
}
