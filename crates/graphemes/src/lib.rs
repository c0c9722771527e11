//! Grapheme cluster segmentation subjects.
//!
//! The segmentation rules come from `unicode-segmentation`. This crate wraps
//! them behind [`Segmenter`] so that a caller can measure different
//! strategies through the same three operations.

mod graphemer;
mod iter;
mod uncached;

pub use graphemer::{CacheStats, Graphemer, GraphemerOptions};
pub use iter::GraphemeIter;
pub use uncached::Uncached;

/// Splits text into extended grapheme clusters.
///
/// Implementations may keep state between calls (caches), but the result for
/// a given text must always be the same.
pub trait Segmenter {
    type Iter<'a>: Iterator<Item = &'a str>;

    fn split_graphemes<'a>(&mut self, text: &'a str) -> Vec<&'a str>;

    /// Must equal `split_graphemes(text).len()`
    fn count_graphemes(&mut self, text: &str) -> usize;

    /// Lazily iterate clusters. Every call returns a new independent
    /// iterator.
    fn iterate_graphemes<'a>(&mut self, text: &'a str) -> Self::Iter<'a>;

    /// Human readable list of optimizations this segmenter applies
    fn optimizations(&self) -> &[&'static str] {
        &[]
    }
}
