//! Errors reported to callers.
//!
//! Only caller mistakes show up here. A broken tree invariant is a bug in this crate and panics
//! instead.

use thiserror::Error;

/// A bad index or range passed to a [`RangeTree`][crate::range::RangeTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RangeError {
    /// The index is not below the number of elements.
    #[error("index {index} is out of bounds for {len} elements")]
    IndexOutOfBounds {
        /// The index that was asked for.
        index: usize,
        /// The number of elements in the tree.
        len: usize,
    },
    /// The lower end of a range is above its upper end.
    #[error("range {lo}..={hi} is inverted")]
    InvertedRange {
        /// The lower end that was asked for.
        lo: usize,
        /// The upper end that was asked for.
        hi: usize,
    },
}

/// A [`Tree::concat`][crate::avl::Tree::concat] whose two trees overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConcatError {
    /// Some value of the appended tree doesn't come after every value of the receiving tree.
    #[error("appended values must all come after the values already in the tree")]
    Overlap,
}
