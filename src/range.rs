//! A fixed-size range-sum tree (also known as a segment tree).
//!
//! The elements are the leaves of a complete binary tree whose width is the element count
//! rounded up to a power of two. Each inner node caches the sum of the leaves below it, so a
//! point update or a sum over any inclusive index range touches `O(lg N)` nodes. Leaves past the
//! last element don't exist and count as `T::default()`, which must be the identity of `+`.
//!
//! # Examples
//!
//! ```
//! use trees::range::RangeTree;
//!
//! let mut tree = RangeTree::new(vec![1, 2, 3, 4]);
//! assert_eq!(tree.sum(0, 3), Ok(10));
//!
//! tree.set(1, 10).unwrap();
//! assert_eq!(tree.sum(0, 3), Ok(18));
//! assert_eq!(tree.sum(1, 1), Ok(10));
//!
//! // Out of range indices are errors, not clamped.
//! assert!(tree.set(4, 0).is_err());
//! ```

use std::ops::Add;

use crate::error::RangeError;

/// A fixed-size sequence supporting point updates and inclusive range sums.
#[derive(Clone, Debug)]
pub struct RangeTree<T> {
    root: Option<Box<Node<T>>>,
    /// How many elements were given at construction.
    len: usize,
    /// The width of the complete tree, the smallest power of two `>= len`.
    pow_2: usize,
}

#[derive(Clone, Debug)]
struct Node<T> {
    aggregate: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T>
where
    T: Add<Output = T> + Clone + Default,
{
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            aggregate: value,
            left: None,
            right: None,
        })
    }

    fn parent(left: Box<Self>, right: Option<Box<Self>>) -> Box<Self> {
        let mut node = Box::new(Self {
            aggregate: T::default(),
            left: Some(left),
            right,
        });
        node.fix_aggregate();
        node
    }

    fn aggregate_of(link: &Option<Box<Self>>) -> T {
        link.as_ref().map_or_else(T::default, |n| n.aggregate.clone())
    }

    fn fix_aggregate(&mut self) {
        self.aggregate = Self::aggregate_of(&self.left) + Self::aggregate_of(&self.right);
    }

    /// Overwrites the leaf for `index` inside this node's range `[lo, hi]`.
    fn set(&mut self, index: usize, value: T, lo: usize, hi: usize) {
        if lo == hi {
            self.aggregate = value;
            return;
        }

        let mid = lo + (hi - lo) / 2;
        let child = if index <= mid {
            self.left.as_mut().map(|n| (n, lo, mid))
        } else {
            self.right.as_mut().map(|n| (n, mid + 1, hi))
        };
        let (child, lo, hi) = child.expect("Index below len => leaf on its path");
        child.set(index, value, lo, hi);

        self.fix_aggregate();
    }

    /// Sums the part of `[from, to]` that overlaps this node's range `[lo, hi]`.
    fn sum(node: Option<&Self>, from: usize, to: usize, lo: usize, hi: usize) -> T {
        let Some(node) = node else {
            return T::default();
        };
        if hi < from || to < lo {
            return T::default();
        }
        if from <= lo && hi <= to {
            return node.aggregate.clone();
        }

        let mid = lo + (hi - lo) / 2;
        Self::sum(node.left.as_deref(), from, to, lo, mid)
            + Self::sum(node.right.as_deref(), from, to, mid + 1, hi)
    }
}

impl<T> RangeTree<T>
where
    T: Add<Output = T> + Clone + Default,
{
    /// Builds a tree over `elements`. Nodes are paired up layer by layer from the leaves, so this
    /// takes `O(N)`.
    pub fn new(elements: Vec<T>) -> Self {
        let len = elements.len();
        let pow_2 = len.next_power_of_two();

        let mut layer: Vec<_> = elements.into_iter().map(Node::leaf).collect();
        while layer.len() > 1 {
            let mut nodes = layer.into_iter();
            let mut parents = Vec::with_capacity(nodes.len().div_ceil(2));
            while let Some(left) = nodes.next() {
                parents.push(Node::parent(left, nodes.next()));
            }
            layer = parents;
        }

        log::trace!("built range tree over {len} elements, {pow_2} wide");
        Self {
            root: layer.pop(),
            len,
            pow_2,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// [`RangeError::IndexOutOfBounds`] when `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), RangeError> {
        self.check_index(index)?;
        log::trace!("setting range tree element {index}");

        let root = self.root.as_mut().expect("Non-empty range tree => root");
        root.set(index, value, 0, self.pow_2 - 1);
        Ok(())
    }

    /// The sum of the elements at indices `lo..=hi`.
    ///
    /// # Errors
    ///
    /// [`RangeError::IndexOutOfBounds`] when `hi >= self.len()` and
    /// [`RangeError::InvertedRange`] when `lo > hi`.
    pub fn sum(&self, lo: usize, hi: usize) -> Result<T, RangeError> {
        if lo > hi {
            log::debug!("rejecting inverted range {lo}..={hi}");
            return Err(RangeError::InvertedRange { lo, hi });
        }
        self.check_index(hi)?;

        Ok(Node::sum(self.root.as_deref(), lo, hi, 0, self.pow_2 - 1))
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`RangeError::IndexOutOfBounds`] when `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<T, RangeError> {
        self.sum(index, index)
    }

    fn check_index(&self, index: usize) -> Result<(), RangeError> {
        if index < self.len {
            Ok(())
        } else {
            log::debug!("rejecting index {index} for {} elements", self.len);
            Err(RangeError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T> FromIterator<T> for RangeTree<T>
where
    T: Add<Output = T> + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::new(elements.into_iter().collect())
    }
}
