//! This crate exposes two ordered containers: a self-balancing Binary Search Tree used as an
//! ordered set, and a fixed-size range-sum tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. The [`avl::Tree`] keeps its height at `O(lg N)` by rotating nodes
//! whenever two sibling subtrees differ in height by more than one. On top of insert, find and
//! delete it supports splitting around a pivot, joining, and set union, intersection and
//! difference.
//!
//! ## Range tree
//!
//! The [`range::RangeTree`] stores a fixed number of summable elements and answers "what is the
//! sum of elements `i..=j`" and "set element `i`" in `O(lg N)`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod compare;
pub mod error;
pub mod range;

pub use error::{ConcatError, RangeError};
