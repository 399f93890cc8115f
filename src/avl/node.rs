//! The nodes of an AVL tree and the engine that mutates them.
//!
//! Every structural operation takes an owned `Box<Node>` and hands back the root of the
//! rebuilt subtree for the caller to store in its child slot. Nodes never know their parent, so
//! there are no back-pointers to repair after a rotation.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::compare::Compare;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// The height of a subtree. Empty subtrees have a height of 0.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// The number of values in a subtree.
pub(crate) fn size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}

/// Inserts `value` into the subtree. Returns the new root of the subtree and whether the value
/// was added. A value comparing equal to an existing one leaves the subtree as it was.
pub(crate) fn insert<T, C>(link: Link<T>, value: T, cmp: &C) -> (Box<Node<T>>, bool)
where
    C: Compare<T>,
{
    let Some(mut node) = link else {
        return (Node::leaf(value), true);
    };

    let inserted = match cmp.compare(&value, &node.value) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), value, cmp);
            node.left = Some(left);
            inserted
        }
        Ordering::Equal => return (node, false),
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), value, cmp);
            node.right = Some(right);
            inserted
        }
    };

    (node.recover_balance(), inserted)
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,

    /// How many values are in the subtree rooted at this node, including its own.
    pub(crate) size: usize,
}

/// Deep copy. The copy shares nothing with the original.
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone(), self.left.clone(), self.right.clone())
    }
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given children, computing its height and size from them.
    pub(crate) fn new(value: T, left: Link<T>, right: Link<T>) -> Self {
        let mut node = Self {
            value,
            left,
            right,
            height: 1,
            size: 1,
        };
        node.fix_height_and_size();
        node
    }

    pub(crate) fn leaf(value: T) -> Box<Self> {
        Box::new(Self::new(value, None, None))
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Recomputes the cached height and size from the children. Children must already be
    /// correct.
    pub(crate) fn fix_height_and_size(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
        self.size = size(&self.left) + size(&self.right) + 1;
    }

    /// The height of the left subtree minus the height of the right subtree. Positive values mean
    /// the node is left-heavy.
    pub(crate) fn height_diff(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    pub(crate) fn find<C>(&self, value: &T, cmp: &C) -> Option<&T>
    where
        C: Compare<T>,
    {
        match cmp.compare(value, &self.value) {
            Ordering::Less => self.left().and_then(|n| n.find(value, cmp)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right().and_then(|n| n.find(value, cmp)),
        }
    }

    pub(crate) fn smallest(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.value
    }

    pub(crate) fn largest(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.value
    }

    /// Deletes the value comparing equal to `value` from this subtree. Returns the new root of
    /// the subtree and the removed value, if there was one.
    pub(crate) fn delete<C>(mut self: Box<Self>, value: &T, cmp: &C) -> (Link<T>, Option<T>)
    where
        C: Compare<T>,
    {
        match cmp.compare(value, &self.value) {
            Ordering::Less => {
                let Some(left) = self.left.take() else {
                    return (Some(self), None);
                };
                let (left, removed) = left.delete(value, cmp);
                self.left = left;
                if removed.is_none() {
                    return (Some(self), None);
                }
                (Some(self.recover_balance()), removed)
            }
            Ordering::Equal => match self.left.take() {
                None => {
                    let node = *self;
                    (node.right, Some(node.value))
                }
                // Promote the predecessor, the largest value in the left subtree. It is larger
                // than everything left in that subtree and smaller than everything on the right.
                Some(left) => {
                    let (left, predecessor) = left.remove_largest();
                    let removed = mem::replace(&mut self.value, predecessor);
                    self.left = left;
                    (Some(self.recover_balance()), Some(removed))
                }
            },
            Ordering::Greater => {
                let Some(right) = self.right.take() else {
                    return (Some(self), None);
                };
                let (right, removed) = right.delete(value, cmp);
                self.right = right;
                if removed.is_none() {
                    return (Some(self), None);
                }
                (Some(self.recover_balance()), removed)
            }
        }
    }

    /// Detaches the largest value in this subtree by recursing to the right until there is no
    /// right child. Returns the rebalanced remainder and the value.
    pub(crate) fn remove_largest(mut self: Box<Self>) -> (Link<T>, T) {
        match self.right.take() {
            None => {
                let node = *self;
                (node.left, node.value)
            }
            Some(right) => {
                let (right, largest) = right.remove_largest();
                self.right = right;
                (Some(self.recover_balance()), largest)
            }
        }
    }

    /// Mirror image of [`Node::remove_largest`].
    pub(crate) fn remove_smallest(mut self: Box<Self>) -> (Link<T>, T) {
        match self.left.take() {
            None => {
                let node = *self;
                (node.right, node.value)
            }
            Some(left) => {
                let (left, smallest) = left.remove_smallest();
                self.left = left;
                (Some(self.recover_balance()), smallest)
            }
        }
    }

    /// Balances a node whose children are balanced but may differ in height by two.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
    ///
    /// ## Panics
    ///
    /// When the children differ in height by more than two. No sequence of operations on a tree
    /// can get there, so this is a bug in the engine.
    pub(crate) fn recover_balance(mut self: Box<Self>) -> Box<Self> {
        let node = match self.height_diff() {
            -1..=1 => {
                self.fix_height_and_size();
                self
            }
            2 => {
                let left = self.left.take().expect("Left-heavy node => left child");
                self.left = Some(if left.height_diff() < 0 {
                    left.rotate_left()
                } else {
                    left
                });
                self.rotate_right()
            }
            -2 => {
                let right = self.right.take().expect("Right-heavy node => right child");
                self.right = Some(if right.height_diff() > 0 {
                    right.rotate_right()
                } else {
                    right
                });
                self.rotate_left()
            }
            diff => panic!("AVL invariant broken: children differ in height by {diff}"),
        };

        if cfg!(debug_assertions) {
            let left_height = height(&node.left);
            let right_height = height(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert_eq!(node.size, size(&node.left) + size(&node.right) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        node
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Used to rebalance the tree when the left child is too tall. As such, it must
    /// only be called when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root (i.e. "self")    new_root
    ///    /     \                  /     \
    /// new_root  z     rotate ->  x    old_root
    ///  / \                               /  \
    /// x   y                             y    z
    /// ```
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.left.take().expect("Rotate right => left child");
        self.left = new_root.right.take();
        self.fix_height_and_size();

        new_root.right = Some(self);
        new_root.fix_height_and_size();
        new_root
    }

    /// Rotate self to the left. The mirror image of [`Node::rotate_right`].
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    ///
    /// ```text
    ///   old_root                       new_root
    ///    /    \                         /    \
    ///   x   new_root   rotate ->    old_root  z
    ///        /  \                    /  \
    ///       y    z                  x    y
    /// ```
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = self.right.take().expect("Rotate left => right child");
        self.right = new_root.left.take();
        self.fix_height_and_size();

        new_root.left = Some(self);
        new_root.fix_height_and_size();
        new_root
    }

    /// Writes this subtree sideways: right subtree first, then this node, then the left subtree,
    /// each level indented three more spaces than its parent.
    pub(crate) fn dump(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        if let Some(right) = self.right() {
            right.dump(f, indent + 3)?;
        }
        writeln!(
            f,
            "{:indent$}{}(s{}, h{})",
            "",
            self.value,
            self.size,
            self.height,
            indent = indent
        )?;
        if let Some(left) = self.left() {
            left.dump(f, indent + 3)?;
        }
        Ok(())
    }
}
