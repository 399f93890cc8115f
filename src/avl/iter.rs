//! In-order traversal of a tree without recursion.

use std::iter::FusedIterator;

use crate::avl::node::Node;

/// An ascending, single-pass cursor over the values of a [`Tree`][crate::avl::Tree].
///
/// The cursor borrows the tree, so the tree can't be changed while the cursor is alive. It keeps
/// a stack of the ancestors it still owes a visit instead of recursing, and never materializes
/// the values up front.
///
/// Besides being an [`Iterator`], the cursor can be driven by hand with [`Iter::peek`],
/// [`Iter::value`] and [`Iter::advance`], which is how the set operations walk two trees in
/// lockstep.
///
/// # Examples
///
/// ```
/// use trees::avl::Tree;
///
/// let tree = Tree::from([3, 1, 2]);
/// let mut cursor = tree.iter();
///
/// assert_eq!(cursor.value(), &1);
/// cursor.advance();
/// assert_eq!(cursor.peek(), Some(&2));
/// assert_eq!(cursor.collect::<Vec<_>>(), vec![&2, &3]);
/// ```
pub struct Iter<'a, T> {
    /// Ancestors of `current` whose own value and right subtree haven't been visited.
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(root.map_or(0, |n| n.height)),
            current: None,
            remaining: root.map_or(0, |n| n.size),
        };
        iter.push_left_branch(root);
        iter
    }

    /// Pushes `node` and every node down its left edge, then pops the deepest one off as
    /// `current`. With nothing pushed and nothing pending the cursor is exhausted for good.
    fn push_left_branch(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
        self.current = self.stack.pop();
    }

    /// The value under the cursor, or `None` once every value has been visited.
    pub fn peek(&self) -> Option<&'a T> {
        self.current.map(|n| &n.value)
    }

    /// The value under the cursor.
    ///
    /// ## Panics
    ///
    /// When the cursor is exhausted.
    pub fn value(&self) -> &'a T {
        self.peek().expect("`Iter::value` called on an exhausted cursor")
    }

    /// Moves to the next value in ascending order. Does nothing on an exhausted cursor.
    pub fn advance(&mut self) {
        if let Some(current) = self.current {
            self.remaining -= 1;
            self.push_left_branch(current.right());
        }
    }

    /// Whether every value has been visited.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.peek()?;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
