//! An AVL tree with ordered-set semantics.
//!
//! Every node keeps the height and size of its subtree. Heights keep the tree balanced: after
//! any insert or delete, sibling subtrees differ in height by at most one, so lookups, inserts,
//! deletes and splits all take `O(lg N)`.
//!
//! Nodes are owned by exactly one parent. Cloning a tree copies every node, so mutating a clone
//! never affects the original.
//!
//! # Examples
//!
//! ```
//! use trees::avl::Tree;
//!
//! let mut tree = Tree::from([5, 3, 8, 3, 1]);
//!
//! // Duplicates collapse.
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.to_vec(), vec![1, 3, 5, 8]);
//!
//! assert!(tree.contains(&3));
//! assert!(tree.delete(&3));
//! assert!(!tree.contains(&3));
//!
//! // Deleting something that isn't there is fine.
//! assert!(!tree.delete(&3));
//!
//! let (lesser, greater) = tree.split(&5, true);
//! assert_eq!(lesser.to_vec(), vec![1]);
//! assert_eq!(greater.to_vec(), vec![5, 8]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::compare::{Compare, Natural};
use crate::error::ConcatError;

mod iter;
pub(crate) mod node;
mod set_ops;
mod split;

pub use iter::Iter;
pub use set_ops::{difference, intersection, union};

use node::{Link, Node};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) holding a set of values.
///
/// Values are ordered by the comparator `C`, which defaults to the values' own [`Ord`].
pub struct Tree<T, C = Natural> {
    root: Link<T>,
    cmp: C,
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self { root: None, cmp }
    }

    /// Builds a `Tree` ordered by `cmp` from the given values. Duplicates are dropped.
    pub fn from_iter_with<I>(values: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
        C: Compare<T>,
    {
        let mut tree = Self::with_comparator(cmp);
        tree.extend(values);
        tree
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        node::size(&self.root)
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a single value a
    /// height of 1.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// The smallest value, if any.
    pub fn first(&self) -> Option<&T> {
        self.root().map(Node::smallest)
    }

    /// The largest value, if any.
    pub fn last(&self) -> Option<&T> {
        self.root().map(Node::largest)
    }

    /// An ascending iterator over the values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Copies the values out in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Inserts `value` unless an equal value is already present. Returns whether the tree
    /// changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        C: Compare<T>,
    {
        let (root, inserted) = node::insert(self.root.take(), value, &self.cmp);
        self.root = Some(root);
        inserted
    }

    /// Whether a value equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        C: Compare<T>,
    {
        self.get(value).is_some()
    }

    /// Potentially finds the stored value equal to `value`. If there is none, `None` is
    /// returned.
    pub fn get(&self, value: &T) -> Option<&T>
    where
        C: Compare<T>,
    {
        self.root().and_then(|n| n.find(value, &self.cmp))
    }

    /// Deletes the value equal to `value`. Returns whether there was one to delete.
    pub fn delete(&mut self, value: &T) -> bool
    where
        C: Compare<T>,
    {
        self.take(value).is_some()
    }

    /// Deletes the value equal to `value` and returns it. If the tree does not contain such a
    /// value, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::avl::Tree;
    ///
    /// let mut tree = Tree::from(["a".to_string(), "b".to_string()]);
    ///
    /// assert_eq!(tree.take(&"a".to_string()), Some("a".to_string()));
    /// assert_eq!(tree.take(&"a".to_string()), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        C: Compare<T>,
    {
        let root = self.root.take()?;
        let (root, removed) = root.delete(value, &self.cmp);
        self.root = root;
        removed
    }

    /// Splits the tree in two around `pivot`, consuming it. Clone the tree first to keep it.
    ///
    /// With `strictly_less`, the first tree gets the values `< pivot` and the second the values
    /// `>= pivot`. Without it, the first tree gets the values `<= pivot` and the second the values
    /// `> pivot`. Both trees are balanced and the split takes `O(lg N)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::avl::Tree;
    ///
    /// let tree = Tree::from([1, 3, 5, 8]);
    ///
    /// let (lesser, greater) = tree.clone().split(&5, true);
    /// assert_eq!(lesser.to_vec(), vec![1, 3]);
    /// assert_eq!(greater.to_vec(), vec![5, 8]);
    ///
    /// let (lesser, greater) = tree.split(&5, false);
    /// assert_eq!(lesser.to_vec(), vec![1, 3, 5]);
    /// assert_eq!(greater.to_vec(), vec![8]);
    /// ```
    pub fn split(self, pivot: &T, strictly_less: bool) -> (Self, Self)
    where
        C: Compare<T> + Clone,
    {
        log::trace!(
            "splitting tree of {} values (strictly_less: {strictly_less})",
            self.len()
        );
        let (lesser, greater) = split::split(self.root, pivot, strictly_less, &self.cmp);
        (
            Self {
                root: lesser,
                cmp: self.cmp.clone(),
            },
            Self {
                root: greater,
                cmp: self.cmp,
            },
        )
    }

    /// Moves every value of `other` to the end of this tree in `O(lg N)`, leaving `other` empty.
    ///
    /// # Errors
    ///
    /// [`ConcatError::Overlap`] when some value of `other` doesn't come after every value of this
    /// tree. Neither tree is changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::avl::Tree;
    ///
    /// let (mut lesser, mut greater) = Tree::from([1, 2, 3, 4]).split(&3, true);
    ///
    /// lesser.concat(&mut greater).unwrap();
    /// assert_eq!(lesser.to_vec(), vec![1, 2, 3, 4]);
    /// assert!(greater.is_empty());
    ///
    /// assert!(lesser.concat(&mut Tree::from([0])).is_err());
    /// ```
    pub fn concat(&mut self, other: &mut Self) -> Result<(), ConcatError>
    where
        C: Compare<T>,
    {
        if let (Some(last), Some(first)) = (self.last(), other.first()) {
            if self.cmp.compare(last, first) != Ordering::Less {
                log::debug!("rejecting concat of overlapping trees");
                return Err(ConcatError::Overlap);
            }
        }
        log::trace!("concatenating trees of {} and {} values", self.len(), other.len());
        self.root = split::concat(self.root.take(), other.root.take());
        Ok(())
    }

    /// Whether this tree holds exactly the values of `other`, which must be in ascending order
    /// and free of duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use trees::avl::Tree;
    ///
    /// let tree = Tree::from([2, 1, 3]);
    ///
    /// assert!(tree.eq_ordered([1, 2, 3]));
    /// assert!(!tree.eq_ordered(&[1, 2]));
    /// ```
    pub fn eq_ordered<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        C: Compare<T>,
    {
        let mut ours = self.iter();
        for theirs in other {
            match ours.next() {
                Some(value) if self.cmp.compare(value, theirs.borrow()) == Ordering::Equal => {}
                _ => return false,
            }
        }
        ours.is_exhausted()
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T, C: Default> Default for Tree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

/// Deep copy. The two trees share no nodes.
impl<T: Clone, C: Clone> Clone for Tree<T, C> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A sideways dump of the tree for debugging: the right subtree above each node and the left
/// subtree below it, each line tagged with that node's subtree size and height. This is not a
/// stable format.
///
/// ```text
/// tree:
///    8(s1, h1)
/// 5(s3, h2)
///    3(s1, h1)
/// ```
impl<T: fmt::Display, C> fmt::Display for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tree:")?;
        match self.root() {
            Some(root) => root.dump(f, 0),
            None => write!(f, "tree is empty"),
        }
    }
}

impl<T, C: Compare<T>> PartialEq for Tree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.eq_ordered(other)
    }
}

impl<T, C: Compare<T>> Eq for Tree<T, C> {}

impl<T: Ord> PartialEq<BTreeSet<T>> for Tree<T> {
    fn eq(&self, other: &BTreeSet<T>) -> bool {
        self.len() == other.len() && self.eq_ordered(other)
    }
}

impl<T, C: Compare<T>> Extend<T> for Tree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for Tree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_iter_with(values, C::default())
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Tree<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
