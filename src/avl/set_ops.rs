//! Set algebra over trees sharing a comparator type.
//!
//! All three operations leave their inputs alone and return a new, independent tree ordered by
//! the first tree's comparator.

use std::cmp::Ordering;

use crate::avl::Tree;
use crate::compare::Compare;

/// Returns the values present in both trees.
///
/// Both trees are walked in lockstep so this is linear in their combined size (plus the cost of
/// building the result).
///
/// # Examples
///
/// ```
/// use trees::avl::{intersection, Tree};
///
/// let first = Tree::from([1, 4, 5, 8, 2]);
/// let second = Tree::from([3, 7, 5, 12, 1]);
///
/// assert_eq!(intersection(&first, &second).to_vec(), vec![1, 5]);
/// ```
pub fn intersection<T, C>(first: &Tree<T, C>, second: &Tree<T, C>) -> Tree<T, C>
where
    T: Clone,
    C: Compare<T> + Clone,
{
    let mut result = Tree::with_comparator(first.cmp.clone());
    let mut ours = first.iter();
    let mut theirs = second.iter();

    while let (Some(a), Some(b)) = (ours.peek(), theirs.peek()) {
        match first.cmp.compare(a, b) {
            Ordering::Less => ours.advance(),
            Ordering::Equal => {
                result.insert(a.clone());
                ours.advance();
                theirs.advance();
            }
            Ordering::Greater => theirs.advance(),
        }
    }

    result
}

/// Returns the values present in either tree.
///
/// # Examples
///
/// ```
/// use trees::avl::{union, Tree};
///
/// let first = Tree::from([1, 5, 7]);
/// let second = Tree::from([3, 7]);
///
/// assert_eq!(union(&first, &second).to_vec(), vec![1, 3, 5, 7]);
/// ```
pub fn union<T, C>(first: &Tree<T, C>, second: &Tree<T, C>) -> Tree<T, C>
where
    T: Clone,
    C: Compare<T> + Clone,
{
    let mut result = first.clone();
    result.extend(second.iter().cloned());
    result
}

/// Returns the values of `first` that aren't in `second`.
///
/// # Examples
///
/// ```
/// use trees::avl::{difference, Tree};
///
/// let first = Tree::from([1, 5, 7]);
/// let second = Tree::from([3, 7]);
///
/// assert_eq!(difference(&first, &second).to_vec(), vec![1, 5]);
/// ```
pub fn difference<T, C>(first: &Tree<T, C>, second: &Tree<T, C>) -> Tree<T, C>
where
    T: Clone,
    C: Compare<T> + Clone,
{
    let mut result = first.clone();
    for value in second {
        result.delete(value);
    }
    result
}
