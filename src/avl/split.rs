//! Splitting a subtree around a pivot and joining two subtrees back together.
//!
//! Both operations walk a single root-to-leaf path so they cost `O(lg N)`. Nodes are moved,
//! never copied: the node that connects two subtrees in [`merge_with_root`] is one that was
//! detached from the tree being split.

use std::cmp::Ordering;

use crate::avl::node::{height, Link, Node};
use crate::compare::Compare;

/// Joins `left`, `root` and `right` into one balanced subtree.
///
/// Every value in `left` must be less than `root.value` and every value in `right` greater.
/// This isn't checked. `root`'s own children are overwritten.
///
/// If the two sides are within one level of each other `root` simply becomes their parent.
/// Otherwise we walk down the inner spine of the taller side until we find a subtree short
/// enough to pair with the other side, join there, and rebalance on the way back up.
pub(crate) fn merge_with_root<T>(
    left: Link<T>,
    right: Link<T>,
    mut root: Box<Node<T>>,
) -> Box<Node<T>> {
    let diff = height(&left) as isize - height(&right) as isize;
    if diff > 1 {
        let mut left = left.expect("Left taller than right => left child");
        left.right = Some(merge_with_root(left.right.take(), right, root));
        left.recover_balance()
    } else if diff < -1 {
        let mut right = right.expect("Right taller than left => right child");
        right.left = Some(merge_with_root(left, right.left.take(), root));
        right.recover_balance()
    } else {
        root.left = left;
        root.right = right;
        root.fix_height_and_size();
        root
    }
}

/// Joins two subtrees where every value in `left` is less than every value in `right`. The
/// smallest value of `right` becomes the connecting node.
pub(crate) fn concat<T>(left: Link<T>, right: Link<T>) -> Link<T> {
    match (left, right) {
        (left, None) => left,
        (None, right) => right,
        (left, Some(right)) => {
            let (right, smallest) = right.remove_smallest();
            Some(merge_with_root(left, right, Node::leaf(smallest)))
        }
    }
}

/// Partitions a subtree into the values before `pivot` and the values after it.
///
/// A value comparing equal to `pivot` goes to the second subtree when `strictly_less` is true,
/// and to the first otherwise. So with `strictly_less` the first subtree holds exactly the values
/// `< pivot`, and without it the values `<= pivot`.
pub(crate) fn split<T, C>(
    link: Link<T>,
    pivot: &T,
    strictly_less: bool,
    cmp: &C,
) -> (Link<T>, Link<T>)
where
    C: Compare<T>,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    let node_goes_right = match cmp.compare(&node.value, pivot) {
        Ordering::Less => false,
        Ordering::Equal => strictly_less,
        Ordering::Greater => true,
    };

    if node_goes_right {
        // Everything in `node.right` is after `node`, so only the left subtree straddles the
        // pivot.
        let (lesser, rest) = split(node.left.take(), pivot, strictly_less, cmp);
        let right = node.right.take();
        (lesser, Some(merge_with_root(rest, right, node)))
    } else {
        let (rest, greater) = split(node.right.take(), pivot, strictly_less, cmp);
        let left = node.left.take();
        (Some(merge_with_root(left, rest, node)), greater)
    }
}
