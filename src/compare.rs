//! Total orders used to arrange the values of an [`avl::Tree`][crate::avl::Tree].
//!
//! A tree never calls `Ord::cmp` directly. It asks its comparator, which
//! defaults to [`Natural`] (the type's own `Ord`) but can be any type
//! implementing [`Compare`].
//!
//! # Examples
//!
//! ```
//! use trees::avl::Tree;
//! use trees::compare::ByFn;
//!
//! // Largest first.
//! let mut tree = Tree::with_comparator(ByFn(|a: &i32, b: &i32| b.cmp(a)));
//! tree.extend([1, 3, 2]);
//!
//! assert_eq!(tree.to_vec(), vec![3, 2, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A total order over `T`.
///
/// Implementations must be consistent: `compare(a, b)` is `Less` exactly when
/// `compare(b, a)` is `Greater`, and `Equal` is an equivalence relation. A
/// comparator that breaks these rules won't cause memory unsafety but the
/// tree may lose or duplicate values.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values with a closure.
#[derive(Clone, Copy, Default)]
pub struct ByFn<F>(pub F);

impl<T, F> Compare<T> for ByFn<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for ByFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByFn(..)")
    }
}
