//! Ordering predicates for [`ArrayHeap`](crate::ds::ArrayHeap).
//!
//! A heap is parameterized by a "less-than" capability instead of relying on
//! `T: Ord` directly. The element that is greatest under the predicate sits
//! at the root, so:
//!
//! | Order         | `less(a, b)`  | Root     |
//! |---------------|---------------|----------|
//! | [`MaxOrder`]  | `a < b`       | maximum  |
//! | [`MinOrder`]  | `a > b`       | minimum  |
//! | [`FnOrder`]   | user closure  | greatest under closure |
//! | [`Reversed`]  | `inner(b, a)` | least under inner      |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::{ArrayHeap, FnOrder};
//!
//! // Root is the shortest string.
//! let order = FnOrder::new(|a: &&str, b: &&str| a.len() > b.len());
//! let mut heap = ArrayHeap::with_order(order);
//! heap.push("banana");
//! heap.push("fig");
//! heap.push("apple");
//! assert_eq!(heap.top(), Ok(&"fig"));
//! ```

use std::fmt;

/// Strict "less-than" predicate used to order heap elements.
///
/// Implementations must be a strict weak ordering: irreflexive and
/// transitive, with incomparability transitive as well. Anything else leaves
/// the heap in an unspecified (but memory-safe) order.
pub trait HeapOrder<T> {
    /// Returns `true` if `a` should sit below `b` in the heap.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Natural order; produces a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord> HeapOrder<T> for MaxOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Inverted natural order; produces a min-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord> HeapOrder<T> for MinOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

/// Adapts a `Fn(&T, &T) -> bool` closure into a [`HeapOrder`].
#[derive(Clone, Copy)]
pub struct FnOrder<F> {
    less: F,
}

impl<F> FnOrder<F> {
    /// Wraps a "less-than" closure.
    pub fn new(less: F) -> Self {
        Self { less }
    }
}

impl<T, F> HeapOrder<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.less)(a, b)
    }
}

/// Inverts another order; `Reversed(MaxOrder)` behaves like [`MinOrder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<O>(pub O);

impl<T, O: HeapOrder<T>> HeapOrder<T> for Reversed<O> {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOrder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_order_is_natural_less() {
        assert!(MaxOrder.less(&1, &2));
        assert!(!MaxOrder.less(&2, &1));
        assert!(!MaxOrder.less(&2, &2));
    }

    #[test]
    fn min_order_is_inverted() {
        assert!(MinOrder.less(&2, &1));
        assert!(!MinOrder.less(&1, &2));
        assert!(!MinOrder.less(&2, &2));
    }

    #[test]
    fn fn_order_delegates_to_closure() {
        let by_abs = FnOrder::new(|a: &i32, b: &i32| a.abs() < b.abs());
        assert!(by_abs.less(&1, &-3));
        assert!(!by_abs.less(&-3, &2));
    }

    #[test]
    fn reversed_max_matches_min() {
        for (a, b) in [(1, 2), (2, 1), (3, 3)] {
            assert_eq!(Reversed(MaxOrder).less(&a, &b), MinOrder.less(&a, &b));
        }
    }
}
