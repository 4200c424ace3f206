//! Top-K selection with a bounded heap.
//!
//! The K largest elements of a sequence are found in one pass while holding
//! at most K elements in a min-heap. The heap root is the smallest element
//! kept so far, i.e. the admission threshold: a new element is retained only
//! if it beats the root, in which case it replaces the root.
//!
//! ## Architecture
//!
//! ```text
//!   items = [1, 0, 6, 4, 10, 7, 3, 8], k = 4
//!
//!   SeedThenScan                         Incremental
//!   ────────────                         ───────────
//!   heap = heapify(items[..4])           for x in items:
//!        = {0, 1, 6, 4}  root 0            if len < k: push(x)
//!   for x in items[4..]:                   elif x > root: replace_top(x)
//!     if x > root: replace_top(x)
//!
//!   10 > 0  → {1, 4, 6, 10}  root 1
//!    7 > 1  → {4, 6, 7, 10}  root 4
//!    3 ≤ 4  → skip
//!    8 > 4  → {6, 7, 8, 10}  root 6
//!
//!   drain top-first: 6 7 8 10  (ascending)
//! ```
//!
//! Both strategies retain the same multiset. Among equal values the choice of
//! which copy is kept is unspecified.
//!
//! ## Operations
//!
//! | Operation                | Description                        | Complexity   |
//! |--------------------------|------------------------------------|--------------|
//! | `top_k` / `top_k_with`   | K largest, as a `MinHeap`          | O(N log K)   |
//! | `bottom_k`               | K smallest, as a `MaxHeap`         | O(N log K)   |
//! | `top_k_by`               | K greatest under a closure         | O(N log K)   |
//! | `TopKSelector::offer`    | Streaming admission                | O(log K)     |
//!
//! All routines require `0 < k`; the slice-based ones also require
//! `k <= items.len()` and report [`SelectionError`] otherwise.
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::select::top_k;
//!
//! let mut heap = top_k(&[1, 0, 6, 4, 10, 7, 3, 8], 4).unwrap();
//! let ascending: Vec<_> = heap.drain_sorted().collect();
//! assert_eq!(ascending, vec![6, 7, 8, 10]);
//! ```

use log::debug;

use crate::ds::{ArrayHeap, FnOrder, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder, Reversed};
use crate::error::SelectionError;

/// How the bounded heap is filled during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanStrategy {
    /// Heapify the first K elements, then scan the rest.
    #[default]
    SeedThenScan,
    /// Push while fewer than K are held, then compare every element.
    Incremental,
}

/// Returns the K largest elements of `items` as a min-heap.
///
/// Draining the result top-first yields them in ascending order. Uses
/// [`ScanStrategy::SeedThenScan`].
///
/// # Errors
///
/// [`SelectionError::ZeroK`] if `k == 0`, [`SelectionError::KExceedsLen`] if
/// `k > items.len()`.
///
/// # Example
///
/// ```
/// use heapkit::error::SelectionError;
/// use heapkit::select::top_k;
///
/// let heap = top_k(&[3, 1, 4, 1, 5, 9, 2, 6], 3).unwrap();
/// assert_eq!(heap.top(), Ok(&5));
///
/// assert_eq!(top_k(&[1, 2], 3).unwrap_err(), SelectionError::KExceedsLen { k: 3, len: 2 });
/// ```
pub fn top_k<T: Ord + Clone>(items: &[T], k: usize) -> Result<MinHeap<T>, SelectionError> {
    top_k_with(items, k, ScanStrategy::default())
}

/// [`top_k`] with an explicit [`ScanStrategy`].
pub fn top_k_with<T: Ord + Clone>(
    items: &[T],
    k: usize,
    strategy: ScanStrategy,
) -> Result<MinHeap<T>, SelectionError> {
    select(items, k, strategy, MinOrder)
}

/// Returns the K smallest elements of `items` as a max-heap.
///
/// Draining the result top-first yields them in descending order.
///
/// # Example
///
/// ```
/// use heapkit::select::bottom_k;
///
/// let heap = bottom_k(&[1, 0, 6, 4, 10, 7, 3, 8], 3).unwrap();
/// assert_eq!(heap.into_sorted_vec(), vec![0, 1, 3]);
/// ```
pub fn bottom_k<T: Ord + Clone>(items: &[T], k: usize) -> Result<MaxHeap<T>, SelectionError> {
    select(items, k, ScanStrategy::default(), MaxOrder)
}

/// Returns the K greatest elements under the `less` predicate, ascending.
///
/// # Example
///
/// ```
/// use heapkit::select::top_k_by;
///
/// let words = ["pear", "fig", "banana", "kiwi", "apple"];
/// let longest = top_k_by(&words, 2, |a: &&str, b: &&str| a.len() < b.len()).unwrap();
/// assert_eq!(longest, vec!["apple", "banana"]);
/// ```
pub fn top_k_by<T, F>(items: &[T], k: usize, less: F) -> Result<Vec<T>, SelectionError>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut heap = select(
        items,
        k,
        ScanStrategy::default(),
        Reversed(FnOrder::new(less)),
    )?;
    Ok(heap.drain_sorted().collect())
}

/// Shared bounded scan. The retention heap's root is the weakest kept
/// element; `x` displaces it when `order.less(x, root)`.
fn select<T, O>(
    items: &[T],
    k: usize,
    strategy: ScanStrategy,
    order: O,
) -> Result<ArrayHeap<T, O>, SelectionError>
where
    T: Clone,
    O: HeapOrder<T>,
{
    SelectionError::check(k, items.len())?;

    let mut replaced = 0usize;
    let heap = match strategy {
        ScanStrategy::SeedThenScan => {
            let mut heap = ArrayHeap::from_vec_with_order(items[..k].to_vec(), order);
            for x in &items[k..] {
                if admits(&heap, x) {
                    heap.replace_top(x.clone());
                    replaced += 1;
                }
            }
            heap
        },
        ScanStrategy::Incremental => {
            let mut heap = ArrayHeap::with_capacity_and_order(k, order);
            for x in items {
                if heap.len() < k {
                    heap.push(x.clone());
                } else if admits(&heap, x) {
                    heap.replace_top(x.clone());
                    replaced += 1;
                }
            }
            heap
        },
    };

    debug!(
        "selected {} of {} elements ({:?}, {} replacements)",
        k,
        items.len(),
        strategy,
        replaced
    );
    Ok(heap)
}

#[inline]
fn admits<T, O: HeapOrder<T>>(heap: &ArrayHeap<T, O>, x: &T) -> bool {
    heap.peek().is_some_and(|root| heap.order().less(x, root))
}

/// Streaming top-K selector.
///
/// Holds at most `k` elements. With the default [`MinOrder`] retention heap
/// it keeps the K largest values offered so far;
/// `TopKSelector::with_order(k, MaxOrder)` keeps the K smallest.
///
/// # Example
///
/// ```
/// use heapkit::select::TopKSelector;
///
/// let mut selector = TopKSelector::new(3).unwrap();
/// for x in [5, 1, 9, 3, 7, 2] {
///     selector.offer(x);
/// }
/// assert_eq!(selector.threshold(), Some(&5));
/// assert_eq!(selector.into_pop_order_vec(), vec![5, 7, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct TopKSelector<T, O = MinOrder> {
    heap: ArrayHeap<T, O>,
    k: usize,
}

impl<T: Ord> TopKSelector<T> {
    /// Creates a selector that keeps the `k` largest elements.
    ///
    /// # Errors
    ///
    /// [`SelectionError::ZeroK`] if `k == 0`.
    pub fn new(k: usize) -> Result<Self, SelectionError> {
        Self::with_order(k, MinOrder)
    }
}

impl<T, O> TopKSelector<T, O>
where
    O: HeapOrder<T>,
{
    /// Creates a selector with an explicit retention order.
    ///
    /// The root of the retention heap is the weakest kept element, so pass
    /// the *inverse* of the ranking order (e.g. [`MinOrder`] to keep the
    /// largest).
    pub fn with_order(k: usize, order: O) -> Result<Self, SelectionError> {
        if k == 0 {
            return Err(SelectionError::ZeroK);
        }
        Ok(Self {
            heap: ArrayHeap::with_capacity_and_order(k, order),
            k,
        })
    }

    /// Offers `value`; returns `true` if it was retained.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::select::TopKSelector;
    ///
    /// let mut selector = TopKSelector::new(1).unwrap();
    /// assert!(selector.offer(4));
    /// assert!(!selector.offer(2));
    /// assert!(!selector.offer(4)); // ties do not displace
    /// assert!(selector.offer(6));
    /// ```
    pub fn offer(&mut self, value: T) -> bool {
        if self.heap.len() < self.k {
            self.heap.push(value);
            return true;
        }
        if admits(&self.heap, &value) {
            self.heap.replace_top(value);
            return true;
        }
        false
    }

    /// Returns the number of elements to keep.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the number of elements currently kept.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing has been offered yet.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` once `k` elements are held.
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.k
    }

    /// Returns the value a new element must beat, once the selector is full.
    ///
    /// Before `k` elements have been offered every element is admitted and
    /// this returns `None`.
    pub fn threshold(&self) -> Option<&T> {
        if self.is_full() {
            self.heap.peek()
        } else {
            None
        }
    }

    /// Returns the retention heap.
    pub fn as_heap(&self) -> &ArrayHeap<T, O> {
        &self.heap
    }

    /// Consumes the selector, returning the retention heap.
    pub fn into_heap(self) -> ArrayHeap<T, O> {
        self.heap
    }

    /// Consumes the selector, returning the kept elements weakest first.
    ///
    /// Ascending for the default order, descending with [`MaxOrder`].
    pub fn into_pop_order_vec(self) -> Vec<T> {
        let mut out = self.heap.into_sorted_vec();
        out.reverse();
        out
    }

    /// Empties the selector, keeping `k`.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, O> Extend<T> for TopKSelector<T, O>
where
    O: HeapOrder<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i32; 8] = [1, 0, 6, 4, 10, 7, 3, 8];
    const RAW: [i32; 8] = [3, 1, 4, 1, 5, 9, 2, 6];

    fn drained<O: HeapOrder<i32>>(mut heap: ArrayHeap<i32, O>) -> Vec<i32> {
        heap.drain_sorted().collect()
    }

    #[test]
    fn top_four_of_sample_ascending() {
        let heap = top_k(&SAMPLE, 4).unwrap();
        assert_eq!(drained(heap), vec![6, 7, 8, 10]);
    }

    #[test]
    fn top_three_of_raw_data() {
        let heap = top_k(&RAW, 3).unwrap();
        assert_eq!(drained(heap), vec![5, 6, 9]);
    }

    #[test]
    fn strategies_agree() {
        for k in 1..=SAMPLE.len() {
            let seeded = drained(top_k_with(&SAMPLE, k, ScanStrategy::SeedThenScan).unwrap());
            let incremental = drained(top_k_with(&SAMPLE, k, ScanStrategy::Incremental).unwrap());
            assert_eq!(seeded, incremental, "k = {}", k);
        }
    }

    #[test]
    fn k_equal_to_len_returns_everything() {
        let heap = top_k(&RAW, RAW.len()).unwrap();
        assert_eq!(drained(heap), vec![1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn rejects_zero_and_oversized_k() {
        assert_eq!(top_k(&SAMPLE, 0).unwrap_err(), SelectionError::ZeroK);
        assert_eq!(
            top_k(&SAMPLE, 9).unwrap_err(),
            SelectionError::KExceedsLen { k: 9, len: 8 }
        );
        assert_eq!(
            top_k_with(&SAMPLE, 9, ScanStrategy::Incremental).unwrap_err(),
            SelectionError::KExceedsLen { k: 9, len: 8 }
        );
        let empty: [i32; 0] = [];
        assert_eq!(top_k(&empty, 0).unwrap_err(), SelectionError::ZeroK);
        assert_eq!(bottom_k(&empty, 1).unwrap_err(), SelectionError::KExceedsLen {
            k: 1,
            len: 0
        });
    }

    #[test]
    fn duplicates_keep_values() {
        let heap = top_k(&[5, 5, 5, 1, 5], 3).unwrap();
        assert_eq!(drained(heap), vec![5, 5, 5]);
    }

    #[test]
    fn bottom_k_descending_drain() {
        let heap = bottom_k(&SAMPLE, 3).unwrap();
        assert_eq!(drained(heap), vec![3, 1, 0]);
    }

    #[test]
    fn top_k_by_key() {
        let pairs = [("a", 3), ("b", 9), ("c", 1), ("d", 7)];
        let best = top_k_by(&pairs, 2, |x: &(&str, i32), y: &(&str, i32)| x.1 < y.1).unwrap();
        assert_eq!(best, vec![("d", 7), ("b", 9)]);
    }

    #[test]
    fn selector_matches_top_k() {
        let mut selector = TopKSelector::new(4).unwrap();
        selector.extend(SAMPLE);
        assert!(selector.is_full());
        assert_eq!(selector.threshold(), Some(&6));
        assert_eq!(selector.into_pop_order_vec(), vec![6, 7, 8, 10]);
    }

    #[test]
    fn selector_threshold_none_until_full() {
        let mut selector: TopKSelector<i32> = TopKSelector::new(3).unwrap();
        assert!(selector.is_empty());
        selector.offer(4);
        selector.offer(8);
        assert_eq!(selector.threshold(), None);
        selector.offer(1);
        assert_eq!(selector.threshold(), Some(&1));
        assert_eq!(selector.len(), 3);
        assert_eq!(selector.k(), 3);
    }

    #[test]
    fn selector_rejects_zero_k() {
        assert_eq!(
            TopKSelector::<i32>::new(0).unwrap_err(),
            SelectionError::ZeroK
        );
    }

    #[test]
    fn selector_holds_fewer_than_k_when_short() {
        let mut selector = TopKSelector::new(10).unwrap();
        selector.extend([3, 1, 2]);
        assert!(!selector.is_full());
        assert_eq!(selector.into_pop_order_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn bottom_k_selector_keeps_smallest() {
        let mut selector = TopKSelector::with_order(2, MaxOrder).unwrap();
        selector.extend(SAMPLE);
        assert_eq!(selector.threshold(), Some(&1));
        assert_eq!(selector.into_pop_order_vec(), vec![1, 0]);
    }

    #[test]
    fn selector_clear_resets() {
        let mut selector = TopKSelector::new(2).unwrap();
        selector.extend([1, 2, 3]);
        selector.clear();
        assert!(selector.is_empty());
        assert!(selector.offer(0));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: top_k drained ascending equals the K largest sorted ascending
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_top_k_matches_sort(
            values in prop::collection::vec(any::<i32>(), 1..150),
            k_seed in any::<usize>(),
            incremental in any::<bool>(),
        ) {
            let k = k_seed % values.len() + 1;
            let strategy = if incremental {
                ScanStrategy::Incremental
            } else {
                ScanStrategy::SeedThenScan
            };

            let mut sorted = values.clone();
            sorted.sort();
            let expected = sorted[sorted.len() - k..].to_vec();

            let mut heap = top_k_with(&values, k, strategy).unwrap();
            prop_assert!(heap.check_invariants().is_ok());
            let got: Vec<_> = heap.drain_sorted().collect();
            prop_assert_eq!(got, expected);
        }

        /// Property: bottom_k equals the K smallest
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_bottom_k_matches_sort(
            values in prop::collection::vec(any::<i16>(), 1..150),
            k_seed in any::<usize>(),
        ) {
            let k = k_seed % values.len() + 1;
            let mut sorted = values.clone();
            sorted.sort();

            let heap = bottom_k(&values, k).unwrap();
            prop_assert_eq!(heap.into_sorted_vec(), sorted[..k].to_vec());
        }

        /// Property: k > len or k == 0 is always rejected
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_invalid_k_rejected(
            values in prop::collection::vec(any::<u8>(), 0..50),
            extra in 1usize..10,
        ) {
            let len = values.len();
            prop_assert_eq!(top_k(&values, 0).unwrap_err(), SelectionError::ZeroK);
            prop_assert_eq!(
                top_k(&values, len + extra).unwrap_err(),
                SelectionError::KExceedsLen { k: len + extra, len }
            );
        }

        /// Property: streaming selector agrees with the slice routine
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_selector_matches_top_k(
            values in prop::collection::vec(any::<i32>(), 1..150),
            k_seed in any::<usize>(),
        ) {
            let k = k_seed % values.len() + 1;
            let mut selector = TopKSelector::new(k).unwrap();
            selector.extend(values.iter().copied());

            let mut heap = top_k(&values, k).unwrap();
            let expected: Vec<_> = heap.drain_sorted().collect();
            prop_assert_eq!(selector.into_pop_order_vec(), expected);
        }
    }
}
