//! Array-backed binary heap with a pluggable ordering predicate.
//!
//! Elements live in a dense `Vec<T>` laid out as a complete binary tree. The
//! element that is greatest under the heap's [`HeapOrder`] sits at index 0.
//!
//! ## Architecture
//!
//! ```text
//!   from_vec([3, 1, 4, 1, 5, 9, 2, 6])   (MaxOrder)
//!
//!   index:   0   1   2   3   4   5   6   7
//!   data:  [ 9 , 6 , 4 , 1 , 5 , 3 , 2 , 1 ]
//!
//!                       9            parent(i) = (i - 1) / 2
//!                    /     \         left(i)   = 2i + 1
//!                   6       4        right(i)  = 2i + 2
//!                  / \     / \
//!                 1   5   3   2
//!                /
//!               1
//!
//!   Invariant: for every i > 0, !less(data[parent(i)], data[i])
//! ```
//!
//! Push Flow
//! ─────────
//!   push(v):
//!     data.push(v)                    (append at the tail)
//!     sift_up(len - 1)                (swap with parent while parent < v)
//!
//! Pop Flow
//! ────────
//!   pop():
//!     swap(data[0], data[len - 1])    (root goes to the tail)
//!     data.pop()                      (remove it)
//!     sift_down(0)                    (if anything remains)
//!
//! Heapify
//! ───────
//!   from_vec(v):
//!     for i in (0..=parent(len - 1)).rev():
//!       sift_down(i)                  (O(n) total, bottom-up)
//!
//! ## Operations
//!
//! | Operation          | Description                             | Complexity |
//! |--------------------|-----------------------------------------|------------|
//! | `from_vec`         | Bottom-up heapify                        | O(n)       |
//! | `push`             | Append + sift-up                         | O(log n)   |
//! | `top` / `peek`     | Read the root                            | O(1)       |
//! | `pop`              | Remove the root + sift-down              | O(log n)   |
//! | `replace_top`      | Overwrite the root + sift-down           | O(log n)   |
//! | `push_pop`         | Push then pop, short-circuited           | O(log n)   |
//! | `into_sorted_vec`  | In-place heap sort                       | O(n log n) |
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::MaxHeap;
//!
//! let mut heap = MaxHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert_eq!(heap.top(), Ok(&9));
//!
//! heap.push(10);
//! assert_eq!(heap.top(), Ok(&10));
//!
//! let drained: Vec<_> = heap.drain_sorted().collect();
//! assert_eq!(drained, vec![10, 9, 6, 5, 4, 3, 2, 1, 1]);
//! assert!(heap.pop().is_err());
//! ```
//!
//! ## Thread Safety
//!
//! `ArrayHeap` is a plain owned value with no internal locking. With the
//! `metrics` feature enabled it holds `Cell` counters and is `!Sync`.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use log::trace;

use crate::ds::order::{HeapOrder, MaxOrder, MinOrder};
use crate::error::{EmptyHeapError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::heap_metrics::HeapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::HeapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    HeapMetricsReadRecorder, HeapMetricsRecorder, MetricsSnapshotProvider,
};

/// Max-heap under the natural order of `T`.
pub type MaxHeap<T> = ArrayHeap<T, MaxOrder>;

/// Min-heap under the natural order of `T`.
pub type MinHeap<T> = ArrayHeap<T, MinOrder>;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// Moves `data[i]` towards the root until its parent is not less than it.
///
/// Returns the number of swaps performed.
fn sift_up<T, O: HeapOrder<T>>(data: &mut [T], mut i: usize, order: &O) -> usize {
    let mut steps = 0;
    while i > 0 {
        let p = parent(i);
        if !order.less(&data[p], &data[i]) {
            break;
        }
        data.swap(i, p);
        i = p;
        steps += 1;
    }
    steps
}

/// Moves `data[i]` towards the leaves within `data[..end]`.
///
/// A child replaces the current best only if it is strictly greater, so the
/// left child wins ties with the right one. Returns the number of swaps.
fn sift_down<T, O: HeapOrder<T>>(data: &mut [T], mut i: usize, end: usize, order: &O) -> usize {
    let mut steps = 0;
    loop {
        let l = left(i);
        let r = right(i);
        let mut best = i;

        if l < end && order.less(&data[best], &data[l]) {
            best = l;
        }
        if r < end && order.less(&data[best], &data[r]) {
            best = r;
        }
        if best == i {
            break;
        }

        data.swap(i, best);
        i = best;
        steps += 1;
    }
    steps
}

/// Bottom-up heapify of the whole slice. Returns the number of swaps.
fn heapify<T, O: HeapOrder<T>>(data: &mut [T], order: &O) -> usize {
    let len = data.len();
    if len < 2 {
        return 0;
    }
    let mut steps = 0;
    for i in (0..=parent(len - 1)).rev() {
        steps += sift_down(data, i, len, order);
    }
    steps
}

/// Sorts `data` ascending under `order` with an in-place heap sort.
///
/// # Example
///
/// ```
/// use heapkit::ds::{heap_sort_by_order, MinOrder};
///
/// let mut v = [3, 1, 4, 1, 5];
/// heap_sort_by_order(&mut v, &MinOrder);
/// assert_eq!(v, [5, 4, 3, 1, 1]);
/// ```
pub fn heap_sort_by_order<T, O: HeapOrder<T>>(data: &mut [T], order: &O) {
    heapify(data, order);
    let mut end = data.len();
    while end > 1 {
        end -= 1;
        data.swap(0, end);
        sift_down(data, 0, end, order);
    }
}

/// Sorts `data` ascending with an in-place heap sort.
///
/// # Example
///
/// ```
/// use heapkit::ds::heap_sort;
///
/// let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// heap_sort(&mut v);
/// assert_eq!(v, vec![1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_by_order(data, &MaxOrder);
}

/// Binary heap stored in a `Vec<T>`, ordered by `O`.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `O`: Ordering predicate; the greatest element under it is the top.
///   Defaults to [`MaxOrder`].
///
/// # Example
///
/// ```
/// use heapkit::ds::{MaxHeap, MinHeap};
///
/// let mut max: MaxHeap<i32> = MaxHeap::new();
/// let mut min: MinHeap<i32> = MinHeap::new();
/// for x in [5, 1, 8, 3] {
///     max.push(x);
///     min.push(x);
/// }
/// assert_eq!(max.top(), Ok(&8));
/// assert_eq!(min.top(), Ok(&1));
/// ```
#[derive(Clone)]
pub struct ArrayHeap<T, O = MaxOrder> {
    data: Vec<T>,
    order: O,
    #[cfg(feature = "metrics")]
    metrics: HeapMetrics,
}

impl<T, O> ArrayHeap<T, O>
where
    O: HeapOrder<T> + Default,
{
    /// Creates an empty heap.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let heap: MaxHeap<u32> = MaxHeap::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_order(O::default())
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, O::default())
    }

    /// Builds a heap from an unordered vector in O(n).
    ///
    /// The vector's buffer is reused; no reallocation happens.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let heap = MinHeap::from_vec(vec![4, 2, 7]);
    /// assert_eq!(heap.top(), Ok(&2));
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_with_order(items, O::default())
    }
}

impl<T, O> ArrayHeap<T, O>
where
    O: HeapOrder<T>,
{
    /// Creates an empty heap ordered by `order`.
    pub fn with_order(order: O) -> Self {
        Self::with_capacity_and_order(0, order)
    }

    /// Creates an empty heap ordered by `order` with room for `capacity` elements.
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }

    /// Builds a heap from an unordered vector in O(n), ordered by `order`.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::{ArrayHeap, FnOrder};
    ///
    /// let by_len = FnOrder::new(|a: &String, b: &String| a.len() < b.len());
    /// let words = vec!["a".to_string(), "abc".to_string(), "ab".to_string()];
    /// let heap = ArrayHeap::from_vec_with_order(words, by_len);
    /// assert_eq!(heap.top().map(String::as_str), Ok("abc"));
    /// ```
    pub fn from_vec_with_order(items: Vec<T>, order: O) -> Self {
        let mut heap = Self {
            data: items,
            order,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        };
        let steps = heapify(&mut heap.data, &heap.order);
        trace!("heapified {} elements with {} swaps", heap.data.len(), steps);
        #[cfg(feature = "metrics")]
        {
            heap.metrics.record_heapify(heap.data.len(), steps);
        }
        heap
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the allocated capacity of the backing vector.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Shrinks the backing vector to fit its contents.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns the ordering predicate.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Inserts `value`, restoring the heap property upwards.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from_vec(vec![3, 9, 4]);
    /// heap.push(10);
    /// assert_eq!(heap.top(), Ok(&10));
    /// assert_eq!(heap.len(), 4);
    /// ```
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        let steps = sift_up(&mut self.data, last, &self.order);
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_push();
            self.metrics.record_sift_up_steps(steps);
        }
        #[cfg(not(feature = "metrics"))]
        let _ = steps;
    }

    /// Returns the top element, or [`EmptyHeapError`] if the heap is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    /// use heapkit::error::EmptyHeapError;
    ///
    /// let mut heap = MaxHeap::new();
    /// assert_eq!(heap.top(), Err(EmptyHeapError));
    /// heap.push(1);
    /// assert_eq!(heap.top(), Ok(&1));
    /// ```
    pub fn top(&self) -> Result<&T, EmptyHeapError> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_top_call();
        match self.data.first() {
            Some(top) => Ok(top),
            None => {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_top_empty();
                Err(EmptyHeapError)
            },
        }
    }

    /// Returns the top element, or `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the top element.
    ///
    /// The root is swapped with the tail, the tail is removed and the new
    /// root is sifted down.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    /// use heapkit::error::EmptyHeapError;
    ///
    /// let mut heap = MaxHeap::from_vec(vec![2, 7]);
    /// assert_eq!(heap.pop(), Ok(7));
    /// assert_eq!(heap.pop(), Ok(2));
    /// assert_eq!(heap.pop(), Err(EmptyHeapError));
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyHeapError> {
        let Some(mut item) = self.data.pop() else {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_empty();
            return Err(EmptyHeapError);
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_pop();

        if !self.data.is_empty() {
            mem::swap(&mut item, &mut self.data[0]);
            let end = self.data.len();
            let steps = sift_down(&mut self.data, 0, end, &self.order);
            #[cfg(feature = "metrics")]
            self.metrics.record_sift_down_steps(steps);
            #[cfg(not(feature = "metrics"))]
            let _ = steps;
        }
        Ok(item)
    }

    /// Overwrites the top element with `value` and returns the old top.
    ///
    /// Does a single sift-down instead of a pop followed by a push. If the
    /// heap is empty, `value` is pushed and `None` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![1, 5, 8]);
    /// assert_eq!(heap.replace_top(6), Some(1));
    /// assert_eq!(heap.top(), Ok(&5));
    ///
    /// let mut empty: MinHeap<i32> = MinHeap::new();
    /// assert_eq!(empty.replace_top(3), None);
    /// assert_eq!(empty.top(), Ok(&3));
    /// ```
    pub fn replace_top(&mut self, value: T) -> Option<T> {
        if self.data.is_empty() {
            self.push(value);
            return None;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_replace_top();
        Some(self.replace_root(value))
    }

    /// Pushes `value` then pops the top, returning the popped element.
    ///
    /// When `value` would become the new top it is returned directly and the
    /// heap is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let mut heap = MaxHeap::from_vec(vec![4, 2]);
    /// assert_eq!(heap.push_pop(9), 9);
    /// assert_eq!(heap.push_pop(3), 4);
    /// assert_eq!(heap.into_sorted_vec(), vec![2, 3]);
    /// ```
    pub fn push_pop(&mut self, value: T) -> T {
        #[cfg(feature = "metrics")]
        self.metrics.record_push_pop();
        match self.data.first() {
            Some(top) if self.order.less(&value, top) => self.replace_root(value),
            _ => value,
        }
    }

    /// Removes all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Returns the elements in heap (array) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates the elements in heap (array) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the elements in heap (array) order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements sorted ascending under `O`.
    ///
    /// For a [`MaxHeap`] this is ascending natural order; for a [`MinHeap`]
    /// it is descending.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let heap = MaxHeap::from_vec(vec![3, 1, 2]);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            sift_down(&mut self.data, 0, end, &self.order);
        }
        self.data
    }

    /// Returns an iterator that pops elements top-first.
    ///
    /// Elements not consumed by the time the iterator is dropped are removed.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![10, 6, 8, 7]);
    /// let ascending: Vec<_> = heap.drain_sorted().collect();
    /// assert_eq!(ascending, vec![6, 7, 8, 10]);
    /// assert!(heap.is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { heap: self }
    }

    // Caller guarantees the heap is non-empty.
    fn replace_root(&mut self, value: T) -> T {
        let old = mem::replace(&mut self.data[0], value);
        let end = self.data.len();
        let steps = sift_down(&mut self.data, 0, end, &self.order);
        #[cfg(feature = "metrics")]
        self.metrics.record_sift_down_steps(steps);
        #[cfg(not(feature = "metrics"))]
        let _ = steps;
        old
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        mem::size_of::<Self>() + self.data.capacity() * mem::size_of::<T>()
    }

    /// Verifies the heap property over the whole array.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::ds::MaxHeap;
    ///
    /// let heap = MaxHeap::from_vec(vec![5, 3, 8, 1]);
    /// assert!(heap.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        T: fmt::Debug,
    {
        for i in 1..self.data.len() {
            let p = parent(i);
            if self.order.less(&self.data[p], &self.data[i]) {
                return Err(InvariantError::new(format!(
                    "heap property violated: parent [{}]={:?} is below child [{}]={:?}",
                    p, self.data[p], i, self.data[i]
                )));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Panics if the heap property does not hold (debug/test builds only).
    pub fn debug_validate_invariants(&self)
    where
        T: fmt::Debug,
    {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }
}

/// Metrics functionality (requires `metrics` feature).
#[cfg(feature = "metrics")]
impl<T, O> ArrayHeap<T, O>
where
    O: HeapOrder<T>,
{
    /// Returns a snapshot of heap metrics.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use heapkit::ds::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// heap.push(1);
    /// heap.pop().unwrap();
    /// heap.pop().unwrap_err();
    ///
    /// let snapshot = heap.metrics_snapshot();
    /// assert_eq!(snapshot.push_calls, 1);
    /// assert_eq!(snapshot.pop_calls, 2);
    /// assert_eq!(snapshot.pop_empty, 1);
    /// ```
    pub fn metrics_snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics.to_snapshot(self.data.len(), self.data.capacity())
    }

    /// Zeroes all counters.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<T, O> MetricsSnapshotProvider<HeapMetricsSnapshot> for ArrayHeap<T, O>
where
    O: HeapOrder<T>,
{
    fn snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T, O> Default for ArrayHeap<T, O>
where
    O: HeapOrder<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, O> fmt::Debug for ArrayHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeap")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, O> From<Vec<T>> for ArrayHeap<T, O>
where
    O: HeapOrder<T> + Default,
{
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T, O> From<ArrayHeap<T, O>> for Vec<T> {
    fn from(heap: ArrayHeap<T, O>) -> Self {
        heap.data
    }
}

impl<T, O> FromIterator<T> for ArrayHeap<T, O>
where
    O: HeapOrder<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, O> Extend<T> for ArrayHeap<T, O>
where
    O: HeapOrder<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, O> IntoIterator for ArrayHeap<T, O> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Iterates in heap (array) order; use
    /// [`into_sorted_vec`](ArrayHeap::into_sorted_vec) for sorted output.
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, O> IntoIterator for &'a ArrayHeap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Iterator returned by [`ArrayHeap::drain_sorted`].
pub struct DrainSorted<'a, T, O: HeapOrder<T>> {
    heap: &'a mut ArrayHeap<T, O>,
}

impl<T, O: HeapOrder<T>> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, O: HeapOrder<T>> ExactSizeIterator for DrainSorted<'_, T, O> {}

impl<T, O: HeapOrder<T>> FusedIterator for DrainSorted<'_, T, O> {}

impl<T, O: HeapOrder<T>> Drop for DrainSorted<'_, T, O> {
    fn drop(&mut self) {
        self.heap.data.clear();
    }
}
