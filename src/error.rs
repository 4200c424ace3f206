//! Error types for the heapkit library.
//!
//! ## Key Components
//!
//! - [`EmptyHeapError`]: Returned by [`top`](crate::ds::ArrayHeap::top) and
//!   [`pop`](crate::ds::ArrayHeap::pop) when the heap holds no elements.
//! - [`SelectionError`]: Returned by the top-K routines when the requested
//!   count is zero or larger than the input.
//! - [`InvariantError`]: Returned when the heap property is violated
//!   (`check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::ds::MaxHeap;
//! use heapkit::error::{EmptyHeapError, SelectionError};
//! use heapkit::select::top_k;
//!
//! let mut heap: MaxHeap<i32> = MaxHeap::new();
//! assert_eq!(heap.pop(), Err(EmptyHeapError));
//!
//! let err = top_k(&[1, 2, 3], 5).unwrap_err();
//! assert_eq!(err, SelectionError::KExceedsLen { k: 5, len: 3 });
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// EmptyHeapError
// ---------------------------------------------------------------------------

/// Error returned when an operation needs an element but the heap is empty.
///
/// Accessing or removing the top of an empty heap is a caller contract
/// violation; it is reported instead of returning a sentinel value.
///
/// # Example
///
/// ```
/// use heapkit::ds::MaxHeap;
///
/// let heap: MaxHeap<u32> = MaxHeap::new();
/// let err = heap.top().unwrap_err();
/// assert_eq!(err.to_string(), "heap is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("heap is empty")
    }
}

impl std::error::Error for EmptyHeapError {}

// ---------------------------------------------------------------------------
// SelectionError
// ---------------------------------------------------------------------------

/// Error returned when a top-K request has an invalid `k`.
///
/// Valid requests satisfy `0 < k <= len`. The streaming
/// [`TopKSelector`](crate::select::TopKSelector) does not know the input
/// length up front and only rejects [`ZeroK`](Self::ZeroK).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionError {
    /// `k` was zero.
    ZeroK,
    /// `k` was larger than the number of available elements.
    KExceedsLen { k: usize, len: usize },
}

impl SelectionError {
    /// Checks `0 < k <= len`.
    ///
    /// # Example
    ///
    /// ```
    /// use heapkit::error::SelectionError;
    ///
    /// assert!(SelectionError::check(3, 3).is_ok());
    /// assert_eq!(SelectionError::check(0, 3), Err(SelectionError::ZeroK));
    /// ```
    pub fn check(k: usize, len: usize) -> Result<(), SelectionError> {
        if k == 0 {
            Err(SelectionError::ZeroK)
        } else if k > len {
            Err(SelectionError::KExceedsLen { k, len })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::ZeroK => f.write_str("k must be > 0"),
            SelectionError::KExceedsLen { k, len } => {
                write!(f, "k ({k}) exceeds the number of elements ({len})")
            },
        }
    }
}

impl std::error::Error for SelectionError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when the heap property does not hold.
///
/// Produced by [`ArrayHeap::check_invariants`](crate::ds::ArrayHeap::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
