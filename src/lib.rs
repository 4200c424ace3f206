//! heapkit: array-backed binary heaps and bounded top-K selection.
//!
//! - [`ds`]: [`ArrayHeap`](ds::ArrayHeap), generic over a
//!   [`HeapOrder`](ds::HeapOrder) predicate, with [`MaxHeap`](ds::MaxHeap)
//!   and [`MinHeap`](ds::MinHeap) aliases.
//! - [`select`]: top-K routines and the streaming
//!   [`TopKSelector`](select::TopKSelector).
//! - [`error`]: [`EmptyHeapError`](error::EmptyHeapError) and
//!   [`SelectionError`](error::SelectionError).

pub mod ds;
pub mod error;
pub mod select;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
