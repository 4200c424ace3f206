pub mod array_heap;
pub mod order;

pub use array_heap::{ArrayHeap, DrainSorted, MaxHeap, MinHeap, heap_sort, heap_sort_by_order};
pub use order::{FnOrder, HeapOrder, MaxOrder, MinOrder, Reversed};
