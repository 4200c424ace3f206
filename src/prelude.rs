pub use crate::ds::{
    ArrayHeap, FnOrder, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder, Reversed,
};
pub use crate::error::{EmptyHeapError, SelectionError};
pub use crate::select::{ScanStrategy, TopKSelector, bottom_k, top_k, top_k_by, top_k_with};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::HeapMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::MetricsSnapshotProvider;
