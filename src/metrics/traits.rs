//! # Metrics Traits
//!
//! Recording, snapshotting and export are separate, small traits so heap
//! logic only ever writes counters.
//!
//! ```text
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │     HeapMetricsRecorder      │   │   HeapMetricsReadRecorder    │
//!   │ push/pop/replace/heapify/... │   │   top (via &self)            │
//!   └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                  └─────────────┬────────────────────┘
//!                                ▼
//!                      ┌──────────────────┐
//!                      │   HeapMetrics    │
//!                      └────────┬─────────┘
//!                               │ snapshot
//!                               ▼
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (monitoring)                 │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters written by mutating heap operations.
pub trait HeapMetricsRecorder {
    fn record_push(&mut self);
    fn record_pop(&mut self);
    fn record_pop_empty(&mut self);
    fn record_replace_top(&mut self);
    fn record_push_pop(&mut self);
    fn record_heapify(&mut self, len: usize, steps: usize);
    fn record_sift_up_steps(&mut self, steps: usize);
    fn record_sift_down_steps(&mut self, steps: usize);
    fn record_clear(&mut self);
}

/// Counters written by `&self` heap operations (uses interior mutability).
pub trait HeapMetricsReadRecorder {
    fn record_top_call(&self);
    fn record_top_empty(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
