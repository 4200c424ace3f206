//! Operation counters for heaps (requires the `metrics` feature).
//!
//! Recording is split from consumption the same way for every counter:
//! [`traits::HeapMetricsRecorder`] writes, [`traits::MetricsSnapshotProvider`]
//! reads a [`snapshot::HeapMetricsSnapshot`], and
//! [`traits::MetricsExporter`] publishes it.

pub mod cell;
pub mod exporter;
pub mod heap_metrics;
pub mod snapshot;
pub mod traits;
