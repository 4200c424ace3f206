// ==============================================
// HEAP METRICS (integration, `metrics` feature)
// ==============================================

#![cfg(feature = "metrics")]

use heapkit::ds::MaxHeap;
use heapkit::metrics::exporter::PrometheusTextExporter;
use heapkit::metrics::snapshot::HeapMetricsSnapshot;
use heapkit::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
use heapkit::select::top_k;

#[test]
fn snapshot_provider_matches_inherent_snapshot() {
    let mut heap = MaxHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    heap.push(10);
    heap.pop().unwrap();

    let provided: HeapMetricsSnapshot = MetricsSnapshotProvider::snapshot(&heap);
    assert_eq!(provided, heap.metrics_snapshot());
    assert_eq!(provided.push_calls, 1);
    assert_eq!(provided.pop_calls, 1);
    assert_eq!(provided.heap_len, 8);
}

#[test]
fn top_k_result_carries_replacement_counts() {
    let heap = top_k(&[1, 0, 6, 4, 10, 7, 3, 8], 4).unwrap();
    let snap = heap.metrics_snapshot();
    assert_eq!(snap.heapify_calls, 1);
    assert_eq!(snap.heapify_elements, 4);
    // 10, 7 and 8 displace the root; 3 does not.
    assert_eq!(snap.replace_top_calls, 3);
}

#[test]
fn exporter_emits_snapshot() {
    let mut heap: MaxHeap<u32> = MaxHeap::new();
    heap.push(1);
    let exporter = PrometheusTextExporter::new("demo", Vec::new());
    exporter.export(&heap.metrics_snapshot());

    let text = String::from_utf8(exporter.into_inner()).unwrap();
    assert!(text.contains("demo_push_calls_total 1"));
    assert!(text.contains("demo_len 1"));
}
