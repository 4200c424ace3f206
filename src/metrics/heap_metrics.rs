use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::{HeapMetricsReadRecorder, HeapMetricsRecorder};

#[derive(Debug, Default, Clone)]
pub struct HeapMetrics {
    pub push_calls: u64,
    pub pop_calls: u64,
    pub pop_empty: u64,
    pub replace_top_calls: u64,
    pub push_pop_calls: u64,
    pub heapify_calls: u64,
    pub heapify_elements: u64,
    pub heapify_steps: u64,
    pub sift_up_steps: u64,
    pub sift_down_steps: u64,
    pub clear_calls: u64,
    pub top_calls: MetricsCell,
    pub top_empty: MetricsCell,
}

impl HeapMetrics {
    /// Copies the counters into a snapshot, adding gauges captured by the caller.
    pub fn to_snapshot(&self, len: usize, capacity: usize) -> HeapMetricsSnapshot {
        HeapMetricsSnapshot {
            push_calls: self.push_calls,
            pop_calls: self.pop_calls,
            pop_empty: self.pop_empty,
            replace_top_calls: self.replace_top_calls,
            push_pop_calls: self.push_pop_calls,
            heapify_calls: self.heapify_calls,
            heapify_elements: self.heapify_elements,
            heapify_steps: self.heapify_steps,
            sift_up_steps: self.sift_up_steps,
            sift_down_steps: self.sift_down_steps,
            clear_calls: self.clear_calls,
            top_calls: self.top_calls.get(),
            top_empty: self.top_empty.get(),
            heap_len: len,
            capacity,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl HeapMetricsRecorder for HeapMetrics {
    fn record_push(&mut self) {
        self.push_calls += 1;
    }

    fn record_pop(&mut self) {
        self.pop_calls += 1;
    }

    fn record_pop_empty(&mut self) {
        self.pop_calls += 1;
        self.pop_empty += 1;
    }

    fn record_replace_top(&mut self) {
        self.replace_top_calls += 1;
    }

    fn record_push_pop(&mut self) {
        self.push_pop_calls += 1;
    }

    fn record_heapify(&mut self, len: usize, steps: usize) {
        self.heapify_calls += 1;
        self.heapify_elements += len as u64;
        self.heapify_steps += steps as u64;
    }

    fn record_sift_up_steps(&mut self, steps: usize) {
        self.sift_up_steps += steps as u64;
    }

    fn record_sift_down_steps(&mut self, steps: usize) {
        self.sift_down_steps += steps as u64;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl HeapMetricsReadRecorder for HeapMetrics {
    fn record_top_call(&self) {
        self.top_calls.incr();
    }

    fn record_top_empty(&self) {
        self.top_empty.incr();
    }
}
