#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeapMetricsSnapshot {
    pub push_calls: u64,
    pub pop_calls: u64,
    pub pop_empty: u64, // pop calls that found the heap empty
    pub replace_top_calls: u64,
    pub push_pop_calls: u64, // includes calls that returned the value untouched

    pub heapify_calls: u64,
    pub heapify_elements: u64,
    pub heapify_steps: u64, // swaps performed while heapifying

    pub sift_up_steps: u64,   // push swaps
    pub sift_down_steps: u64, // pop/replace_top/push_pop swaps

    pub clear_calls: u64,

    pub top_calls: u64,
    pub top_empty: u64,

    // gauges captured at snapshot time
    pub heap_len: usize,
    pub capacity: usize,
}

impl HeapMetricsSnapshot {
    /// Average swaps per push, non-empty pop, `replace_top` or `push_pop`,
    /// or `0.0` if none ran. Heapify swaps are tracked separately.
    pub fn avg_sift_steps(&self) -> f64 {
        let ops = self.push_calls
            + self.pop_calls.saturating_sub(self.pop_empty)
            + self.replace_top_calls
            + self.push_pop_calls;
        if ops == 0 {
            return 0.0;
        }
        (self.sift_up_steps + self.sift_down_steps) as f64 / ops as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avg_sift_steps_handles_zero_ops() {
        assert_eq!(HeapMetricsSnapshot::default().avg_sift_steps(), 0.0);
    }

    #[test]
    fn avg_sift_steps_ignores_empty_pops() {
        let snap = HeapMetricsSnapshot {
            push_calls: 2,
            pop_calls: 3,
            pop_empty: 1,
            sift_up_steps: 4,
            sift_down_steps: 2,
            ..Default::default()
        };
        assert_eq!(snap.avg_sift_steps(), 1.5);
    }

    #[test]
    fn avg_sift_steps_tolerates_inconsistent_pop_counts() {
        let snap = HeapMetricsSnapshot {
            pop_empty: 1,
            ..Default::default()
        };
        assert_eq!(snap.avg_sift_steps(), 0.0);
    }

    #[test]
    fn avg_sift_steps_excludes_heapify() {
        let snap = HeapMetricsSnapshot {
            heapify_calls: 1,
            heapify_steps: 6,
            push_calls: 1,
            push_pop_calls: 1,
            sift_down_steps: 2,
            ..Default::default()
        };
        assert_eq!(snap.avg_sift_steps(), 1.0);
    }
}
