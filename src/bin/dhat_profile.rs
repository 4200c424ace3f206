//! DHAT heap profiler for heapkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use heapkit::ds::{MaxHeap, MinHeap};
use heapkit::select::{ScanStrategy, TopKSelector, top_k_with};

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

fn random_values(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = XorShift64::new(seed);
    (0..len).map(|_| rng.next_u64()).collect()
}

/// Heapify in place, then drain everything.
fn heapify_and_drain(values: Vec<u64>) -> u64 {
    let mut heap = MaxHeap::from_vec(values);
    let mut checksum = 0u64;
    while let Ok(v) = heap.pop() {
        checksum = checksum.wrapping_add(v);
    }
    checksum
}

/// Grow from empty with pushes, interleaving pops.
fn push_pop_churn(operations: usize, seed: u64) -> usize {
    let mut rng = XorShift64::new(seed);
    let mut heap: MinHeap<u64> = MinHeap::new();
    for _ in 0..operations {
        let v = rng.next_u64();
        if v % 4 == 0 {
            let _ = heap.pop();
        } else {
            heap.push(v);
        }
    }
    heap.len()
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    const LEN: usize = 100_000;
    const K: usize = 100;

    println!("=== heapkit DHAT profile ===");

    let values = random_values(LEN, 42);
    println!("heapify_and_drain checksum: {}", heapify_and_drain(values.clone()));
    println!("push_pop_churn final len: {}", push_pop_churn(LEN, 7));

    for strategy in [ScanStrategy::SeedThenScan, ScanStrategy::Incremental] {
        match top_k_with(&values, K, strategy) {
            Ok(heap) => println!("top_k {:?}: kept {}", strategy, heap.len()),
            Err(err) => eprintln!("top_k {:?} failed: {}", strategy, err),
        }
    }

    match TopKSelector::new(K) {
        Ok(mut selector) => {
            selector.extend(values.iter().copied());
            println!("streaming selector kept {}", selector.len());
        },
        Err(err) => eprintln!("selector failed: {}", err),
    }

    println!("\nProfile written to dhat-heap.json");
}
