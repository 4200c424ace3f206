//! Walkthrough of the heap and top-K routines on fixed sample data.
//!
//! Run with: cargo run --bin heap_demo
//! Custom top-K: cargo run --bin heap_demo -- 3 8 1 9 4 7
//! Verbose: RUST_LOG=debug cargo run --bin heap_demo

use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::Display;

use heapkit::ds::MaxHeap;
use heapkit::error::SelectionError;
use heapkit::select::{ScanStrategy, top_k, top_k_with};
use log::{debug, error, info};

const RAW_DATA: [i32; 8] = [3, 1, 4, 1, 5, 9, 2, 6];
const TOP_K_SAMPLE: [i32; 8] = [1, 0, 6, 4, 10, 7, 3, 8];

fn join<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn max_heap_walkthrough() -> Result<(), Box<dyn Error>> {
    println!("=== 1. MaxHeap ===");
    let mut heap = MaxHeap::from_vec(RAW_DATA.to_vec());
    println!("top after heapify: {} (expected: 9)", heap.top()?);

    heap.push(10);
    println!("top after push(10): {} (expected: 10)", heap.top()?);

    let mut drained = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        drained.push(*heap.top()?);
        heap.pop()?;
    }
    println!("drain (heap sort order): {}", join(drained));
    Ok(())
}

fn std_priority_queue() {
    println!("\n=== 2. std::collections::BinaryHeap ===");
    let std_heap: BinaryHeap<i32> = RAW_DATA.iter().copied().collect();
    if let Some(top) = std_heap.peek() {
        println!("std top: {}", top);
    }
}

fn top_k_walkthrough() -> Result<(), Box<dyn Error>> {
    println!("\n=== 3. Top-K ===");
    let k = 3;
    let mut heap = top_k_with(&RAW_DATA, k, ScanStrategy::Incremental)?;
    println!(
        "largest {} of raw data: {}",
        k,
        join(heap.drain_sorted())
    );

    let k = 4;
    let mut heap = top_k(&TOP_K_SAMPLE, k)?;
    println!(
        "largest {} of {:?}: {}",
        k,
        TOP_K_SAMPLE,
        join(heap.drain_sorted())
    );
    Ok(())
}

/// Parses K as a signed integer so that negative input reports an invalid K
/// rather than a parse failure.
fn parse_k(arg: &str) -> Result<usize, Box<dyn Error>> {
    let k: i64 = arg.parse()?;
    if k <= 0 {
        return Err(SelectionError::ZeroK.into());
    }
    Ok(usize::try_from(k)?)
}

fn custom_top_k(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (k, values) = args.split_first().ok_or("missing K")?;
    let k = parse_k(k)?;
    let values = values
        .iter()
        .map(|v| v.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()?;
    debug!("custom top-k: k={} over {} values", k, values.len());

    let mut heap = top_k(&values, k)?;
    println!("largest {} of {:?}: {}", k, values, join(heap.drain_sorted()));
    Ok(())
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    if !args.is_empty() {
        return custom_top_k(args);
    }
    max_heap_walkthrough()?;
    std_priority_queue();
    top_k_walkthrough()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    info!("heap_demo starting");
    if let Err(err) = run(&args) {
        error!("heap_demo failed: {}", err);
        eprintln!("Error: {}", err);
    }
}
