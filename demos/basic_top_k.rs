use heapkit::error::SelectionError;
use heapkit::select::{ScanStrategy, TopKSelector, top_k, top_k_with};

fn main() -> Result<(), SelectionError> {
    let nums = [1, 0, 6, 4, 10, 7, 3, 8];

    let mut heap = top_k(&nums, 4)?;
    let ascending: Vec<_> = heap.drain_sorted().collect();
    println!("top 4: {:?}", ascending);

    let heap = top_k_with(&nums, 4, ScanStrategy::Incremental)?;
    println!("threshold (incremental): {:?}", heap.top());

    let mut selector = TopKSelector::new(2)?;
    for x in nums {
        if selector.offer(x) {
            println!("kept {} (threshold now {:?})", x, selector.threshold());
        }
    }

    println!("k = 9: {}", top_k(&nums, 9).unwrap_err());
    Ok(())
}

// Expected output:
// top 4: [6, 7, 8, 10]
// threshold (incremental): Ok(6)
// kept 1 (threshold now None)
// kept 0 (threshold now Some(0))
// kept 6 (threshold now Some(1))
// kept 4 (threshold now Some(4))
// kept 10 (threshold now Some(6))
// kept 7 (threshold now Some(7))
// kept 8 (threshold now Some(8))
// k = 9: k (9) exceeds the number of elements (8)
