use heapkit::ds::MaxHeap;

fn main() {
    let mut heap = MaxHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    println!("top: {:?}", heap.top());

    heap.push(10);
    println!("top after push(10): {:?}", heap.top());

    let drained: Vec<_> = heap.drain_sorted().collect();
    println!("drained: {:?}", drained);
    println!("pop on empty: {:?}", heap.pop());
}

// Expected output:
// top: Ok(9)
// top after push(10): Ok(10)
// drained: [10, 9, 6, 5, 4, 3, 2, 1, 1]
// pop on empty: Err(EmptyHeapError)
