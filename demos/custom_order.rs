use heapkit::ds::{ArrayHeap, FnOrder, MinHeap};
use heapkit::select::top_k_by;

#[derive(Debug, Clone)]
struct Job {
    name: &'static str,
    deadline: u32,
}

fn main() {
    // Earliest deadline on top.
    let by_deadline = FnOrder::new(|a: &Job, b: &Job| a.deadline > b.deadline);
    let mut jobs = ArrayHeap::with_order(by_deadline);
    jobs.push(Job { name: "report", deadline: 30 });
    jobs.push(Job { name: "deploy", deadline: 5 });
    jobs.push(Job { name: "review", deadline: 12 });

    while let Ok(job) = jobs.pop() {
        println!("{} (due {})", job.name, job.deadline);
    }

    let words = ["heap", "sift", "heapify", "selection", "top"];
    let longest = top_k_by(&words, 2, |a: &&str, b: &&str| a.len() < b.len());
    println!("two longest: {:?}", longest);

    let mut min: MinHeap<char> = "heap".chars().collect();
    println!("smallest char: {:?}", min.pop());
}

// Expected output:
// deploy (due 5)
// review (due 12)
// report (due 30)
// two longest: Ok(["heapify", "selection"])
// smallest char: Ok('a')
