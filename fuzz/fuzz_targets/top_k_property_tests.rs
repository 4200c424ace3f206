#![no_main]

use heapkit::error::SelectionError;
use heapkit::select::{ScanStrategy, TopKSelector, top_k_with};
use libfuzzer_sys::fuzz_target;

// Fuzz property-based tests for top-K selection
//
// The first byte picks k; the rest is the input sequence.
fuzz_target!(|data: &[u8]| {
    let Some((&k_byte, values)) = data.split_first() else {
        return;
    };
    let k = usize::from(k_byte);

    let mut sorted = values.to_vec();
    sorted.sort();

    for strategy in [ScanStrategy::SeedThenScan, ScanStrategy::Incremental] {
        match top_k_with(values, k, strategy) {
            Ok(mut heap) => {
                assert!(k > 0 && k <= values.len());
                let got: Vec<_> = heap.drain_sorted().collect();
                assert_eq!(got, sorted[sorted.len() - k..]);
            },
            Err(SelectionError::ZeroK) => assert_eq!(k, 0),
            Err(SelectionError::KExceedsLen { k: bad, len }) => {
                assert_eq!(bad, k);
                assert_eq!(len, values.len());
                assert!(k > len);
            },
        }
    }

    if let Ok(mut selector) = TopKSelector::new(k) {
        selector.extend(values.iter().copied());
        let keep = k.min(values.len());
        assert_eq!(selector.len(), keep);
        assert_eq!(selector.into_pop_order_vec(), sorted[sorted.len() - keep..]);
    }
});
