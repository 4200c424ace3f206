#![no_main]

use heapkit::ds::MaxHeap;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on MaxHeap
//
// Tests random sequences of push, pop, top, replace_top, push_pop and clear,
// checking the heap property and the length after every step.
fuzz_target!(|data: &[u8]| {
    let mut heap: MaxHeap<u8> = MaxHeap::new();
    let mut expected_len = 0usize;

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 6;
        let value = pair[1];

        match op {
            0 => {
                heap.push(value);
                expected_len += 1;
                assert!(heap.top().is_ok_and(|&top| top >= value));
            },
            1 => {
                let before = heap.peek().copied();
                match heap.pop() {
                    Ok(v) => {
                        assert_eq!(Some(v), before);
                        expected_len -= 1;
                        if let Some(&next) = heap.peek() {
                            assert!(next <= v);
                        }
                    },
                    Err(_) => assert_eq!(expected_len, 0),
                }
            },
            2 => {
                // top (read-only)
                assert_eq!(heap.top().is_err(), heap.is_empty());
            },
            3 => {
                if heap.replace_top(value).is_none() {
                    expected_len += 1;
                }
            },
            4 => {
                let out = heap.push_pop(value);
                assert!(heap.peek().is_none_or(|&top| top <= out));
            },
            5 => {
                heap.clear();
                expected_len = 0;
                assert!(heap.is_empty());
            },
            _ => unreachable!(),
        }

        assert_eq!(heap.len(), expected_len);
        assert!(heap.check_invariants().is_ok());
    }
});
