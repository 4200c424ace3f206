use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use heapkit::select::{ScanStrategy, TopKSelector, top_k_with};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LEN: usize = 100_000;

fn random_values(len: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.r#gen()).collect()
}

fn bench_strategies(c: &mut Criterion) {
    let values = random_values(LEN, 42);
    let mut group = c.benchmark_group("top_k_100k");
    for k in [10usize, 100, 1_000] {
        for strategy in [ScanStrategy::SeedThenScan, ScanStrategy::Incremental] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), k),
                &k,
                |b, &k| b.iter(|| top_k_with(std::hint::black_box(&values), k, strategy)),
            );
        }

        group.bench_with_input(BenchmarkId::new("full_sort", k), &k, |b, &k| {
            b.iter(|| {
                let mut sorted = values.clone();
                sorted.sort_unstable();
                std::hint::black_box(sorted.split_off(sorted.len() - k))
            })
        });
    }
    group.finish();
}

fn bench_streaming_selector(c: &mut Criterion) {
    let values = random_values(LEN, 9);
    c.bench_function("selector_offer_100k_k100", |b| {
        b.iter(|| {
            let mut selector = TopKSelector::new(100).unwrap();
            selector.extend(values.iter().copied());
            std::hint::black_box(selector.len())
        })
    });
}

criterion_group!(benches, bench_strategies, bench_streaming_selector);
criterion_main!(benches);
