use coinbnb_core::branch_and_bound::{BranchAndBound, ExactMatchStrategy, MoreSelectionStrategy};
use coinbnb_core::SearchConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Descending "wallet-like" amounts with a fixed seed
fn wallet_values(count: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (0..count as i64)
        .map(|i| 10_000 + (i * 7_919) % 250_000)
        .collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}

fn engine(count: usize) -> BranchAndBound {
    let config = SearchConfig {
        seed: Some(42),
        ..SearchConfig::default()
    };
    BranchAndBound::with_config(wallet_values(count), config).unwrap()
}

fn bench_exact_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_match");

    for count in [16usize, 24, 32] {
        let engine = engine(count);
        // Sum of every third value is always reachable
        let target: i64 = engine.values().iter().step_by(3).sum();

        group.bench_with_input(BenchmarkId::from_parameter(count), &engine, |b, engine| {
            b.iter(|| {
                let mut strategy = ExactMatchStrategy::new(engine.values(), target);
                black_box(engine.try_find_match(&mut strategy, None))
            })
        });
    }

    group.finish();
}

fn bench_more_selection(c: &mut Criterion) {
    let engine = engine(20);
    let target = engine.total() / 2 + 1;

    c.bench_function("more_selection_20", |b| {
        b.iter(|| {
            let mut strategy = MoreSelectionStrategy::new(engine.values(), target, 5_000);
            black_box(engine.search(&mut strategy, None));
            black_box(strategy.best_sum())
        })
    });
}

criterion_group!(benches, bench_exact_match, bench_more_selection);
criterion_main!(benches);
