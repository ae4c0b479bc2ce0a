use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use ordkit::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random u64 Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random::<u64>()).collect();

    group.bench_function("quicksort", |b| {
        b.iter_batched(
            || input.clone(),
            |data| quicksort(black_box(&data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("mergesort", |b| {
        b.iter_batched(
            || input.clone(),
            |data| mergesort(black_box(&data)),
            BatchSize::SmallInput,
        )
    });

    // Std baselines
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_duplicate_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("Duplicate-Heavy Sort");
    group.sample_size(10);

    // Few distinct keys: stresses the equal-element paths of the partition
    // scan and the merge tie-break.
    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..16)).collect();

    group.bench_function("quicksort", |b| {
        b.iter_batched(
            || input.clone(),
            |data| quicksort(black_box(&data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("mergesort", |b| {
        b.iter_batched(
            || input.clone(),
            |data| mergesort(black_box(&data)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_random, bench_duplicate_heavy);
criterion_main!(benches);
