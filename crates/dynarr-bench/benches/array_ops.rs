//! Criterion micro-benchmarks for growth, shifting, bulk append and removal.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dynarr::DynamicArray;
use dynarr_bench::{apply, filled, mixed_workload};
use dynarr_test_utils::fixtures::letters;

/// Benchmark: 10K `push_back` calls from capacity 1 (amortised doubling).
fn bench_push_back_10k(c: &mut Criterion) {
    c.bench_function("push_back_10k", |b| {
        b.iter(|| {
            let array = filled(10_000).unwrap();
            black_box(array.capacity());
        });
    });
}

/// Benchmark: 1K `push_front` calls, each shifting the whole array.
fn bench_push_front_1k(c: &mut Criterion) {
    c.bench_function("push_front_1k", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new_default().unwrap();
            for i in 0..1_000u64 {
                array.push_front(i).unwrap();
            }
            black_box(array.length());
        });
    });
}

/// Benchmark: append a 4K-element slice onto a 17-letter array.
fn bench_append_4k(c: &mut Criterion) {
    let src = vec![b'x'; 4_096];
    c.bench_function("append_4k", |b| {
        b.iter_batched(
            || letters(17),
            |mut array| {
                array.append(black_box(&src)).unwrap();
                black_box(array.capacity());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: drain 10K elements from the front in runs of 8, lazy vs eager.
fn bench_remove_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_front_runs_10k");
    group.bench_function("lazy", |b| {
        b.iter_batched(
            || filled(10_000).unwrap(),
            |mut array| {
                while array.length() >= 8 {
                    array.remove_n(0, 8).unwrap();
                }
                black_box(array.capacity());
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("eager", |b| {
        b.iter_batched(
            || filled(10_000).unwrap(),
            |mut array| {
                while array.length() >= 8 {
                    array.remove_n_and_trim(0, 8).unwrap();
                }
                black_box(array.capacity());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

/// Benchmark: seeded mix of pushes, inserts and removals on a 1K array.
fn bench_mixed_workload(c: &mut Criterion) {
    let ops = mixed_workload(0xD1A, 5_000);
    c.bench_function("mixed_workload_5k", |b| {
        b.iter_batched(
            || filled(1_000).unwrap(),
            |mut array| {
                apply(&mut array, &ops).unwrap();
                black_box(array.length());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_push_back_10k,
    bench_push_front_1k,
    bench_append_4k,
    bench_remove_policies,
    bench_mixed_workload
);
criterion_main!(benches);
