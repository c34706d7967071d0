//! Benchmark for TreeMap vs standard BTreeMap.
//!
//! Compares the red-black TreeMap against Rust's standard BTreeMap for
//! insertion, lookup, removal, iteration and merge.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rbcontainers::map::TreeMap;
use std::collections::BTreeMap;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Spreads `0..size` so inserts do not arrive in sorted order.
fn scrambled(size: i32) -> impl Iterator<Item = i32> {
    (0..size).map(move |index| (index * 7919) % size)
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_insert");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = TreeMap::new();
                for key in scrambled(size) {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for key in scrambled(size) {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_get");

    for size in SIZES {
        let tree_map: TreeMap<i32, i32> = (0..size).map(|key| (key, key * 2)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|key| (key, key * 2)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0_i64;
                for key in 0..size {
                    if let Some(&value) = tree_map.get(&black_box(key)) {
                        sum += i64::from(value);
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0_i64;
                for key in 0..size {
                    if let Some(&value) = standard_map.get(&black_box(key)) {
                        sum += i64::from(value);
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_remove");

    for size in SIZES {
        let tree_map: TreeMap<i32, i32> = (0..size).map(|key| (key, key)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || tree_map.clone(),
                |mut map| {
                    for key in scrambled(size) {
                        map.erase(&black_box(key));
                    }
                    black_box(map)
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || standard_map.clone(),
                |mut map| {
                    for key in scrambled(size) {
                        map.remove(&black_box(key));
                    }
                    black_box(map)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// iter Benchmark
// =============================================================================

fn benchmark_iter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_iter");

    for size in SIZES {
        let tree_map: TreeMap<i32, i32> = (0..size).map(|key| (key, key)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, _| {
            bencher.iter(|| black_box(tree_map.values().map(|&value| i64::from(value)).sum::<i64>()));
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, _| {
            bencher.iter(|| black_box(standard_map.values().map(|&value| i64::from(value)).sum::<i64>()));
        });
    }

    group.finish();
}

// =============================================================================
// merge Benchmark
// =============================================================================

fn benchmark_merge(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_merge");

    for size in SIZES {
        let evens: TreeMap<i32, i32> = (0..size).map(|key| (key * 2, key)).collect();
        let odds: TreeMap<i32, i32> = (0..size).map(|key| (key * 2 + 1, key)).collect();
        let standard_evens: BTreeMap<i32, i32> = (0..size).map(|key| (key * 2, key)).collect();
        let standard_odds: BTreeMap<i32, i32> = (0..size).map(|key| (key * 2 + 1, key)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, _| {
            bencher.iter_batched(
                || (evens.clone(), odds.clone()),
                |(mut receiver, mut source)| {
                    receiver.merge(&mut source);
                    black_box(receiver)
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, _| {
            bencher.iter_batched(
                || (standard_evens.clone(), standard_odds.clone()),
                |(mut receiver, mut source)| {
                    receiver.append(&mut source);
                    black_box(receiver)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_get,
    benchmark_remove,
    benchmark_iter,
    benchmark_merge
);
criterion_main!(benches);
