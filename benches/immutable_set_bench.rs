//! Benchmark for immutable set construction and membership.
//!
//! Compares building an `ImmutableSet` from a slice with collecting into a
//! `HashSet`, on both sides of the inline/indexed storage threshold, and
//! measures membership lookups on the result.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nullsafe_collections::view::{ImmutableSet, concat, set_of};
use std::collections::HashSet;
use std::hint::black_box;

const SIZES: [usize; 4] = [4, 8, 64, 1024];

fn source(size: usize) -> Vec<u64> {
    // Every value appears twice so construction has duplicates to collapse.
    (0..size as u64).chain(0..size as u64).collect()
}

// =============================================================================
// 1. Construction
// =============================================================================

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_construction");

    for size in SIZES {
        let elements = source(size);

        group.bench_with_input(
            BenchmarkId::new("set_of", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| black_box(set_of(Some(black_box(elements)))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std_hash_set", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| {
                    black_box(black_box(elements).iter().copied().collect::<HashSet<u64>>())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// 2. Membership
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_contains");

    for size in SIZES {
        let set: ImmutableSet<u64> = set_of(Some(&source(size)));
        let probes: Vec<u64> = (0..size as u64 * 2).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &probes, |bencher, probes| {
            bencher.iter(|| {
                probes
                    .iter()
                    .filter(|probe| set.contains(black_box(*probe)))
                    .count()
            });
        });
    }

    group.finish();
}

// =============================================================================
// 3. Concatenation
// =============================================================================

fn benchmark_concat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_concat");

    for size in SIZES {
        let base: ImmutableSet<u64> = set_of(Some(&source(size)));
        let appended: Vec<u64> = (size as u64 / 2..size as u64 * 3 / 2).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &appended, |bencher, appended| {
            bencher.iter(|| black_box(concat(Some(&base), Some(black_box(appended)))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_contains,
    benchmark_concat
);

criterion_main!(benches);
