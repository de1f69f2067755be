//! Benchmark for piped application against direct calls.
//!
//! Measures the overhead of `first_arg` and `curry_then_apply` wrapping
//! relative to calling the underlying operation directly.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pipe_operator::prelude::*;
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// Arithmetic Benchmarks
// =============================================================================

fn benchmark_arithmetic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("arithmetic");

    group.bench_function("direct", |bencher| {
        bencher.iter(|| {
            let value = black_box(7_i64);
            black_box(((value + 3) * 4).pow(2))
        });
    });

    group.bench_function("piped", |bencher| {
        bencher.iter(|| {
            let value = black_box(7_i64);
            black_box(value.pipe(add(3)).pipe(mul(4)).pipe(pow(2)))
        });
    });

    group.bench_function("pipe_macro", |bencher| {
        bencher.iter(|| {
            let value = black_box(7_i64);
            black_box(pipe!(value, add(3), mul(4), pow(2)))
        });
    });

    group.finish();
}

// =============================================================================
// Sequence Benchmarks
// =============================================================================

fn benchmark_sequence(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence");

    for size in [10, 100, 1000] {
        let values: Vec<u32> = (0..size).collect();
        let needle = size - 1;

        group.bench_with_input(BenchmarkId::new("direct_count", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.iter().filter(|value| **value == needle).count()));
        });

        group.bench_with_input(BenchmarkId::new("piped_count", size), &values, |bencher, values| {
            bencher.iter(|| black_box(values.pipe_ref(count_of(&needle))));
        });
    }

    group.finish();
}

// =============================================================================
// Factory Benchmarks
// =============================================================================

fn benchmark_factory(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("factory");
    let data: HashMap<&str, i32> = HashMap::from([("x", 1), ("y", 2)]);

    group.bench_function("direct_index", |bencher| {
        bencher.iter(|| black_box(data[black_box("x")]));
    });

    group.bench_function("item_getter", |bencher| {
        bencher.iter(|| black_box(*data.pipe_ref(item_getter(black_box("x")))));
    });

    group.bench_function("method_caller", |bencher| {
        bencher.iter(|| black_box("bench".pipe(method_caller(str::to_uppercase, ()))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_sequence,
    benchmark_factory
);
criterion_main!(benches);
