//! # Register Benchmarks
//!
//! Measures Register field access and XOR, and Arena push/get/view.
//!
//! Run: `cargo bench --bench register_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use msc_core::prelude::*;

/// Benchmark Register construction and field views
fn bench_register_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_fields");

    group.bench_function("from_raw", |b| {
        b.iter(|| black_box(Register::from_raw(black_box(0b1011_0010))))
    });

    group.bench_function("from_fields", |b| {
        b.iter(|| black_box(Register::from_fields(black_box(1), black_box(3), black_box(2))))
    });

    let r = Register::from_raw(0b1011_0010);
    group.bench_function("decompose", |b| {
        b.iter(|| {
            let r = black_box(r);
            black_box((r.carry(), r.variance(), r.tag()))
        })
    });

    group.finish();
}

/// Benchmark XOR chains
fn bench_register_xor(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_xor");

    for size in [16, 256, 4096] {
        let values: Vec<Register> = (0..size).map(|i| Register::from_int(i as i64)).collect();

        group.bench_with_input(
            BenchmarkId::new("xor_chain", size),
            &values,
            |b, v| {
                b.iter(|| {
                    let mut result = Register::ZERO;
                    for val in v.iter() {
                        result = result.xor(val);
                    }
                    black_box(result)
                })
            }
        );
    }

    group.finish();
}

/// Benchmark Arena ring operations
fn bench_arena(c: &mut Criterion) {
    let mut group = c.benchmark_group("arena");

    for capacity in [8usize, 64, 1024] {
        group.bench_with_input(
            BenchmarkId::new("push_wrapping", capacity),
            &capacity,
            |b, &cap| {
                let mut arena = Arena::new(cap).unwrap();
                let r = Register::from_raw(0x5A);
                b.iter(|| arena.push(black_box(r)))
            }
        );

        let full = Arena::seeded(capacity, (0..capacity * 2).map(|i| Register::from_int(i as i64)))
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("get", capacity),
            &full,
            |b, arena| b.iter(|| black_box(arena.get(black_box(1000))))
        );

        group.bench_with_input(
            BenchmarkId::new("view", capacity),
            &full,
            |b, arena| b.iter(|| black_box(arena.view()))
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_register_fields,
    bench_register_xor,
    bench_arena,
);

criterion_main!(benches);
