//! # Operator Benchmarks
//!
//! Measures a single operator application and feedback propagation.
//!
//! Run: `cargo bench --bench operator_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use msc_core::prelude::*;

fn seeded(capacity: usize) -> Arena {
    Arena::seeded(capacity, [Register::from_raw(0b1011_0010), Register::from_raw(0b0101_1001)])
        .unwrap()
}

/// Benchmark one application per regime
fn bench_operator_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("operator_apply");

    for (label, op) in [
        ("covariant", Operator::covariant()),
        ("contravariant", Operator::contravariant()),
        ("phase_7", Operator::new(7)),
    ] {
        group.bench_function(label, |b| {
            let mut arena = seeded(8);
            b.iter(|| black_box(op.apply(black_box(Register::from_raw(0b1011_0010)), &mut arena)))
        });
    }

    group.bench_function("trace", |b| {
        let mut arena = seeded(8);
        let op = Operator::covariant();
        b.iter(|| black_box(op.trace(black_box(Register::from_raw(0b1011_0010)), &mut arena)))
    });

    group.finish();
}

/// Benchmark feedback propagation over increasing step counts
fn bench_propagate(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate");

    for steps in [16usize, 256, 4096] {
        group.bench_with_input(
            BenchmarkId::new("covariant", steps),
            &steps,
            |b, &n| {
                b.iter(|| {
                    let mut arena = seeded(64);
                    black_box(propagate(
                        Register::from_raw(0b1011_0010),
                        &Operator::covariant(),
                        &mut arena,
                        n,
                    ))
                })
            }
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_operator_apply,
    bench_propagate,
);

criterion_main!(benches);
