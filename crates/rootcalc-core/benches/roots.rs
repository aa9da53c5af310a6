//! Criterion benchmarks for the Newton root algorithms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use num_traits::One;

use rootcalc_core::cbrt::icbrt;
use rootcalc_core::log2::ilog2;
use rootcalc_core::sqrt::isqrt;

/// `3^k`-style operand with roughly `bits` bits and no special structure.
fn operand(bits: u64) -> BigInt {
    let mut n = BigInt::one();
    while n.bits() < bits {
        n = n * 3u32 + 1u32;
    }
    n
}

fn bench_roots(c: &mut Criterion) {
    let sizes: Vec<u64> = vec![64, 1_024, 16_384, 131_072];

    let mut group = c.benchmark_group("BitLength");
    for &bits in &sizes {
        let n = operand(bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &n, |b, n| {
            b.iter(|| ilog2(n));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("NewtonSqrt");
    for &bits in &sizes {
        let n = operand(bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &n, |b, n| {
            b.iter(|| isqrt(n));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("NewtonCbrt");
    for &bits in &sizes {
        let n = operand(bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &n, |b, n| {
            b.iter(|| icbrt(n));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_roots);
criterion_main!(benches);
