// benches/reduction.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use legendre::integer_math::prime_table::{PrimeTable, PRIMES_BELOW_1000};
use legendre::reduction::ReductionEngine;

fn bench_reduce(c: &mut Criterion) {
    let engine = ReductionEngine::new(&PRIMES_BELOW_1000);

    c.bench_function("reduce 600/997", |b| {
        b.iter(|| engine.reduce(black_box(600), black_box(997)))
    });

    c.bench_function("reduce every top mod 997", |b| {
        b.iter(|| {
            (1..997)
                .filter(|&top| engine.reduce(black_box(top), 997).map(|e| e.is_residue).unwrap_or(false))
                .count()
        })
    });
}

fn bench_sieve(c: &mut Criterion) {
    c.bench_function("sieve below 1000", |b| b.iter(|| PrimeTable::below(black_box(1000))));
}

criterion_group!(benches, bench_reduce, bench_sieve);
criterion_main!(benches);
