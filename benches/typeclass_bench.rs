//! Benchmark for the type class instances of Maybe and Outcome.
//!
//! The trait methods delegate to the inherent combinators; these benchmarks
//! confirm the indirection is free.

use criterion::{Criterion, criterion_group, criterion_main};
use maybe_outcome::carrier::{Maybe, Outcome};
use maybe_outcome::typeclass::{Applicative, Functor, Monad};
use std::hint::black_box;

fn benchmark_functor(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("functor");

    group.bench_function("fmap", |bencher| {
        bencher.iter(|| black_box(Maybe::some(black_box(21)).fmap(|n| n * 2)));
    });

    group.bench_function("inherent_map", |bencher| {
        bencher.iter(|| black_box(Maybe::some(black_box(21)).map(|n| n * 2)));
    });

    group.finish();
}

fn benchmark_applicative_monad(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("applicative_monad");

    group.bench_function("map2_outcome", |bencher| {
        bencher.iter(|| {
            let left: Outcome<i32, String> = Outcome::success(black_box(1));
            let right: Outcome<i32, String> = Outcome::success(black_box(2));
            black_box(left.map2(right, |a, b| a + b))
        });
    });

    group.bench_function("flat_map_maybe", |bencher| {
        bencher.iter(|| {
            black_box(
                Maybe::some(black_box(10))
                    .flat_map(|n| Maybe::some(n + 1))
                    .flat_map(|n| if n > 5 { Maybe::some(n) } else { Maybe::empty() }),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_functor, benchmark_applicative_monad);
criterion_main!(benches);
