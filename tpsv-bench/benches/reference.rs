// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![expect(clippy::unwrap_used, reason = "OK in a bench.")]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tpsv_bench::{Complex, Reference, Scalar, Tpsv, Workspace};

fn solve<T: Scalar>(c: &mut Criterion, n: usize, mode: (char, char, char)) {
    let (uplo, trans, diag) = mode;
    c.bench_function(
        &format!("{} {uplo}{trans}{diag} n={n}", T::ROUTINE),
        |b| {
            b.iter_batched_ref(
                || {
                    let mut ws = Workspace::<T>::allocate(n, 1).unwrap();
                    ws.fill(n, &mut test_fixture::seeded_rng());
                    ws
                },
                |ws| {
                    let (ap, x) = ws.operands(n);
                    Tpsv::<T>::tpsv(&mut Reference, uplo, trans, diag, n, ap, x, 1);
                    black_box(x);
                },
                BatchSize::LargeInput,
            );
        },
    );
}

fn benchmark_small(c: &mut Criterion) {
    for mode in [('U', 'N', 'U'), ('L', 'T', 'N')] {
        solve::<f64>(c, 64, mode);
        solve::<Complex<f64>>(c, 64, mode);
    }
}

fn benchmark_large(c: &mut Criterion) {
    for mode in [('U', 'N', 'U'), ('L', 'T', 'N')] {
        solve::<f32>(c, 1024, mode);
        solve::<f64>(c, 1024, mode);
    }
}

criterion_group! {
    name = small;
    config = test_fixture::bench::config_small();
    targets = benchmark_small
}
criterion_group! {
    name = large;
    config = test_fixture::bench::config_large();
    targets = benchmark_large
}
criterion_main!(small, large);
