//! Criterion micro-benchmarks for special-function evaluation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use weft_bench::real_inputs;
use weft_core::Mode;
use weft_sf::{airy, bessel};

fn bench_bessel(c: &mut Criterion) {
    let xs: Vec<f64> = real_inputs(256, 11).iter().map(|x| x / 10.0).collect();
    c.bench_function("bessel_j0_256", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(bessel::j0(black_box(x)).unwrap());
            }
        })
    });
    c.bench_function("bessel_jn5_256", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(bessel::jn(5, black_box(x)).unwrap());
            }
        })
    });
}

fn bench_airy(c: &mut Criterion) {
    // Spread across the series and both asymptotic regimes.
    let xs: Vec<f64> = real_inputs(256, 13).iter().map(|x| x / 25.0).collect();
    c.bench_function("airy_ai_double_256", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(airy::ai(black_box(x), Mode::Double).unwrap());
            }
        })
    });
    c.bench_function("airy_ai_approx_256", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(airy::ai(black_box(x), Mode::Approx).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_bessel, bench_airy);
criterion_main!(benches);
