//! Criterion micro-benchmarks for block allocation and store operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use weft_block::{Block, BlockStore, ZeroInit};
use weft_core::{Scalar, TypeTag};

fn bench_block_alloc(c: &mut Criterion) {
    c.bench_function("block_alloc_real_4k", |b| {
        b.iter(|| Block::try_new(black_box(4096), TypeTag::Real64, ZeroInit::Zeroed).unwrap())
    });

    c.bench_function("block_alloc_complex_4k", |b| {
        b.iter(|| Block::try_new(black_box(4096), TypeTag::Complex128, ZeroInit::Zeroed).unwrap())
    });
}

fn bench_store_cycle(c: &mut Criterion) {
    c.bench_function("store_alloc_release_cycle", |b| {
        let mut store = BlockStore::new();
        b.iter(|| {
            let h = store
                .alloc(black_box(1024), TypeTag::Real64, ZeroInit::Zeroed)
                .unwrap();
            store.release(h).unwrap();
        })
    });
}

fn bench_element_access(c: &mut Criterion) {
    let mut block = Block::try_new(4096, TypeTag::Real64, ZeroInit::Zeroed).unwrap();
    c.bench_function("block_set_get_4k", |b| {
        b.iter(|| {
            for i in 0..4096 {
                block.set(i, i as f64).unwrap();
            }
            let mut acc = 0.0;
            for i in 0..4096 {
                if let Scalar::Real(x) = block.get(i).unwrap() {
                    acc += x;
                }
            }
            black_box(acc)
        })
    });
}

criterion_group!(
    benches,
    bench_block_alloc,
    bench_store_cycle,
    bench_element_access
);
criterion_main!(benches);
