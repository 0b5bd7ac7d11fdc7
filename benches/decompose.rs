use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rusty_lowrank::prelude::*;

fn bench_decompose(c: &mut Criterion) {
    let image = f64::gradient_image((256, 192)) + &f64::random_image((256, 192), &mut rand::thread_rng());

    c.bench_function("decompose 256x192", |b| {
        b.iter(|| decompose(black_box(&image)).unwrap())
    });

    let svd = decompose(&image).unwrap();
    c.bench_function("reconstruct 256x192 rank 32", |b| {
        b.iter(|| svd.reconstruct(black_box(32)).unwrap())
    });
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
