//! Criterion benchmarks for surface evaluation.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wavefield_bench::reference_surface;
use wavefield_surface::BoundaryCondition;

fn bench_transparent_3_sources(c: &mut Criterion) {
    let mut surface = reference_surface(42, 3, BoundaryCondition::Transparent).unwrap();

    c.bench_function("surface_transparent_3_sources", |b| {
        b.iter(|| {
            let r = surface.eval().unwrap();
            black_box(r);
        });
    });
}

/// 1 source + 4 first-generation images.
fn bench_free_1_source(c: &mut Criterion) {
    let mut surface = reference_surface(42, 1, BoundaryCondition::Free).unwrap();

    c.bench_function("surface_free_1_source", |b| {
        b.iter(|| {
            let r = surface.eval().unwrap();
            black_box(r);
        });
    });
}

/// 1 source + 16 images over two generations.
fn bench_depth2_1_source(c: &mut Criterion) {
    let mut surface = reference_surface(7, 1, BoundaryCondition::ReflectionDepth(2)).unwrap();

    c.bench_function("surface_depth2_1_source", |b| {
        b.iter(|| {
            let r = surface.eval().unwrap();
            black_box(r);
        });
    });
}

criterion_group!(
    benches,
    bench_transparent_3_sources,
    bench_free_1_source,
    bench_depth2_1_source
);
criterion_main!(benches);
