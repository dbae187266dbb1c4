//! Criterion micro-benchmarks for the region classifier and image
//! expansion.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wavefield_bench::source_positions;
use wavefield_surface::{reflect_position, HalfExtent, ImageArena, Position};

/// Benchmark: classify and mirror 10K positions spread over 3× the rectangle.
fn bench_reflect_10k(c: &mut Criterion) {
    let half = HalfExtent { x: 1.0, y: 1.0 };
    let positions = source_positions(10_000, 42, 3.0);

    c.bench_function("reflect_position_10k", |b| {
        b.iter(|| {
            for &p in &positions {
                let images = reflect_position(p, half).unwrap();
                black_box(&images);
            }
        });
    });
}

/// Benchmark: expand six generations of images from near the centre.
fn bench_expand_depth6(c: &mut Criterion) {
    let half = HalfExtent { x: 1.0, y: 1.0 };

    c.bench_function("image_arena_depth6", |b| {
        b.iter(|| {
            let arena = ImageArena::expand(black_box(Position::new(0.1, -0.2)), half, 6).unwrap();
            black_box(arena.len());
        });
    });
}

criterion_group!(benches, bench_reflect_10k, bench_expand_depth6);
criterion_main!(benches);
