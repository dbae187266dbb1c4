//! Test fixtures and helpers for wavefield development.
//!
//! Provides reference wavepackets and surfaces ([`fixtures`]), seeded
//! random source positions, and element-wise array comparison.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use ndarray::{ArrayBase, Data, Dimension};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wavefield_surface::Position;

/// `n` positions drawn uniformly from `[-span, span]²`, reproducible per
/// seed.
pub fn seeded_positions(seed: u64, n: usize, span: f64) -> Vec<Position> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Position::new(
                rng.random_range(-span..=span),
                rng.random_range(-span..=span),
            )
        })
        .collect()
}

/// Panic with the first differing index unless `a` and `b` have the same
/// shape and agree element-wise within `tol`.
pub fn assert_arrays_close<S, T, D>(a: &ArrayBase<S, D>, b: &ArrayBase<T, D>, tol: f64)
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    assert_eq!(a.shape(), b.shape(), "shape mismatch");
    for ((index, x), y) in a.indexed_iter().zip(b.iter()) {
        assert!(
            (x - y).abs() <= tol,
            "arrays differ at {index:?}: {x} vs {y} (tol {tol})"
        );
    }
}

/// Largest absolute element.
pub fn peak<S, D>(a: &ArrayBase<S, D>) -> f64
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    a.iter().fold(0.0, |m, v| m.max(v.abs()))
}
