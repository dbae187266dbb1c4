//! Peak normalization with a near-zero guard.

use ndarray::{Array, Dimension};
use num_complex::Complex64;

/// Peaks below this magnitude are left alone instead of divided by.
pub const NORMALIZATION_FLOOR: f64 = 1e-24;

/// Divide `data` by its peak absolute value. Returns the peak when it was
/// applied, `None` when it fell below [`NORMALIZATION_FLOOR`] (including
/// empty arrays).
pub fn normalize_real<D: Dimension>(data: &mut Array<f64, D>) -> Option<f64> {
    let peak = data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    apply(peak, || data.mapv_inplace(|v| v / peak))
}

/// Complex counterpart of [`normalize_real`], using the modulus.
pub fn normalize_complex<D: Dimension>(data: &mut Array<Complex64, D>) -> Option<f64> {
    let peak = data.iter().fold(0.0_f64, |acc, v| acc.max(v.norm()));
    apply(peak, || data.mapv_inplace(|v| v / peak))
}

fn apply(peak: f64, divide: impl FnOnce()) -> Option<f64> {
    if peak >= NORMALIZATION_FLOOR {
        divide();
        Some(peak)
    } else {
        log::warn!("peak magnitude {peak:e} below normalization floor, data left unscaled");
        None
    }
}
