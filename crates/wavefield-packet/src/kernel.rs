//! Causal travelling-wave kernels.
//!
//! A harmonic wave launched at `t = 0` from `x = 0` towards `+x`:
//!
//! ```text
//! u[i, j] = exp(i (k x_j - w t_i))   if k x_j - w t_i <= 0
//!         = 0                        otherwise
//! ```
//!
//! with `w = 2π f` and `k = 2π d(f)`. The mask keeps the medium at rest
//! ahead of the wavefront.

use ndarray::{Array2, ArrayBase, Data, Ix1};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Complex displacement of shape `(ts.len(), xs.len())` for one frequency.
///
/// `wavenumber` maps a frequency in Hz to a wavenumber in 1/m.
///
/// ```
/// use ndarray::array;
/// use wavefield_packet::complex_wave;
///
/// let u = complex_wave(|f| f / 343.0, 100.0, &array![0.0, 0.5], &array![0.0]);
/// assert_eq!(u[[0, 0]].re, 1.0);
/// assert_eq!(u[[0, 1]].norm(), 0.0);
/// ```
pub fn complex_wave<Sx, St>(
    wavenumber: impl Fn(f64) -> f64,
    freq: f64,
    xs: &ArrayBase<Sx, Ix1>,
    ts: &ArrayBase<St, Ix1>,
) -> Array2<Complex64>
where
    Sx: Data<Elem = f64>,
    St: Data<Elem = f64>,
{
    let mut out = Array2::zeros((ts.len(), xs.len()));
    accumulate_complex_wave(&mut out, wavenumber, freq, xs, ts);
    out
}

/// Add the causal wave for one frequency into `out`, which must have shape
/// `(ts.len(), xs.len())`.
pub fn accumulate_complex_wave<Sx, St>(
    out: &mut Array2<Complex64>,
    wavenumber: impl Fn(f64) -> f64,
    freq: f64,
    xs: &ArrayBase<Sx, Ix1>,
    ts: &ArrayBase<St, Ix1>,
) where
    Sx: Data<Elem = f64>,
    St: Data<Elem = f64>,
{
    debug_assert_eq!(out.dim(), (ts.len(), xs.len()));
    let w = 2.0 * PI * freq;
    let k = 2.0 * PI * wavenumber(freq);
    for (mut row, &t) in out.rows_mut().into_iter().zip(ts.iter()) {
        for (u, &x) in row.iter_mut().zip(xs.iter()) {
            let phase = k * x - w * t;
            if phase <= 0.0 {
                *u += Complex64::from_polar(1.0, phase);
            }
        }
    }
}

/// Real displacement `-Im(complex_wave(..))`: the sine component, zero and
/// rising at the moment the wavefront arrives.
pub fn harmonic_wave<Sx, St>(
    wavenumber: impl Fn(f64) -> f64,
    freq: f64,
    xs: &ArrayBase<Sx, Ix1>,
    ts: &ArrayBase<St, Ix1>,
) -> Array2<f64>
where
    Sx: Data<Elem = f64>,
    St: Data<Elem = f64>,
{
    complex_wave(wavenumber, freq, xs, ts).mapv(|u| -u.im)
}
