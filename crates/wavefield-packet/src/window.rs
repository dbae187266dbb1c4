//! Radially revolved 1D windows.
//!
//! A [`RadialWindow`] spreads `n` samples of a [`Window`] over a radial
//! span of `max_dist` metres whose centre sits `offset` metres from the
//! origin, and evaluates at `(x, y)` by interpolating at `sqrt(x² + y²)`.

use crate::envelope::Envelope;
use crate::interp::LinearLookup;
use ndarray::{Array1, Array2, ArrayBase, Data, Ix1};
use std::f64::consts::PI;
use std::str::FromStr;
use wavefield_core::{require_finite, require_positive, ArgumentError};

/// Classic 1D tapers, generated in periodic (DFT-even) form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Window {
    /// Rectangular: all ones.
    Boxcar,
    /// Triangular.
    Triangle,
    /// Raised cosine, zero at the ends.
    Hann,
    /// Raised cosine on a 0.08 pedestal.
    Hamming,
    /// Three-term Blackman.
    Blackman,
}

impl Window {
    /// `n` periodic samples: the symmetric window of length `n + 1` with
    /// its last sample dropped.
    pub fn samples(self, n: usize) -> Array1<f64> {
        if n == 0 {
            return Array1::zeros(0);
        }
        let mut w = self.symmetric(n + 1);
        w.truncate(n);
        Array1::from(w)
    }

    fn symmetric(self, m: usize) -> Vec<f64> {
        if m == 1 {
            return vec![1.0];
        }
        let denom = (m - 1) as f64;
        (0..m)
            .map(|i| {
                let n = i as f64;
                let c1 = (2.0 * PI * n / denom).cos();
                match self {
                    Window::Boxcar => 1.0,
                    Window::Triangle => {
                        let half = if m % 2 == 0 { m } else { m + 1 } as f64;
                        1.0 - (2.0 * n - denom).abs() / half
                    }
                    Window::Hann => 0.5 - 0.5 * c1,
                    Window::Hamming => 0.54 - 0.46 * c1,
                    Window::Blackman => 0.42 - 0.5 * c1 + 0.08 * (4.0 * PI * n / denom).cos(),
                }
            })
            .collect()
    }
}

impl FromStr for Window {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boxcar" | "rect" | "rectangular" => Ok(Window::Boxcar),
            "triang" | "triangle" => Ok(Window::Triangle),
            "hann" | "hanning" => Ok(Window::Hann),
            "hamming" => Ok(Window::Hamming),
            "blackman" => Ok(Window::Blackman),
            _ => Err(ArgumentError::UnknownWindow {
                input: s.to_string(),
            }),
        }
    }
}

/// A window revolved around the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialWindow {
    positions: Array1<f64>,
    weights: Array1<f64>,
}

impl RadialWindow {
    /// `n` window samples spread over `max_dist` metres; the span is
    /// centred `offset` metres from the origin.
    pub fn new(
        window: Window,
        n: usize,
        max_dist: f64,
        offset: f64,
    ) -> Result<Self, ArgumentError> {
        if n == 0 {
            return Err(ArgumentError::EmptyTable);
        }
        let max_dist = require_positive("max_dist", max_dist)?;
        let start = require_finite("offset", offset)? - max_dist / 2.0;
        let positions = Array1::linspace(0.0, max_dist, n).mapv(|p| p + start);
        Ok(Self {
            positions,
            weights: window.samples(n),
        })
    }

    /// Radial sample positions.
    pub fn positions(&self) -> &Array1<f64> {
        &self.positions
    }

    /// Window samples at [`positions`](Self::positions).
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// Window value at `(x, y)`.
    pub fn eval(&self, x: f64, y: f64) -> Result<f64, ArgumentError> {
        let lookup = LinearLookup::new(&self.positions, [x.hypot(y)])?;
        Ok(lookup.apply(&self.weights)?[0])
    }

    /// Window over the grid spanned by `xs` and `ys`; shape `(ys.len(), xs.len())`.
    pub fn eval_grid<S, T>(
        &self,
        xs: &ArrayBase<S, Ix1>,
        ys: &ArrayBase<T, Ix1>,
    ) -> Result<Array2<f64>, ArgumentError>
    where
        S: Data<Elem = f64>,
        T: Data<Elem = f64>,
    {
        let radii = ys
            .iter()
            .flat_map(|&y| xs.iter().map(move |&x| x.hypot(y)));
        let lookup = LinearLookup::new(&self.positions, radii)?;
        let values = lookup.apply(&self.weights)?;
        Array2::from_shape_vec((ys.len(), xs.len()), values).map_err(|_| {
            ArgumentError::ShapeMismatch {
                expected: ys.len() * xs.len(),
                found: lookup.len(),
            }
        })
    }

    /// Use the window profile along one axis as a wavepacket envelope,
    /// evaluated at `|x|`.
    pub fn into_envelope(self) -> Envelope {
        Envelope::new(move |x: f64| self.eval(x, 0.0).unwrap_or(0.0))
    }
}
