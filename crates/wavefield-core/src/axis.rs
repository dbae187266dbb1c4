//! Lazily discretized coordinate axes.
//!
//! An [`Axis`] owns a boundary [`Interval`], a step, and a cached sample
//! vector. Every mutator that changes the boundary or the step drops the
//! cache; [`Axis::samples`] regenerates it on demand and returns the cached
//! vector untouched while nothing has changed.
//!
//! Regeneration pads the upper endpoint by a quarter step so that the
//! intended last sample survives floating-point rounding:
//!
//! ```text
//! samples = arange(lo, hi + step / 4, step)
//! ```
//!
//! The boundary is then snapped to the first and last generated samples.

use crate::error::ConfigError;
use crate::interval::Interval;
use ndarray::Array1;

/// Samples `lo, lo + step, ...` strictly below `hi + step / 4`; the count
/// is `ceil((hi + step / 4 - lo) / step)`.
///
/// Returns an empty vector when the padded range holds no sample, when
/// `step` is not finite and strictly positive, or when the range is
/// unbounded.
///
/// ```
/// use wavefield_core::{padded_arange, Interval};
///
/// let xs = padded_arange(Interval::new(0.0, 1.0), 0.1);
/// assert_eq!(xs.len(), 11);
/// assert_eq!(xs[10], 1.0);
/// ```
pub fn padded_arange(boundary: Interval, step: f64) -> Array1<f64> {
    if !(step.is_finite() && step > 0.0) {
        return Array1::zeros(0);
    }
    let stop = boundary.hi + step / 4.0;
    let count = ((stop - boundary.lo) / step).ceil();
    if !(count > 0.0 && count.is_finite()) {
        return Array1::zeros(0);
    }
    let count = count as usize;
    Array1::from_shape_fn(count, |i| boundary.lo + i as f64 * step)
}

/// One discretized dimension (time or space).
#[derive(Clone, Debug)]
pub struct Axis {
    boundary_name: &'static str,
    step_name: &'static str,
    boundary: Option<Interval>,
    step: Option<f64>,
    samples: Option<Array1<f64>>,
}

impl Axis {
    /// Create an unset axis. The names are reported in [`ConfigError::Unset`]
    /// when [`samples`](Self::samples) is called before configuration.
    pub const fn new(boundary_name: &'static str, step_name: &'static str) -> Self {
        Self {
            boundary_name,
            step_name,
            boundary: None,
            step: None,
            samples: None,
        }
    }

    /// Current boundary, snapped to the generated endpoints after the last
    /// regeneration.
    pub fn boundary(&self) -> Option<Interval> {
        self.boundary
    }

    /// Current step.
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// Replace the boundary. A change drops the cached samples.
    pub fn set_boundary(&mut self, boundary: Option<Interval>) {
        if self.boundary != boundary {
            self.boundary = boundary;
            self.samples = None;
        }
    }

    /// Replace the step. A change drops the cached samples.
    pub fn set_step(&mut self, step: Option<f64>) {
        if self.step != step {
            self.step = step;
            self.samples = None;
        }
    }

    /// The cached samples, if any, without regenerating.
    pub fn cached(&self) -> Option<&Array1<f64>> {
        self.samples.as_ref()
    }

    /// Drop the cached samples; configuration is untouched. Idempotent.
    pub fn invalidate(&mut self) {
        self.samples = None;
    }

    /// The discretized axis, regenerated only if the boundary or step
    /// changed since the last call.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Unset`] if the boundary or the step is unset.
    pub fn samples(&mut self) -> Result<&Array1<f64>, ConfigError> {
        let boundary = self.boundary.ok_or(ConfigError::Unset {
            parameter: self.boundary_name,
        })?;
        let step = self.step.ok_or(ConfigError::Unset {
            parameter: self.step_name,
        })?;

        let samples = match self.samples.take() {
            Some(cached) => cached,
            None => {
                let fresh = padded_arange(boundary, step);
                if let (Some(&first), Some(&last)) = (fresh.first(), fresh.last()) {
                    self.boundary = Some(Interval::new(first, last));
                }
                log::trace!(
                    "regenerated {} axis: {} samples over {}",
                    self.boundary_name,
                    fresh.len(),
                    boundary
                );
                fresh
            }
        };
        Ok(&*self.samples.insert(samples))
    }
}
