//! Sampling parameters shared by every simulated entity.
//!
//! [`Discretization`] is the value object both wavepackets and surfaces hold
//! instead of inheriting from a common base: a time axis whose step is the
//! reciprocal of the sampling frequency, a space axis with an independent
//! spatial step, and the peak-normalization flag.

use crate::axis::Axis;
use crate::error::{require_positive, ArgumentError, ConfigError};
use crate::interval::Interval;
use ndarray::Array1;

/// Sampling frequency / time step, spatial step, boundaries and the
/// normalization flag.
///
/// Setting the sampling frequency sets the time step to its reciprocal and
/// vice versa; clearing either clears both.
///
/// ```
/// use wavefield_core::Discretization;
///
/// let mut d = Discretization::default();
/// d.set_sampling_frequency(1000.0).unwrap();
/// assert_eq!(d.time_step(), Some(0.001));
/// d.set_time_boundary(0.01).unwrap();
/// assert_eq!(d.time_samples().unwrap().len(), 11);
/// ```
#[derive(Clone, Debug)]
pub struct Discretization {
    time: Axis,
    space: Axis,
    normalize: bool,
}

impl Default for Discretization {
    fn default() -> Self {
        Self {
            time: Axis::new("time_boundary", "sampling_frequency"),
            space: Axis::new("space_boundary", "spatial_step"),
            normalize: true,
        }
    }
}

impl Discretization {
    /// Sampling frequency in Hz.
    pub fn sampling_frequency(&self) -> Option<f64> {
        self.time.step().map(|dt| 1.0 / dt)
    }

    /// Set the sampling frequency in Hz. Must be finite and > 0.
    pub fn set_sampling_frequency(&mut self, fs: f64) -> Result<(), ArgumentError> {
        let fs = require_positive("sampling_frequency", fs)?;
        self.time.set_step(Some(1.0 / fs));
        Ok(())
    }

    /// Time step in seconds.
    pub fn time_step(&self) -> Option<f64> {
        self.time.step()
    }

    /// Set the time step in seconds. Must be finite and > 0.
    pub fn set_time_step(&mut self, dt: f64) -> Result<(), ArgumentError> {
        let dt = require_positive("time_step", dt)?;
        self.time.set_step(Some(dt));
        Ok(())
    }

    /// Unset both the sampling frequency and the time step.
    pub fn clear_sampling_frequency(&mut self) {
        self.time.set_step(None);
    }

    /// Spatial step in metres.
    pub fn spatial_step(&self) -> Option<f64> {
        self.space.step()
    }

    /// Set the spatial step in metres. Must be finite and > 0.
    pub fn set_spatial_step(&mut self, dx: f64) -> Result<(), ArgumentError> {
        let dx = require_positive("spatial_step", dx)?;
        self.space.set_step(Some(dx));
        Ok(())
    }

    /// Unset the spatial step.
    pub fn clear_spatial_step(&mut self) {
        self.space.set_step(None);
    }

    /// Time boundary in seconds.
    pub fn time_boundary(&self) -> Option<Interval> {
        self.time.boundary()
    }

    /// Set the time boundary. A scalar `T` means `(0, T)`.
    pub fn set_time_boundary(
        &mut self,
        boundary: impl Into<Interval>,
    ) -> Result<(), ArgumentError> {
        let boundary = boundary.into().validated("time_boundary")?;
        self.time.set_boundary(Some(boundary));
        Ok(())
    }

    /// Unset the time boundary.
    pub fn clear_time_boundary(&mut self) {
        self.time.set_boundary(None);
    }

    /// Space boundary in metres.
    pub fn space_boundary(&self) -> Option<Interval> {
        self.space.boundary()
    }

    /// Set the space boundary. A scalar `L` means `(0, L)`.
    pub fn set_space_boundary(
        &mut self,
        boundary: impl Into<Interval>,
    ) -> Result<(), ArgumentError> {
        let boundary = boundary.into().validated("space_boundary")?;
        self.space.set_boundary(Some(boundary));
        Ok(())
    }

    /// Unset the space boundary.
    pub fn clear_space_boundary(&mut self) {
        self.space.set_boundary(None);
    }

    /// Whether evaluated data is divided by its peak magnitude.
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// Set the normalization flag.
    pub fn set_normalize(&mut self, normalize: bool) {
        self.normalize = normalize;
    }

    /// Fail with the first unset parameter, checked in the order sampling
    /// frequency, time boundary, spatial step, space boundary.
    pub fn require_configured(&self) -> Result<(), ConfigError> {
        let unset = |parameter| Err(ConfigError::Unset { parameter });
        if self.time.step().is_none() {
            return unset("sampling_frequency");
        }
        if self.time.boundary().is_none() {
            return unset("time_boundary");
        }
        if self.space.step().is_none() {
            return unset("spatial_step");
        }
        if self.space.boundary().is_none() {
            return unset("space_boundary");
        }
        Ok(())
    }

    /// The discretized time axis.
    pub fn time_samples(&mut self) -> Result<&Array1<f64>, ConfigError> {
        self.time.samples()
    }

    /// The discretized space axis.
    pub fn space_samples(&mut self) -> Result<&Array1<f64>, ConfigError> {
        self.space.samples()
    }

    /// The time axis as of the last discretization, without regenerating.
    pub fn cached_time_samples(&self) -> Option<&Array1<f64>> {
        self.time.cached()
    }

    /// The space axis as of the last discretization, without regenerating.
    pub fn cached_space_samples(&self) -> Option<&Array1<f64>> {
        self.space.cached()
    }

    /// Drop both cached axes. Configuration is untouched.
    pub fn purge(&mut self) {
        self.time.invalidate();
        self.space.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn frequency_and_step_are_reciprocal() {
        let mut d = Discretization::default();
        d.set_time_step(0.002).unwrap();
        assert_relative_eq!(d.sampling_frequency().unwrap(), 500.0);
        d.set_sampling_frequency(250.0).unwrap();
        assert_relative_eq!(d.time_step().unwrap(), 0.004);
    }

    #[test]
    fn clearing_frequency_clears_step() {
        let mut d = Discretization::default();
        d.set_sampling_frequency(100.0).unwrap();
        d.clear_sampling_frequency();
        assert_eq!(d.sampling_frequency(), None);
        assert_eq!(d.time_step(), None);
    }

    #[test]
    fn rejects_non_positive_steps() {
        let mut d = Discretization::default();
        assert!(d.set_spatial_step(-0.1).is_err());
        assert!(d.set_sampling_frequency(0.0).is_err());
        assert!(d.set_time_boundary((0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn require_configured_reports_in_order() {
        let mut d = Discretization::default();
        let missing = |d: &Discretization| match d.require_configured() {
            Err(ConfigError::Unset { parameter }) => parameter,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(missing(&d), "sampling_frequency");
        d.set_sampling_frequency(1000.0).unwrap();
        assert_eq!(missing(&d), "time_boundary");
        d.set_time_boundary(0.01).unwrap();
        assert_eq!(missing(&d), "spatial_step");
        d.set_spatial_step(0.1).unwrap();
        assert_eq!(missing(&d), "space_boundary");
        d.set_space_boundary(1.0).unwrap();
        assert!(d.require_configured().is_ok());
    }

    #[test]
    fn purge_keeps_configuration() {
        let mut d = Discretization::default();
        d.set_spatial_step(0.1).unwrap();
        d.set_space_boundary((0.0, 1.0)).unwrap();
        assert_eq!(d.space_samples().unwrap().len(), 11);
        d.purge();
        assert!(d.cached_space_samples().is_none());
        assert_eq!(d.spatial_step(), Some(0.1));
        assert!(d.space_boundary().is_some());
    }

    #[test]
    fn normalize_defaults_on() {
        assert!(Discretization::default().normalize());
    }
}
