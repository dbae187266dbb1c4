//! The [`Wavepacket`] source model.
//!
//! A wavepacket is the superposition, over every pair of spectral frequency
//! and dispersion relation, of the causal travelling wave in [`kernel`]. It
//! is evaluated lazily: [`Wavepacket::data`] runs [`Wavepacket::eval`] on
//! first access and reuses the cached matrix until a domain parameter
//! (a step or a boundary) changes.
//!
//! [`kernel`]: crate::kernel

use crate::dispersion::Dispersion;
use crate::envelope::Envelope;
use crate::kernel::accumulate_complex_wave;
use log::debug;
use ndarray::{Array1, Array2};
use num_complex::Complex64;
use wavefield_core::{
    normalize_complex, require_finite, ArgumentError, ConfigError, Discretization, Interval,
    WaveError,
};

/// A 1D superposition of harmonic travelling waves.
///
/// ```
/// use wavefield_packet::{Dispersion, Wavepacket};
///
/// let mut wp = Wavepacket::builder()
///     .dispersion(Dispersion::non_dispersive(343.0).unwrap())
///     .spectrum([100.0])
///     .sampling_frequency(1000.0)
///     .time_boundary(0.01)
///     .spatial_step(0.1)
///     .space_boundary(1.0)
///     .build()
///     .unwrap();
/// let data = wp.data().unwrap();
/// assert_eq!(data.dim(), (11, 11));
/// assert_eq!(data[[0, 0]], 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Wavepacket {
    dispersion: Vec<Dispersion>,
    spectrum: Vec<f64>,
    envelope: Option<Envelope>,
    discretization: Discretization,
    complex_data: Option<Array2<Complex64>>,
}

/// Builder for [`Wavepacket`].
///
/// Every parameter is optional at build time; the domain parameters must
/// be set before evaluation.
pub struct WavepacketBuilder {
    dispersion: Vec<Dispersion>,
    spectrum: Vec<f64>,
    sampling_frequency: Option<f64>,
    time_boundary: Option<Interval>,
    spatial_step: Option<f64>,
    space_boundary: Option<Interval>,
    normalize: bool,
    envelope: Option<Envelope>,
}

impl Wavepacket {
    /// Create a new builder for configuring a `Wavepacket`.
    pub fn builder() -> WavepacketBuilder {
        WavepacketBuilder {
            dispersion: Vec::new(),
            spectrum: Vec::new(),
            sampling_frequency: None,
            time_boundary: None,
            spatial_step: None,
            space_boundary: None,
            normalize: true,
            envelope: None,
        }
    }

    /// Dispersion relations, in insertion order.
    pub fn dispersion(&self) -> &[Dispersion] {
        &self.dispersion
    }

    /// Replace the dispersion relations.
    pub fn set_dispersion(&mut self, relations: impl IntoIterator<Item = Dispersion>) {
        self.dispersion = relations.into_iter().collect();
    }

    /// Append one dispersion relation.
    pub fn add_dispersion(&mut self, relation: Dispersion) {
        self.dispersion.push(relation);
    }

    /// Frequencies in Hz, in insertion order.
    pub fn spectrum(&self) -> &[f64] {
        &self.spectrum
    }

    /// Replace the spectrum. Every frequency must be finite; on error the
    /// previous spectrum is kept.
    pub fn set_spectrum(
        &mut self,
        frequencies: impl IntoIterator<Item = f64>,
    ) -> Result<(), ArgumentError> {
        self.spectrum = frequencies
            .into_iter()
            .map(|f| require_finite("frequency", f))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Spatial envelope applied after normalization.
    pub fn envelope(&self) -> Option<&Envelope> {
        self.envelope.as_ref()
    }

    /// Set or remove the envelope.
    pub fn set_envelope(&mut self, envelope: Option<Envelope>) {
        self.envelope = envelope;
    }

    /// Sampling parameters.
    pub fn discretization(&self) -> &Discretization {
        &self.discretization
    }

    /// Set the sampling frequency in Hz.
    pub fn set_sampling_frequency(&mut self, fs: f64) -> Result<(), ArgumentError> {
        self.update_domain(Discretization::time_step, |d| d.set_sampling_frequency(fs))
    }

    /// Set the time step in seconds.
    pub fn set_time_step(&mut self, dt: f64) -> Result<(), ArgumentError> {
        self.update_domain(Discretization::time_step, |d| d.set_time_step(dt))
    }

    /// Set the spatial step in metres.
    pub fn set_spatial_step(&mut self, dx: f64) -> Result<(), ArgumentError> {
        self.update_domain(Discretization::spatial_step, |d| d.set_spatial_step(dx))
    }

    /// Set the time boundary. A scalar `T` means `(0, T)`.
    pub fn set_time_boundary(
        &mut self,
        boundary: impl Into<Interval>,
    ) -> Result<(), ArgumentError> {
        let boundary = boundary.into();
        self.update_domain(Discretization::time_boundary, |d| d.set_time_boundary(boundary))
    }

    /// Set the space boundary. A scalar `L` means `(0, L)`.
    pub fn set_space_boundary(
        &mut self,
        boundary: impl Into<Interval>,
    ) -> Result<(), ArgumentError> {
        let boundary = boundary.into();
        self.update_domain(Discretization::space_boundary, |d| d.set_space_boundary(boundary))
    }

    /// Unset both the sampling frequency and the time step.
    pub fn clear_sampling_frequency(&mut self) {
        self.clear_domain(Discretization::clear_sampling_frequency);
    }

    /// Unset the spatial step.
    pub fn clear_spatial_step(&mut self) {
        self.clear_domain(Discretization::clear_spatial_step);
    }

    /// Unset the time boundary.
    pub fn clear_time_boundary(&mut self) {
        self.clear_domain(Discretization::clear_time_boundary);
    }

    /// Unset the space boundary.
    pub fn clear_space_boundary(&mut self) {
        self.clear_domain(Discretization::clear_space_boundary);
    }

    fn clear_domain(&mut self, clear: impl FnOnce(&mut Discretization)) {
        clear(&mut self.discretization);
        self.complex_data = None;
    }

    /// Set whether evaluation divides by the peak magnitude.
    pub fn set_normalize(&mut self, normalize: bool) {
        if self.discretization.normalize() != normalize {
            self.discretization.set_normalize(normalize);
            self.complex_data = None;
        }
    }

    fn update_domain<T: PartialEq>(
        &mut self,
        get: impl Fn(&Discretization) -> T,
        set: impl FnOnce(&mut Discretization) -> Result<(), ArgumentError>,
    ) -> Result<(), ArgumentError> {
        let before = get(&self.discretization);
        set(&mut self.discretization)?;
        if get(&self.discretization) != before {
            self.complex_data = None;
        }
        Ok(())
    }

    /// The discretized time axis.
    pub fn time_samples(&mut self) -> Result<&Array1<f64>, ConfigError> {
        self.discretization.time_samples()
    }

    /// The discretized space axis.
    pub fn space_samples(&mut self) -> Result<&Array1<f64>, ConfigError> {
        self.discretization.space_samples()
    }

    /// Evaluate the complex displacement, shape `(time samples, space samples)`.
    ///
    /// Always recomputes. An empty spectrum is legal and yields zeros.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Unset`] for the first missing domain parameter, then
    /// [`ConfigError::EmptyDispersion`] if no relation is set.
    pub fn eval(&mut self) -> Result<&Array2<Complex64>, WaveError> {
        self.discretization.require_configured()?;
        if self.dispersion.is_empty() {
            return Err(ConfigError::EmptyDispersion.into());
        }
        let ts = self.discretization.time_samples()?.clone();
        let xs = self.discretization.space_samples()?.clone();

        let mut acc = Array2::zeros((ts.len(), xs.len()));
        for &freq in &self.spectrum {
            for relation in &self.dispersion {
                accumulate_complex_wave(&mut acc, |f| relation.wavenumber(f), freq, &xs, &ts);
            }
        }

        if self.discretization.normalize() {
            normalize_complex(&mut acc);
        }

        if let Some(envelope) = &self.envelope {
            let factors = xs.mapv(|x| envelope.factor(x));
            for mut row in acc.rows_mut() {
                for (u, &g) in row.iter_mut().zip(factors.iter()) {
                    *u *= g;
                }
            }
        }

        debug!(
            "wavepacket evaluated: shape ({}, {}), {} frequencies x {} relations",
            ts.len(),
            xs.len(),
            self.spectrum.len(),
            self.dispersion.len()
        );
        Ok(self.complex_data.insert(acc))
    }

    /// The complex displacement, evaluating first if nothing is cached.
    pub fn complex_data(&mut self) -> Result<&Array2<Complex64>, WaveError> {
        if self.complex_data.is_none() {
            self.eval()?;
        }
        self.complex_data
            .as_ref()
            .ok_or_else(|| ConfigError::Unset { parameter: "complex_data" }.into())
    }

    /// The cached complex displacement, if any.
    pub fn cached_complex_data(&self) -> Option<&Array2<Complex64>> {
        self.complex_data.as_ref()
    }

    /// Real displacement `-Im(complex_data)`, evaluating first if nothing
    /// is cached.
    pub fn data(&mut self) -> Result<Array2<f64>, WaveError> {
        Ok(self.complex_data()?.mapv(|u| -u.im))
    }

    /// Drop the cached displacement and both cached axes. Configuration is
    /// untouched.
    pub fn purge_data(&mut self) {
        self.complex_data = None;
        self.discretization.purge();
    }

    /// Append `other`'s spectrum and dispersion relations to this one.
    ///
    /// Cached data is left as is; call [`eval`](Self::eval) to include the
    /// merged terms.
    pub fn merge(&mut self, other: &Wavepacket) {
        self.spectrum.extend_from_slice(&other.spectrum);
        self.dispersion.extend(other.dispersion.iter().cloned());
    }
}

impl WavepacketBuilder {
    /// Add a dispersion relation. May be called more than once.
    pub fn dispersion(mut self, relation: Dispersion) -> Self {
        self.dispersion.push(relation);
        self
    }

    /// Set the frequencies to superpose, in Hz (default: none).
    pub fn spectrum(mut self, frequencies: impl IntoIterator<Item = f64>) -> Self {
        self.spectrum = frequencies.into_iter().collect();
        self
    }

    /// Set the sampling frequency in Hz.
    pub fn sampling_frequency(mut self, fs: f64) -> Self {
        self.sampling_frequency = Some(fs);
        self
    }

    /// Set the time boundary. A scalar `T` means `(0, T)`.
    pub fn time_boundary(mut self, boundary: impl Into<Interval>) -> Self {
        self.time_boundary = Some(boundary.into());
        self
    }

    /// Set the spatial step in metres.
    pub fn spatial_step(mut self, dx: f64) -> Self {
        self.spatial_step = Some(dx);
        self
    }

    /// Set the space boundary. A scalar `L` means `(0, L)`.
    pub fn space_boundary(mut self, boundary: impl Into<Interval>) -> Self {
        self.space_boundary = Some(boundary.into());
        self
    }

    /// Divide evaluated data by its peak magnitude (default: true).
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the spatial envelope (default: none).
    pub fn envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = Some(envelope);
        self
    }

    /// Build the wavepacket, validating every value that was set.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a frequency is not finite, a step is not finite and
    /// positive, or a boundary is not finite.
    pub fn build(self) -> Result<Wavepacket, ArgumentError> {
        let mut wp = Wavepacket {
            dispersion: self.dispersion,
            envelope: self.envelope,
            ..Wavepacket::default()
        };
        wp.set_spectrum(self.spectrum)?;
        wp.set_normalize(self.normalize);
        if let Some(fs) = self.sampling_frequency {
            wp.set_sampling_frequency(fs)?;
        }
        if let Some(boundary) = self.time_boundary {
            wp.set_time_boundary(boundary)?;
        }
        if let Some(dx) = self.spatial_step {
            wp.set_spatial_step(dx)?;
        }
        if let Some(boundary) = self.space_boundary {
            wp.set_space_boundary(boundary)?;
        }
        Ok(wp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn air() -> Dispersion {
        Dispersion::non_dispersive(343.0).unwrap()
    }

    fn configured(spectrum: &[f64]) -> Wavepacket {
        Wavepacket::builder()
            .dispersion(air())
            .spectrum(spectrum.iter().copied())
            .sampling_frequency(1000.0)
            .time_boundary(0.01)
            .spatial_step(0.1)
            .space_boundary(1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn eval_reports_first_missing_parameter() {
        let mut wp = Wavepacket::builder().dispersion(air()).build().unwrap();
        assert_eq!(
            wp.eval().unwrap_err(),
            WaveError::Config(ConfigError::Unset {
                parameter: "sampling_frequency"
            })
        );
        wp.set_sampling_frequency(1000.0).unwrap();
        wp.set_time_boundary(0.01).unwrap();
        wp.set_spatial_step(0.1).unwrap();
        assert_eq!(
            wp.eval().unwrap_err(),
            WaveError::Config(ConfigError::Unset {
                parameter: "space_boundary"
            })
        );
    }

    #[test]
    fn clearing_a_parameter_drops_the_cache() {
        let mut wp = configured(&[100.0]);
        wp.eval().unwrap();

        wp.clear_sampling_frequency();
        assert!(wp.cached_complex_data().is_none());
        assert_eq!(wp.discretization().sampling_frequency(), None);
        assert_eq!(wp.discretization().time_step(), None);
        assert_eq!(
            wp.eval().unwrap_err(),
            WaveError::Config(ConfigError::Unset {
                parameter: "sampling_frequency"
            })
        );

        wp.set_sampling_frequency(1000.0).unwrap();
        wp.clear_space_boundary();
        assert_eq!(
            wp.eval().unwrap_err(),
            WaveError::Config(ConfigError::Unset {
                parameter: "space_boundary"
            })
        );

        wp.set_space_boundary(1.0).unwrap();
        wp.clear_spatial_step();
        wp.clear_time_boundary();
        assert_eq!(wp.discretization().spatial_step(), None);
        assert_eq!(wp.discretization().time_boundary(), None);
        wp.set_spatial_step(0.1).unwrap();
        wp.set_time_boundary(0.01).unwrap();
        assert_eq!(wp.data().unwrap().dim(), (11, 11));
    }

    #[test]
    fn eval_requires_a_dispersion_relation() {
        let mut wp = configured(&[100.0]);
        wp.set_dispersion(Vec::new());
        assert_eq!(
            wp.eval().unwrap_err(),
            WaveError::Config(ConfigError::EmptyDispersion)
        );
    }

    #[test]
    fn empty_spectrum_yields_zeros() {
        let mut wp = configured(&[]);
        assert!(wp.discretization().normalize());
        let data = wp.data().unwrap();
        assert_eq!(data.dim(), (11, 11));
        assert!(data.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn normalization_divides_by_peak() {
        let mut raw = configured(&[100.0, 200.0]);
        raw.set_normalize(false);
        assert_abs_diff_eq!(raw.eval().unwrap()[[0, 0]].re, 2.0);

        let mut wp = configured(&[100.0, 200.0]);
        let peak = wp.eval().unwrap().iter().map(|u| u.norm()).fold(0.0, f64::max);
        assert_abs_diff_eq!(peak, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn data_is_negated_imaginary_part() {
        let mut wp = configured(&[100.0]);
        let complex = wp.complex_data().unwrap().clone();
        let data = wp.data().unwrap();
        for (u, v) in complex.iter().zip(data.iter()) {
            assert_eq!(-u.im, *v);
        }
        assert_eq!(data[[0, 0]], 0.0);
    }

    #[test]
    fn envelope_scales_each_row() {
        let mut plain = configured(&[100.0]);
        let mut shaped = configured(&[100.0]);
        shaped.set_envelope(Some(Envelope::new(|x| 1.0 + x)));
        let a = plain.data().unwrap();
        let b = shaped.data().unwrap();
        let xs = shaped.space_samples().unwrap().clone();
        for ((i, j), v) in b.indexed_iter() {
            assert_abs_diff_eq!(*v, a[[i, j]] * (1.0 + xs[j]), epsilon = 1e-12);
        }
    }

    #[test]
    fn domain_change_drops_cache() {
        let mut wp = configured(&[100.0]);
        wp.eval().unwrap();
        wp.set_spatial_step(0.1).unwrap();
        assert!(wp.cached_complex_data().is_some());
        wp.set_spatial_step(0.05).unwrap();
        assert!(wp.cached_complex_data().is_none());
        assert_eq!(wp.data().unwrap().ncols(), 21);
    }

    #[test]
    fn rejected_setter_keeps_state() {
        let mut wp = configured(&[100.0]);
        wp.eval().unwrap();
        assert!(wp.set_spectrum([1.0, f64::NAN]).is_err());
        assert_eq!(wp.spectrum(), &[100.0]);
        assert!(wp.set_sampling_frequency(-1.0).is_err());
        assert!(wp.cached_complex_data().is_some());
    }

    #[test]
    fn merge_appends_without_touching_cache() {
        let d1 = air();
        let d2 = Dispersion::non_dispersive(1500.0).unwrap();
        let mut a = configured(&[100.0]);
        a.set_dispersion([d1.clone()]);
        let b = Wavepacket::builder()
            .dispersion(d2.clone())
            .spectrum([50.0])
            .build()
            .unwrap();
        let before = a.eval().unwrap().clone();
        a.merge(&b);
        assert_eq!(a.spectrum(), &[100.0, 50.0]);
        assert_eq!(a.dispersion(), &[d1, d2]);
        assert_eq!(a.cached_complex_data(), Some(&before));
    }

    #[test]
    fn purge_is_idempotent_and_keeps_configuration() {
        let mut wp = configured(&[100.0]);
        wp.eval().unwrap();
        wp.purge_data();
        wp.purge_data();
        assert!(wp.cached_complex_data().is_none());
        assert!(wp.discretization().cached_time_samples().is_none());
        assert_eq!(wp.spectrum(), &[100.0]);
        assert!(wp.eval().is_ok());
    }

    #[test]
    fn builder_rejects_bad_step() {
        assert!(Wavepacket::builder().spatial_step(0.0).build().is_err());
        assert!(Wavepacket::builder()
            .spectrum([f64::INFINITY])
            .build()
            .is_err());
    }
}
