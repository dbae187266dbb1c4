//! The [`Surface`] evaluator.
//!
//! Each source is a private copy of a [`Wavepacket`] reconfigured onto a
//! radial domain: from `0` (or the closest approach, for a source outside
//! the grid) to the farthest grid node. Evaluation runs every copy,
//! interpolates its radial profile onto the source's distance field at each
//! time sample, and sums the contributions of real and image sources.

use crate::boundary::BoundaryCondition;
use crate::geometry::{HalfExtent, Position};
use crate::grid::SurfaceGrid;
use crate::images::ImageArena;
use crate::source::PlacedSource;
use log::debug;
use ndarray::{Array1, Array2, Array3};
use wavefield_core::{
    normalize_real, padded_arange, require_positive, ArgumentError, ConfigError, Interval,
    InvariantViolation, WaveError,
};
use wavefield_packet::{LinearLookup, Wavepacket};

/// A rectangular surface centred at the origin, excited by point sources.
///
/// The sampling frequency, spatial step, extent and time window are fixed
/// at build time. Sources, the boundary condition and the normalization
/// flag may change between evaluations; every [`eval`](Self::eval)
/// recomputes from scratch.
///
/// ```
/// use wavefield_packet::{Dispersion, Wavepacket};
/// use wavefield_surface::Surface;
///
/// let packet = Wavepacket::builder()
///     .dispersion(Dispersion::non_dispersive(343.0).unwrap())
///     .spectrum([100.0])
///     .build()
///     .unwrap();
/// let mut surface = Surface::builder()
///     .sampling_frequency(1000.0)
///     .spatial_step(0.1)
///     .half_extent(1.0)
///     .time_boundary(0.01)
///     .source(packet, (0.0, 0.0))
///     .build()
///     .unwrap();
/// assert_eq!(surface.eval().unwrap().dim(), (21, 21, 10));
/// ```
#[derive(Clone, Debug)]
pub struct Surface {
    sampling_frequency: f64,
    spatial_step: f64,
    time_boundary: Interval,
    time: Array1<f64>,
    grid: SurfaceGrid,
    normalize: bool,
    boundary: BoundaryCondition,
    sources: Vec<PlacedSource>,
    reflected: Vec<PlacedSource>,
    results: Option<Array3<f64>>,
}

/// The evaluator under its older name.
pub type Membrane = Surface;

/// Builder for [`Surface`].
///
/// Required: `sampling_frequency`, `spatial_step`, `half_extent`,
/// `time_boundary`.
pub struct SurfaceBuilder {
    sampling_frequency: Option<f64>,
    spatial_step: Option<f64>,
    half_extent: Option<HalfExtent>,
    time_boundary: Option<Interval>,
    normalize: bool,
    boundary: BoundaryCondition,
    sources: Vec<(Wavepacket, Position)>,
}

impl Surface {
    /// Create a new builder for configuring a `Surface`.
    pub fn builder() -> SurfaceBuilder {
        SurfaceBuilder {
            sampling_frequency: None,
            spatial_step: None,
            half_extent: None,
            time_boundary: None,
            normalize: true,
            boundary: BoundaryCondition::Transparent,
            sources: Vec::new(),
        }
    }

    /// Sampling frequency in Hz.
    pub fn sampling_frequency(&self) -> f64 {
        self.sampling_frequency
    }

    /// Time step in seconds.
    pub fn time_step(&self) -> f64 {
        1.0 / self.sampling_frequency
    }

    /// Spatial step in metres.
    pub fn spatial_step(&self) -> f64 {
        self.spatial_step
    }

    /// Time window as configured. Samples cover `[t0, t1)`.
    pub fn time_boundary(&self) -> Interval {
        self.time_boundary
    }

    /// The sampling grid.
    pub fn grid(&self) -> &SurfaceGrid {
        &self.grid
    }

    /// Column coordinates.
    pub fn x_vect(&self) -> &Array1<f64> {
        self.grid.x_vect()
    }

    /// Row coordinates.
    pub fn y_vect(&self) -> &Array1<f64> {
        self.grid.y_vect()
    }

    /// Meshgrid of the coordinates.
    pub fn xy_grid(&self) -> (Array2<f64>, Array2<f64>) {
        self.grid.xy_grid()
    }

    /// Time samples.
    pub fn time_vect(&self) -> &Array1<f64> {
        &self.time
    }

    /// Whether results are divided by their peak magnitude.
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// Set the normalization flag for the next evaluation.
    pub fn set_normalize(&mut self, normalize: bool) {
        self.normalize = normalize;
    }

    /// Current boundary condition.
    pub fn boundary_condition(&self) -> BoundaryCondition {
        self.boundary
    }

    /// Change the boundary condition and rebuild every image source from
    /// the real ones.
    pub fn set_boundary_condition(
        &mut self,
        boundary: BoundaryCondition,
    ) -> Result<(), WaveError> {
        let mut reflected = Vec::new();
        for source in &self.sources {
            reflected.extend(self.images_of(&source.wavepacket, source.position, boundary)?);
        }
        self.boundary = boundary;
        self.reflected = reflected;
        Ok(())
    }

    /// Real sources in insertion order.
    pub fn sources(&self) -> &[PlacedSource] {
        &self.sources
    }

    /// Image sources, grouped per real source in generation order.
    pub fn reflected_sources(&self) -> &[PlacedSource] {
        &self.reflected
    }

    /// Add a copy of `wavepacket` at `position`, plus its images under the
    /// current boundary condition. The caller's wavepacket is not touched.
    ///
    /// # Errors
    ///
    /// [`ArgumentError`] for a non-finite position.
    pub fn add_source(
        &mut self,
        wavepacket: &Wavepacket,
        position: impl Into<Position>,
    ) -> Result<(), WaveError> {
        let position = position.into().validated()?;
        let real = self.place(wavepacket, position, 0)?;
        let images = self.images_of(wavepacket, position, self.boundary)?;
        self.sources.push(real);
        self.reflected.extend(images);
        Ok(())
    }

    fn images_of(
        &self,
        wavepacket: &Wavepacket,
        origin: Position,
        boundary: BoundaryCondition,
    ) -> Result<Vec<PlacedSource>, WaveError> {
        let arena = ImageArena::expand(origin, self.grid.edges(), boundary.reflection_depth())?;
        arena
            .iter()
            .map(|image| self.place(wavepacket, image.position, image.generation))
            .collect()
    }

    fn place(
        &self,
        wavepacket: &Wavepacket,
        position: Position,
        generation: u32,
    ) -> Result<PlacedSource, WaveError> {
        let distance = self.grid.distance_field(position);
        let d_max = distance.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let d_min = if self.grid.contains(position) {
            0.0
        } else {
            distance.iter().copied().fold(f64::INFINITY, f64::min)
        };

        let dt = self.time_step();
        let t_last = self.time.last().copied().unwrap_or(self.time_boundary.lo);
        let mut copy = wavepacket.clone();
        copy.purge_data();
        copy.set_spatial_step(self.spatial_step)?;
        copy.set_sampling_frequency(self.sampling_frequency)?;
        copy.set_space_boundary((d_min, d_max + self.spatial_step / 4.0))?;
        copy.set_time_boundary((self.time_boundary.lo, t_last + dt / 4.0))?;

        Ok(PlacedSource {
            wavepacket: copy,
            position,
            distance,
            generation,
        })
    }

    /// Evaluate the displacement, shape `(y samples, x samples, t samples)`.
    ///
    /// # Errors
    ///
    /// Propagates a source's configuration error, and reports an
    /// [`InvariantViolation`] if a source's time axis disagrees with the
    /// surface's.
    pub fn eval(&mut self) -> Result<&Array3<f64>, WaveError> {
        let (ny, nx) = self.grid.shape();
        let nt = self.time.len();
        let mut acc = Array3::zeros((ny, nx, nt));

        for placed in self.sources.iter_mut().chain(self.reflected.iter_mut()) {
            let profile = placed.wavepacket.data()?;
            if profile.nrows() != nt {
                return Err(InvariantViolation::new(format!(
                    "source at {} produced {} time samples, surface has {}",
                    placed.position,
                    profile.nrows(),
                    nt
                ))
                .into());
            }
            let radii = placed.wavepacket.space_samples()?;
            let lookup = LinearLookup::new(radii, placed.distance.iter().copied())?;
            lookup.accumulate_into(&profile, &mut acc)?;
            placed.wavepacket.purge_data();
        }

        if self.normalize {
            normalize_real(&mut acc);
        }

        debug!(
            "surface evaluated: shape ({ny}, {nx}, {nt}), {} sources, {} images",
            self.sources.len(),
            self.reflected.len()
        );
        Ok(self.results.insert(acc))
    }

    /// Results of the last evaluation.
    pub fn results(&self) -> Option<&Array3<f64>> {
        self.results.as_ref()
    }
}

impl SurfaceBuilder {
    /// Set the sampling frequency in Hz.
    pub fn sampling_frequency(mut self, fs: f64) -> Self {
        self.sampling_frequency = Some(fs);
        self
    }

    /// Set the spatial step in metres.
    pub fn spatial_step(mut self, dx: f64) -> Self {
        self.spatial_step = Some(dx);
        self
    }

    /// Set the half widths; a scalar applies to both axes.
    pub fn half_extent(mut self, half: impl Into<HalfExtent>) -> Self {
        self.half_extent = Some(half.into());
        self
    }

    /// Set the time window. A scalar `T` means `(0, T)`.
    pub fn time_boundary(mut self, boundary: impl Into<Interval>) -> Self {
        self.time_boundary = Some(boundary.into());
        self
    }

    /// Divide results by their peak magnitude (default: true).
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the boundary condition (default: transparent).
    pub fn boundary(mut self, boundary: BoundaryCondition) -> Self {
        self.boundary = boundary;
        self
    }

    /// Add a source. May be called more than once.
    pub fn source(mut self, wavepacket: Wavepacket, position: impl Into<Position>) -> Self {
        self.sources.push((wavepacket, position.into()));
        self
    }

    /// Build the surface and place every source.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Unset`] for a missing required parameter, or an
    /// argument error for a non-positive step or extent, a time window
    /// holding no sample, or a non-finite source position.
    pub fn build(self) -> Result<Surface, WaveError> {
        let unset = |parameter| ConfigError::Unset { parameter };
        let fs = self.sampling_frequency.ok_or(unset("sampling_frequency"))?;
        let dx = self.spatial_step.ok_or(unset("spatial_step"))?;
        let half = self.half_extent.ok_or(unset("space_boundary"))?;
        let time_boundary = self.time_boundary.ok_or(unset("time_boundary"))?;

        let fs = require_positive("sampling_frequency", fs)?;
        let time_boundary = time_boundary.validated("time_boundary")?;
        let grid = SurfaceGrid::new(half, dx)?;
        let dt = 1.0 / fs;
        let time = padded_arange(Interval::new(time_boundary.lo, time_boundary.hi - dt), dt);
        if time.is_empty() {
            return Err(ArgumentError::NonPositive {
                parameter: "time_boundary",
                value: time_boundary.width(),
            }
            .into());
        }

        let mut surface = Surface {
            sampling_frequency: fs,
            spatial_step: dx,
            time_boundary,
            time,
            grid,
            normalize: self.normalize,
            boundary: self.boundary,
            sources: Vec::new(),
            reflected: Vec::new(),
            results: None,
        };
        for (wavepacket, position) in &self.sources {
            surface.add_source(wavepacket, *position)?;
        }
        debug!(
            "surface built: grid {:?}, {} time samples, boundary {}",
            surface.grid.shape(),
            surface.time.len(),
            surface.boundary
        );
        Ok(surface)
    }
}
