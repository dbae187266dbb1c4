//! Dispersion relations: frequency in Hz → wavenumber in 1/m.
//!
//! The wavenumber is in cycles per metre; the travelling-wave kernel
//! multiplies it by `2π` to obtain the angular wavenumber.

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;
use wavefield_core::{require_positive, ArgumentError};

type Relation = dyn Fn(f64) -> f64 + Send + Sync;

/// A shared, immutable dispersion relation.
///
/// Cloning is cheap and clones compare equal: equality is identity of the
/// underlying function, so a relation merged from one wavepacket into
/// another still compares equal to the original.
///
/// ```
/// use wavefield_packet::Dispersion;
///
/// let air = Dispersion::non_dispersive(343.0).unwrap();
/// assert!((air.wavenumber(343.0) - 1.0).abs() < 1e-12);
/// assert_eq!(air.clone(), air);
/// ```
#[derive(Clone)]
pub struct Dispersion {
    label: String,
    relation: Arc<Relation>,
}

/// Material and geometry of a thin isotropic plate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateProperties {
    /// Thickness in metres.
    pub thickness: f64,
    /// Young's modulus in pascals.
    pub youngs_modulus: f64,
    /// Density in kg/m³.
    pub density: f64,
    /// Poisson's ratio.
    pub poisson_ratio: f64,
}

impl Dispersion {
    /// Wrap an arbitrary relation.
    pub fn new(relation: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::named("custom", relation)
    }

    /// Wrap an arbitrary relation under a label shown by `Debug`.
    pub fn named(
        label: impl Into<String>,
        relation: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            relation: Arc::new(relation),
        }
    }

    /// `k = f / c`: every frequency travels at `speed` m/s.
    pub fn non_dispersive(speed: f64) -> Result<Self, ArgumentError> {
        let c = require_positive("speed", speed)?;
        Ok(Self::named(format!("non-dispersive c={c}"), move |f| f / c))
    }

    /// Kirchhoff flexural (bending) waves in a thin plate:
    ///
    /// ```text
    /// D = E h³ / (12 (1 - ν²))
    /// k = (ρ h ω² / D)^(1/4) / 2π
    /// ```
    pub fn flexural_plate(plate: PlateProperties) -> Result<Self, ArgumentError> {
        let h = require_positive("thickness", plate.thickness)?;
        let e = require_positive("youngs_modulus", plate.youngs_modulus)?;
        let rho = require_positive("density", plate.density)?;
        let nu = plate.poisson_ratio;
        let stiffness = require_positive(
            "bending_stiffness",
            e * h.powi(3) / (12.0 * (1.0 - nu * nu)),
        )?;
        let mass = rho * h;
        Ok(Self::named(format!("flexural plate h={h}"), move |f| {
            let w = 2.0 * PI * f;
            (mass * w * w / stiffness).powf(0.25) / (2.0 * PI)
        }))
    }

    /// Wavenumber in 1/m at frequency `f` in Hz.
    pub fn wavenumber(&self, f: f64) -> f64 {
        (self.relation)(f)
    }

    /// Label given at construction.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Dispersion {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.relation, &other.relation)
    }
}

impl fmt::Debug for Dispersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dispersion").field(&self.label).finish()
    }
}
