//! Reference sources and surfaces.
//!
//! - [`air`]: non-dispersive relation at the speed of sound
//! - [`tone`]: a single-frequency wavepacket with no domain set
//! - [`configured_tone`]: the same, discretized over `(0, 1)` m and `(0, 0.01)` s
//! - [`unit_surface`]: the 2 m × 2 m reference surface

use wavefield_packet::{Dispersion, Wavepacket};
use wavefield_surface::{BoundaryCondition, Surface};

/// Speed of sound in air, m/s.
pub const SPEED_OF_SOUND: f64 = 343.0;

/// `k = f / 343`.
pub fn air() -> Dispersion {
    Dispersion::named("air", |f| f / SPEED_OF_SOUND)
}

/// One frequency in air, domain unset. Placing it on a surface supplies
/// the domain.
pub fn tone(freq: f64) -> Wavepacket {
    Wavepacket::builder()
        .dispersion(air())
        .spectrum([freq])
        .build()
        .expect("reference tone is valid")
}

/// One frequency in air at `fs = 1 kHz`, `dx = 0.1 m`, over `(0, 1)` m
/// and `(0, 0.01)` s.
pub fn configured_tone(freq: f64) -> Wavepacket {
    Wavepacket::builder()
        .dispersion(air())
        .spectrum([freq])
        .sampling_frequency(1000.0)
        .time_boundary(0.01)
        .spatial_step(0.1)
        .space_boundary(1.0)
        .build()
        .expect("reference tone is valid")
}

/// Half widths 1 m, `dx = 0.1 m`, `fs = 1 kHz`, `(0, 0.01)` s,
/// normalization off; 21 × 21 × 10 samples.
pub fn unit_surface(boundary: BoundaryCondition) -> Surface {
    Surface::builder()
        .sampling_frequency(1000.0)
        .spatial_step(0.1)
        .half_extent(1.0)
        .time_boundary(0.01)
        .normalize(false)
        .boundary(boundary)
        .build()
        .expect("reference surface is valid")
}
