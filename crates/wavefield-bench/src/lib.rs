//! Benchmark profiles for the wavefield simulation toolkit.
//!
//! - [`reference_packet`]: a five-tone wavepacket over 2 m and 20 ms
//! - [`reference_surface`]: a 1 m × 1 m plate, 101 × 101 × 50 samples
//! - [`source_positions`]: deterministic source placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use wavefield_core::WaveError;
use wavefield_packet::{Dispersion, PlateProperties, Wavepacket};
use wavefield_surface::{BoundaryCondition, Position, Surface};

/// 1 mm aluminium.
pub const ALUMINIUM_1MM: PlateProperties = PlateProperties {
    thickness: 0.001,
    youngs_modulus: 70e9,
    density: 2700.0,
    poisson_ratio: 0.33,
};

/// Five tones from 1 to 5 kHz in air, `fs = 50 kHz`, `dx = 5 mm`,
/// over `(0, 2)` m and `(0, 0.02)` s: 1001 × 401 samples.
pub fn reference_packet() -> Result<Wavepacket, WaveError> {
    let wp = Wavepacket::builder()
        .dispersion(Dispersion::non_dispersive(343.0)?)
        .spectrum((1..=5).map(|k| 1000.0 * k as f64))
        .sampling_frequency(50_000.0)
        .time_boundary(0.02)
        .spatial_step(0.005)
        .space_boundary(2.0)
        .build()?;
    Ok(wp)
}

/// Flexural waves in [`ALUMINIUM_1MM`] from `sources` tone bursts at
/// 2 kHz on a plate with half widths 0.5 m, `dx = 1 cm`, `fs = 10 kHz`,
/// `(0, 5)` ms.
pub fn reference_surface(
    seed: u64,
    sources: usize,
    boundary: BoundaryCondition,
) -> Result<Surface, WaveError> {
    let plate = Dispersion::flexural_plate(ALUMINIUM_1MM)?;
    let tone = Wavepacket::builder()
        .dispersion(plate)
        .spectrum([2000.0])
        .build()?;

    let mut builder = Surface::builder()
        .sampling_frequency(10_000.0)
        .spatial_step(0.01)
        .half_extent(0.5)
        .time_boundary(0.005)
        .normalize(true)
        .boundary(boundary);
    for p in source_positions(sources, seed, 0.5) {
        builder = builder.source(tone.clone(), p);
    }
    builder.build()
}

/// `n` positions inside `[-half, half]²`, spread by a simple hash of the
/// seed.
pub fn source_positions(n: usize, seed: u64, half: f64) -> Vec<Position> {
    const GRID: u64 = 1 << 16;
    let unit = |v: u64| (v % GRID) as f64 / (GRID - 1) as f64;
    (0..n as u64)
        .map(|i| {
            let a = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            let b = a.wrapping_mul(2862933555777941757).rotate_left(17);
            Position::new(
                half * (2.0 * unit(a >> 16) - 1.0),
                half * (2.0 * unit(b >> 16) - 1.0),
            )
        })
        .collect()
}
