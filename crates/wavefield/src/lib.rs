//! Wavefield: analytic wave superposition on 1D media and 2D surfaces.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all wavefield sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use wavefield::prelude::*;
//!
//! // A 100 Hz tone travelling at the speed of sound.
//! let tone = Wavepacket::builder()
//!     .dispersion(Dispersion::non_dispersive(343.0).unwrap())
//!     .spectrum([100.0])
//!     .build()
//!     .unwrap();
//!
//! // A 2 m × 2 m surface with one generation of edge reflections.
//! let mut surface = Surface::builder()
//!     .sampling_frequency(1000.0)
//!     .spatial_step(0.1)
//!     .half_extent(1.0)
//!     .time_boundary(0.01)
//!     .normalize(false)
//!     .boundary(BoundaryCondition::Free)
//!     .source(tone, (0.0, 0.0))
//!     .build()
//!     .unwrap();
//!
//! let results = surface.eval().unwrap();
//! assert_eq!(results.dim(), (21, 21, 10));
//! assert_eq!(results[[10, 10, 0]], 0.0);
//!
//! let record = MeasuredData::from_surface(&surface);
//! assert_eq!(record.fs, Some(1000.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wavefield-core` | Errors, intervals, discretization, normalization |
//! | [`packet`] | `wavefield-packet` | Dispersion relations, wave kernels, interpolation, `Wavepacket` |
//! | [`surface`] | `wavefield-surface` | Grids, boundary conditions, image sources, `Surface` |
//! | [`record`] | `wavefield-record` | `MeasuredData` and `DataCollection` persistence |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, intervals and discretization (`wavefield-core`).
///
/// Contains the [`types::Discretization`] state shared by every simulated
/// entity and the [`types::WaveError`] umbrella error.
pub use wavefield_core as types;

/// One-dimensional sources (`wavefield-packet`).
///
/// [`packet::Wavepacket`] plus the numeric primitives
/// [`packet::complex_wave`] and [`packet::interp_onto_grid`].
pub use wavefield_packet as packet;

/// Two-dimensional surfaces (`wavefield-surface`).
///
/// [`surface::Surface`] evaluates point sources on a grid; reflections are
/// configured with [`surface::BoundaryCondition`].
pub use wavefield_surface as surface;

/// Measured and simulated data records (`wavefield-record`).
pub use wavefield_record as record;

/// Common imports for typical wavefield usage.
///
/// ```rust
/// use wavefield::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use wavefield_core::{ConfigError, Discretization, Interval, WaveError};

    // Sources
    pub use wavefield_packet::{Dispersion, Envelope, RadialWindow, Wavepacket, Window};

    // Surfaces
    pub use wavefield_surface::{BoundaryCondition, HalfExtent, Membrane, Position, Surface};

    // Records
    pub use wavefield_record::{DataCollection, MeasuredData};
}
