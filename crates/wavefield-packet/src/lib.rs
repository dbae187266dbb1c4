//! One-dimensional wave sources for wavefield simulations.
//!
//! A [`Wavepacket`] superposes harmonic waves, one per pair of spectral
//! frequency and [`Dispersion`] relation, over a discretized space-time
//! grid. The free functions in [`kernel`] and [`interp`] are the numeric
//! primitives shared with the 2D surface evaluator.
//!
//! # Modules
//!
//! - [`dispersion`]: frequency → wavenumber relations
//! - [`envelope`]: position → amplitude multipliers
//! - [`kernel`]: causal complex and harmonic travelling waves
//! - [`interp`]: 1D linear lookup tables and matrix interpolation
//! - [`window`]: radially revolved 1D windows
//! - [`wavepacket`]: the [`Wavepacket`] source model

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dispersion;
pub mod envelope;
pub mod interp;
pub mod kernel;
pub mod wavepacket;
pub mod window;

pub use dispersion::{Dispersion, PlateProperties};
pub use envelope::Envelope;
pub use interp::{interp, interp_onto_grid, interp_onto_line, LinearLookup};
pub use kernel::{complex_wave, harmonic_wave};
pub use wavepacket::{Wavepacket, WavepacketBuilder};
pub use window::{RadialWindow, Window};
