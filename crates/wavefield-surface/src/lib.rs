//! Rectangular surfaces excited by wavepacket point sources.
//!
//! A [`Surface`] samples a rectangle centred at the origin. Each source is
//! a [`Wavepacket`](wavefield_packet::Wavepacket) evaluated along the
//! radial distance from its position and painted onto the grid through the
//! source's distance field. Reflecting boundaries are emulated with the
//! method of images: a [`BoundaryCondition`] other than `Transparent`
//! expands mirrored copies of every source breadth-first over reflection
//! generations.
//!
//! # Modules
//!
//! - [`geometry`]: [`Position`] and [`HalfExtent`]
//! - [`grid`]: the symmetric [`SurfaceGrid`]
//! - [`boundary`]: [`BoundaryCondition`]
//! - [`region`]: the nine-region classifier and edge mirroring
//! - [`images`]: the [`ImageArena`] of mirrored sources
//! - [`source`]: [`PlacedSource`]
//! - [`surface`]: the [`Surface`] evaluator

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod geometry;
pub mod grid;
pub mod images;
pub mod region;
pub mod source;
pub mod surface;

pub use boundary::BoundaryCondition;
pub use geometry::{HalfExtent, Position};
pub use grid::SurfaceGrid;
pub use images::{ImageArena, ImageIndex, ImageSource};
pub use region::{reflect_position, Edge, Region};
pub use source::PlacedSource;
pub use surface::{Membrane, Surface, SurfaceBuilder};
