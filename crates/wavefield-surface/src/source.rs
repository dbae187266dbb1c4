//! Sources placed on a surface.

use crate::geometry::Position;
use ndarray::Array2;
use wavefield_packet::Wavepacket;

/// A wavepacket at a position, reconfigured onto the radial domain that
/// spans the surface as seen from that position.
#[derive(Clone, Debug)]
pub struct PlacedSource {
    pub(crate) wavepacket: Wavepacket,
    pub(crate) position: Position,
    pub(crate) distance: Array2<f64>,
    pub(crate) generation: u32,
}

impl PlacedSource {
    /// The surface's own copy of the wavepacket.
    pub fn wavepacket(&self) -> &Wavepacket {
        &self.wavepacket
    }

    /// Where the source sits.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Distance from the source to every grid node.
    pub fn distance_field(&self) -> &Array2<f64> {
        &self.distance
    }

    /// `0` for a real source, the reflection generation for an image.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether this is an image source.
    pub fn is_image(&self) -> bool {
        self.generation > 0
    }
}
