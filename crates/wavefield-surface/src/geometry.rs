//! Points and rectangle extents in the surface plane.

use serde::{Deserialize, Serialize};
use std::fmt;
use wavefield_core::{require_finite, require_positive, ArgumentError};

/// A point `(x, y)` in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `(x, y)`.
    pub fn distance_to(self, x: f64, y: f64) -> f64 {
        (x - self.x).hypot(y - self.y)
    }

    /// Reject NaN and infinite coordinates.
    pub fn validated(self) -> Result<Self, ArgumentError> {
        require_finite("position.x", self.x)?;
        require_finite("position.y", self.y)?;
        Ok(self)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Half widths of a rectangle centred at the origin: it spans
/// `[-x, x] × [-y, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HalfExtent {
    /// Half width along x.
    pub x: f64,
    /// Half width along y.
    pub y: f64,
}

impl HalfExtent {
    /// Validated half widths; both must be finite and > 0.
    pub fn new(x: f64, y: f64) -> Result<Self, ArgumentError> {
        Ok(Self {
            x: require_positive("half_extent.x", x)?,
            y: require_positive("half_extent.y", y)?,
        })
    }

    /// Whether `p` lies in the closed rectangle.
    pub fn contains(&self, p: Position) -> bool {
        (-self.x..=self.x).contains(&p.x) && (-self.y..=self.y).contains(&p.y)
    }
}

impl From<f64> for HalfExtent {
    fn from(half: f64) -> Self {
        Self { x: half, y: half }
    }
}

impl From<(f64, f64)> for HalfExtent {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
