//! Closed intervals used for time and space boundaries.

use crate::error::{require_finite, ArgumentError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered pair `(lo, hi)` bounding a time or space axis.
///
/// A bare scalar converts to `(0, scalar)`, matching the convention that a
/// single length or duration starts at the origin.
///
/// ```
/// use wavefield_core::Interval;
///
/// assert_eq!(Interval::from(2.5), Interval::new(0.0, 2.5));
/// assert_eq!(Interval::from((-1.0, 1.0)).width(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower endpoint.
    pub lo: f64,
    /// Upper endpoint.
    pub hi: f64,
}

impl Interval {
    /// Create an interval from its endpoints. No ordering is enforced; an
    /// interval with `hi < lo` discretizes to an empty axis.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// `hi - lo`.
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Whether `value` lies in `[lo, hi]`.
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Reject intervals with NaN or infinite endpoints.
    pub fn validated(self, parameter: &'static str) -> Result<Self, ArgumentError> {
        require_finite(parameter, self.lo)?;
        require_finite(parameter, self.hi)?;
        Ok(self)
    }
}

impl From<f64> for Interval {
    fn from(hi: f64) -> Self {
        Self::new(0.0, hi)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((lo, hi): (f64, f64)) -> Self {
        Self::new(lo, hi)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
