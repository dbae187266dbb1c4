//! Error types for the wavefield toolkit.
//!
//! Organized by failure class: configuration (a required parameter is
//! missing), argument (a supplied value is unusable) and invariant
//! (internal logic reached an impossible state). [`WaveError`] wraps all
//! three so `?` carries them across crate boundaries.

use std::error::Error;
use std::fmt;

/// A required parameter was not set before an operation that needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The named parameter is unset.
    Unset {
        /// Name of the missing parameter.
        parameter: &'static str,
    },
    /// Evaluation was requested with no dispersion relation.
    EmptyDispersion,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset { parameter } => write!(f, "`{parameter}` is not set"),
            Self::EmptyDispersion => {
                write!(f, "at least one dispersion relation is needed to evaluate")
            }
        }
    }
}

impl Error for ConfigError {}

/// A supplied value has the wrong shape or is not a usable number.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentError {
    /// A value that must be finite was NaN or infinite.
    NonFinite {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value that must be strictly positive was zero or negative.
    NonPositive {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Text that does not name a boundary condition.
    UnknownBoundaryCondition {
        /// The rejected input.
        input: String,
    },
    /// Text that does not name a window.
    UnknownWindow {
        /// The rejected input.
        input: String,
    },
    /// An interpolation table with no samples.
    EmptyTable,
    /// Two arrays that must agree in length do not.
    ShapeMismatch {
        /// Expected length.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { parameter, value } => {
                write!(f, "`{parameter}` must be a finite number, got {value}")
            }
            Self::NonPositive { parameter, value } => {
                write!(f, "`{parameter}` must be greater than 0, got {value}")
            }
            Self::UnknownBoundaryCondition { input } => write!(
                f,
                "boundary condition should be 'free', 'transparent' or an integer, got '{input}'"
            ),
            Self::UnknownWindow { input } => write!(f, "unknown window '{input}'"),
            Self::EmptyTable => write!(f, "interpolation table has no samples"),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch: expected length {expected}, found {found}")
            }
        }
    }
}

impl Error for ArgumentError {}

/// Internal logic reached a state that correct geometry never produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What went wrong.
    pub reason: String,
}

impl InvariantViolation {
    /// Build a violation from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invariant violated: {}", self.reason)
    }
}

impl Error for InvariantViolation {}

/// Any failure raised by the wavefield core.
#[derive(Clone, Debug, PartialEq)]
pub enum WaveError {
    /// A required parameter is unset.
    Config(ConfigError),
    /// A supplied value is unusable.
    Argument(ArgumentError),
    /// Internal logic failed.
    Invariant(InvariantViolation),
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Argument(e) => write!(f, "invalid argument: {e}"),
            Self::Invariant(e) => write!(f, "{e}"),
        }
    }
}

impl Error for WaveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Argument(e) => Some(e),
            Self::Invariant(e) => Some(e),
        }
    }
}

impl From<ConfigError> for WaveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArgumentError> for WaveError {
    fn from(e: ArgumentError) -> Self {
        Self::Argument(e)
    }
}

impl From<InvariantViolation> for WaveError {
    fn from(e: InvariantViolation) -> Self {
        Self::Invariant(e)
    }
}

/// Reject NaN and infinities.
pub fn require_finite(parameter: &'static str, value: f64) -> Result<f64, ArgumentError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArgumentError::NonFinite { parameter, value })
    }
}

/// Reject non-finite, zero and negative values.
pub fn require_positive(parameter: &'static str, value: f64) -> Result<f64, ArgumentError> {
    let value = require_finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ArgumentError::NonPositive { parameter, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_names_the_parameter() {
        let e = ConfigError::Unset {
            parameter: "sampling_frequency",
        };
        assert_eq!(e.to_string(), "`sampling_frequency` is not set");
    }

    #[test]
    fn wave_error_exposes_source() {
        let e: WaveError = InvariantViolation::new("no region").into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "invariant violated: no region");
    }

    #[test]
    fn positive_check_rejects_zero_and_nan() {
        assert!(matches!(
            require_positive("dx", 0.0),
            Err(ArgumentError::NonPositive { .. })
        ));
        assert!(matches!(
            require_positive("dx", f64::NAN),
            Err(ArgumentError::NonFinite { .. })
        ));
        assert_eq!(require_positive("dx", 0.5), Ok(0.5));
    }
}
