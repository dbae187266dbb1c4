//! Core types for the wavefield simulation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error taxonomy shared by every other crate, the [`Interval`] value type,
//! the lazily cached [`Axis`] discretizer and the [`Discretization`] state
//! held by every simulated entity.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod discretization;
pub mod error;
pub mod interval;
pub mod normalize;

pub use axis::{padded_arange, Axis};
pub use discretization::Discretization;
pub use error::{
    require_finite, require_positive, ArgumentError, ConfigError, InvariantViolation, WaveError,
};
pub use interval::Interval;
pub use normalize::{normalize_complex, normalize_real, NORMALIZATION_FLOOR};
