//! Records of measured and simulated data.
//!
//! [`MeasuredData`] holds sampled data with its axes and metadata;
//! [`DataCollection`] is an ordered list of them. Both persist to JSON and
//! refuse to overwrite an existing file unless asked to.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod error;
pub mod measured;
mod persist;

pub use collection::DataCollection;
pub use error::RecordError;
pub use measured::MeasuredData;
