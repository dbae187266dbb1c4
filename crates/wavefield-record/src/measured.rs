//! A single measured or simulated data set.

use crate::error::RecordError;
use crate::persist::{load_json, save_json};
use indexmap::IndexMap;
use ndarray::{Array1, ArrayD};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;
use wavefield_surface::Surface;

/// Sampled displacement data with its axes and free-form metadata.
///
/// Acquired and simulated data share this container so they can be
/// compared directly. Every field is optional; `data` may have any number
/// of dimensions, `(y, x, t)` for surface data.
///
/// Records are stored as JSON. Non-finite samples do not survive a round
/// trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasuredData {
    /// Free-text description lines.
    pub header: Vec<String>,
    /// Sampling frequency in Hz.
    pub fs: Option<f64>,
    /// Spatial step in metres.
    pub dx: Option<f64>,
    /// Column coordinates.
    pub x_vect: Option<Array1<f64>>,
    /// Row coordinates.
    pub y_vect: Option<Array1<f64>>,
    /// Time samples.
    pub time_vect: Option<Array1<f64>>,
    /// The samples.
    pub data: Option<ArrayD<f64>>,
    /// Ordered key/value annotations.
    pub metadata: IndexMap<String, Value>,
}

impl MeasuredData {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a surface's axes and its last results. `data` stays `None`
    /// if the surface has not been evaluated.
    pub fn from_surface(surface: &Surface) -> Self {
        let mut metadata = IndexMap::new();
        metadata.insert(
            "boundary_condition".to_string(),
            json!(surface.boundary_condition().to_string()),
        );
        metadata.insert("normalize".to_string(), json!(surface.normalize()));
        metadata.insert(
            "sources".to_string(),
            surface
                .sources()
                .iter()
                .map(|s| json!([s.position().x, s.position().y]))
                .collect(),
        );
        metadata.insert(
            "image_sources".to_string(),
            json!(surface.reflected_sources().len()),
        );
        Self {
            header: vec!["-*- Simulated surface -*-".to_string()],
            fs: Some(surface.sampling_frequency()),
            dx: Some(surface.spatial_step()),
            x_vect: Some(surface.x_vect().clone()),
            y_vect: Some(surface.y_vect().clone()),
            time_vect: Some(surface.time_vect().clone()),
            data: surface.results().map(|r| r.clone().into_dyn()),
            metadata,
        }
    }

    /// Write to `path`. With `overwrite == false` an existing file is left
    /// untouched and [`RecordError::AlreadyExists`] is returned.
    pub fn save(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<(), RecordError> {
        save_json(self, path.as_ref(), overwrite)
    }

    /// Read a record written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        load_json(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn serializes_through_json() {
        let mut m = MeasuredData::new();
        m.fs = Some(1000.0);
        m.x_vect = Some(array![0.0, 0.5]);
        m.data = Some(array![[1.0, 2.0], [3.0, 4.0]].into_dyn());
        m.metadata.insert("operator".to_string(), json!("bench 3"));
        let text = serde_json::to_string(&m).unwrap();
        let back: MeasuredData = serde_json::from_str(&text).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn metadata_keeps_insertion_order() {
        let mut m = MeasuredData::new();
        for key in ["z", "a", "m"] {
            m.metadata.insert(key.to_string(), Value::Null);
        }
        let keys: Vec<_> = m.metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
