//! An ordered collection of records saved as one file.

use crate::error::RecordError;
use crate::measured::MeasuredData;
use crate::persist::{load_json, save_json};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// A list of [`MeasuredData`], typically one per acquisition run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataCollection {
    records: Vec<MeasuredData>,
}

impl DataCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: MeasuredData) {
        self.records.push(record);
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&MeasuredData> {
        self.records.last()
    }

    /// The most recent record, mutably.
    pub fn last_mut(&mut self) -> Option<&mut MeasuredData> {
        self.records.last_mut()
    }

    /// Replace the most recent record, returning the old one. Does nothing
    /// on an empty collection and returns `None`.
    pub fn set_last(&mut self, record: MeasuredData) -> Option<MeasuredData> {
        self.records
            .last_mut()
            .map(|slot| std::mem::replace(slot, record))
    }

    /// Write to `path`; see [`MeasuredData::save`].
    pub fn save(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<(), RecordError> {
        save_json(self, path.as_ref(), overwrite)
    }

    /// Read a collection written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        load_json(path.as_ref())
    }
}

impl Deref for DataCollection {
    type Target = [MeasuredData];

    fn deref(&self) -> &[MeasuredData] {
        &self.records
    }
}

impl DerefMut for DataCollection {
    fn deref_mut(&mut self) -> &mut [MeasuredData] {
        &mut self.records
    }
}

impl FromIterator<MeasuredData> for DataCollection {
    fn from_iter<I: IntoIterator<Item = MeasuredData>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DataCollection {
    type Item = MeasuredData;
    type IntoIter = std::vec::IntoIter<MeasuredData>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(fs: f64) -> MeasuredData {
        MeasuredData {
            fs: Some(fs),
            ..MeasuredData::default()
        }
    }

    #[test]
    fn last_tracks_pushes() {
        let mut c = DataCollection::new();
        assert!(c.last().is_none());
        c.push(tagged(1.0));
        c.push(tagged(2.0));
        assert_eq!(c.last().and_then(|m| m.fs), Some(2.0));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn set_last_replaces_in_place() {
        let mut c: DataCollection = [tagged(1.0), tagged(2.0)].into_iter().collect();
        let old = c.set_last(tagged(5.0)).unwrap();
        assert_eq!(old.fs, Some(2.0));
        assert_eq!(c[1].fs, Some(5.0));
        assert!(DataCollection::new().set_last(tagged(1.0)).is_none());
    }

    #[test]
    fn last_mut_edits_the_tail() {
        let mut c: DataCollection = [tagged(1.0)].into_iter().collect();
        if let Some(m) = c.last_mut() {
            m.header.push("re-run".to_string());
        }
        assert_eq!(c[0].header, ["re-run"]);
    }
}
