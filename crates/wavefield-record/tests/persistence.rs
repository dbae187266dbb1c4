//! Saving and loading records through the filesystem.

use std::fs;
use tempfile::tempdir;
use wavefield_record::{DataCollection, MeasuredData, RecordError};
use wavefield_surface::BoundaryCondition;
use wavefield_test_utils::fixtures::{tone, unit_surface};

fn simulated() -> MeasuredData {
    let mut surface = unit_surface(BoundaryCondition::Free);
    surface.add_source(&tone(100.0), (0.2, -0.3)).unwrap();
    surface.eval().unwrap();
    MeasuredData::from_surface(&surface)
}

#[test]
fn surface_snapshot_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    let record = simulated();
    assert_eq!(record.data.as_ref().map(|d| d.shape().to_vec()), Some(vec![21, 21, 10]));
    assert_eq!(record.metadata["boundary_condition"], "free");
    assert_eq!(record.metadata["image_sources"], 4);

    record.save(&path, false).unwrap();
    let back = MeasuredData::load(&path).unwrap();
    assert_eq!(back, record);
}

#[test]
fn refuses_to_clobber_without_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clobber.json");
    let first = MeasuredData {
        fs: Some(1.0),
        ..MeasuredData::default()
    };
    first.save(&path, false).unwrap();

    let second = MeasuredData {
        fs: Some(2.0),
        ..MeasuredData::default()
    };
    assert!(matches!(
        second.save(&path, false),
        Err(RecordError::AlreadyExists { .. })
    ));
    assert_eq!(MeasuredData::load(&path).unwrap().fs, Some(1.0));

    second.save(&path, true).unwrap();
    assert_eq!(MeasuredData::load(&path).unwrap().fs, Some(2.0));
}

#[test]
fn collection_round_trips_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("collection.json");
    let mut runs = DataCollection::new();
    runs.push(simulated());
    runs.push(MeasuredData {
        header: vec!["acquired".to_string()],
        fs: Some(51_200.0),
        ..MeasuredData::default()
    });
    runs.save(&path, true).unwrap();

    let back = DataCollection::load(&path).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back.last().map(|m| m.header.clone()), Some(vec!["acquired".to_string()]));
    assert_eq!(back, runs);
}

#[test]
fn missing_and_malformed_files_are_reported() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        MeasuredData::load(&missing),
        Err(RecordError::Io { .. })
    ));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "not json").unwrap();
    assert!(matches!(
        MeasuredData::load(&garbage),
        Err(RecordError::Format { .. })
    ));
}

#[test]
fn unevaluated_surface_has_no_data() {
    let surface = unit_surface(BoundaryCondition::Transparent);
    let record = MeasuredData::from_surface(&surface);
    assert!(record.data.is_none());
    assert_eq!(record.x_vect.map(|x| x.len()), Some(21));
}
