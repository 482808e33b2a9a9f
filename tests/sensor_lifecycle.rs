//! End-to-end lifecycle for a sensor channel cell: direct population,
//! working-value correction, relabeling, and reconstruction from a saved
//! session record on disk.

use adcp_sensors::{load_record, save_record, NumericField, SensorData, SensorRecord};
use tempfile::tempdir;

#[test]
fn populate_correct_and_relabel() {
    let mut cell = SensorData::new();
    assert_eq!(cell.data(), None);
    assert_eq!(cell.original_data(), None);
    assert_eq!(cell.source(), None);

    cell.populate_data(vec![1.0, 2.0, 3.0], "internal");
    assert_eq!(cell.data(), Some(&[1.0, 2.0, 3.0][..]));
    assert_eq!(cell.original_data(), Some(&[1.0, 2.0, 3.0][..]));
    assert_eq!(cell.source(), Some("internal"));

    // A correction step rewrites the working values only.
    cell.change_data(vec![1.5, 2.0, 3.0]);
    assert_eq!(cell.data(), Some(&[1.5, 2.0, 3.0][..]));
    assert_eq!(cell.original_data(), Some(&[1.0, 2.0, 3.0][..]));

    cell.set_source("user");
    assert_eq!(cell.source(), Some("user"));
    assert_eq!(cell.data(), Some(&[1.5, 2.0, 3.0][..]));
    assert_eq!(cell.original_data(), Some(&[1.0, 2.0, 3.0][..]));
}

#[test]
fn restore_channel_from_saved_session() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("temperature_deg_c.json");

    // A collaborator saved this channel with corrected working values and
    // the as-loaded baseline intact.
    let record = SensorRecord {
        data: Some(NumericField::Sequence(vec![Some(21.4), Some(21.5)])),
        data_orig: Some(NumericField::Sequence(vec![Some(21.3), Some(21.5)])),
        source: Some("external".to_string()),
    };
    save_record(&record, &file_path).unwrap();

    let loaded = load_record(&file_path).unwrap();
    let mut cell = SensorData::new();
    cell.populate_from_record(&loaded);

    assert_eq!(cell.data(), Some(&[21.4, 21.5][..]));
    assert_eq!(cell.original_data(), Some(&[21.3, 21.5][..]));
    assert_eq!(cell.source(), Some("external"));
}

#[test]
fn restore_channel_saved_before_data_arrived() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("salinity_ppt.json");

    // Sessions written by older producers mark an empty channel with a run
    // of undefined values instead of an empty sequence.
    std::fs::write(
        &file_path,
        r#"{"data": [null, null, null], "dataOrig": [34.1, 34.2, 34.2], "source": "internal"}"#,
    )
    .unwrap();

    let loaded = load_record(&file_path).unwrap();
    let mut cell = SensorData::new();
    cell.populate_from_record(&loaded);

    // The undefined run collapses to the canonical empty state; the
    // baseline restores independently.
    assert_eq!(cell.data(), Some(&[][..]));
    assert_eq!(cell.original_data(), Some(&[34.1, 34.2, 34.2][..]));
    assert_eq!(cell.source(), Some("internal"));
}
