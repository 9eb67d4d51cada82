//! JSON file store integration tests

use std::fs;

use rust_decimal::Decimal;
use tempfile::TempDir;

use equipment_registry::{
    error::AppError,
    models::{Condition, Equipment, EquipmentType},
    repository::{EquipmentStore, JsonFileStore, LoadWarning},
};

fn store(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("data.json"))
}

fn equipment(tag: &str, name: &str) -> Equipment {
    serde_json::from_value(serde_json::json!({
        "asset_tag": tag,
        "name": name,
        "brand": "Dell",
        "model": "P2422H",
        "serial_number": "SN-42",
        "type": "Monitor",
        "value": 899.9,
        "acquisition_date": "2024-01-05",
        "condition": "Used",
        "charger_power": "Other"
    }))
    .expect("valid record")
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let report = store(&dir).load().unwrap();
    assert!(report.records.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_append_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    let first = equipment("EQP001", "Monitor 24\"");
    let second = equipment("EQP002", "Monitor 27\"");

    store.append(&first).unwrap();
    store.append(&second).unwrap();

    let report = store.load().unwrap();
    assert_eq!(report.records, vec![first, second]);
    assert_eq!(report.records[0].value, Decimal::new(89990, 2));
    assert_eq!(report.records[0].equipment_type, Some(EquipmentType::Monitor));
    assert_eq!(report.records[0].condition, Some(Condition::Used));
}

#[test]
fn test_duplicate_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.append(&equipment("EQP001", "Desk")).unwrap();
    let before = fs::read(store.path()).unwrap();

    let err = store.append(&equipment("EQP001", "Chair")).unwrap_err();
    assert!(matches!(err, AppError::DuplicateAssetTag(tag) if tag == "EQP001"));
    assert_eq!(fs::read(store.path()).unwrap(), before);
    assert_eq!(store.load().unwrap().records.len(), 1);
}

#[test]
fn test_missing_required_field_does_no_io() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let err = store.append(&equipment("", "Desk")).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    let err = store.append(&equipment("EQP001", "")).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(!store.path().exists());
}

#[test]
fn test_invalid_json_is_reported_as_corrupt() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::write(store.path(), "not json at all").unwrap();

    let report = store.load().unwrap();
    assert!(report.records.is_empty());
    assert!(report.is_corrupt());
    assert!(matches!(report.warnings[0], LoadWarning::CorruptData { .. }));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json at all");
}

#[test]
fn test_append_over_corrupt_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::write(store.path(), "{\"asset_tag\": \"EQP001\"}").unwrap();

    store.append(&equipment("EQP001", "Desk")).unwrap();

    let report = store.load().unwrap();
    assert!(report.warnings.is_empty());
    assert_eq!(report.records.len(), 1);
}

#[test]
fn test_non_ascii_text_is_written_verbatim() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    store.append(&equipment("EQP001", "Cadeira ergonômica")).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"name\": \"Cadeira ergonômica\""));
    assert!(!raw.contains("\\u00f4"));
    assert_eq!(store.load().unwrap().records[0].name, "Cadeira ergonômica");
}

#[test]
fn test_in_place_writes() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir).with_atomic_writes(false);
    store.append(&equipment("EQP001", "Desk")).unwrap();

    assert_eq!(store.load().unwrap().records.len(), 1);
    assert!(!dir.path().join("data.json.tmp").exists());
}
