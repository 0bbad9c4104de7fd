use super::create_test_storage;
use crate::SqliteStorage;
use crate::migrations::SCHEMA_VERSION;

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn fresh_database_reaches_target_version() {
    let (storage, _dir) = create_test_storage();
    assert_eq!(storage.schema_version().unwrap(), SCHEMA_VERSION);
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn reopening_keeps_data_and_version() {
    let (storage, dir) = create_test_storage();
    storage.insert_storms(&[super::create_test_storm("AL041992", "ANDREW", 1992)]).unwrap();
    drop(storage);

    let reopened = SqliteStorage::new(&dir.path().join("test.db"), 2).unwrap();
    assert_eq!(reopened.schema_version().unwrap(), SCHEMA_VERSION);
    assert_eq!(reopened.count_storms(&landfall_core::Predicate::always()).unwrap(), 1);
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn creates_missing_parent_directories() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b").join("storms.db");
    let storage = SqliteStorage::new(&nested, 1).unwrap();
    assert!(nested.exists());
    assert_eq!(storage.schema_version().unwrap(), SCHEMA_VERSION);
}
