//! Test utilities and module declarations for SQLite storage tests.

use landfall_core::StormRecord;
use tempfile::TempDir;

use crate::SqliteStorage;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (SqliteStorage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = SqliteStorage::new(&db_path, 4).unwrap();
    (storage, temp_dir)
}

pub fn create_test_storm(id: &str, name: &str, year: i32) -> StormRecord {
    StormRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        year,
        duration_days: 4,
        max_wind_speed: 90,
        wind_speed_at_landfall: 70,
        strict_wind_speed_at_landfall: 70,
        landfall_date: format!("{year}-09-01"),
        strict_landfall_date: format!("{year}-09-01"),
        is_hurricane: true,
        has_liberal_landfall: true,
        has_strict_landfall: true,
        has_any_landfall: true,
    }
}

mod migration_tests;
