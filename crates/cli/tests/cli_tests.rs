#![expect(clippy::unwrap_used, reason = "test code")]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const STORMS: &str = r#"[
  {"StormID":"AL041992","StormName":"ANDREW","Year":1992,"Duration":12,"MaxWindSpeed":150,
   "WindSpeedAtLandfall":145,"StrictWindSpeedAtLandfall":145,
   "LandfallDate":"1992-08-24 08:30:00","StrictLandfallDate":"1992-08-24",
   "IsHurricane":1,"HasLiberalLandfall":1,"HasStrictLandfall":1,"HasAnyLandfall":1},
  {"StormID":"AL092008","StormName":"IKE","Year":2008,"Duration":14,"MaxWindSpeed":125,
   "WindSpeedAtLandfall":95,"StrictWindSpeedAtLandfall":0,
   "LandfallDate":"2008-09-13","StrictLandfallDate":"",
   "IsHurricane":1,"HasLiberalLandfall":1,"HasStrictLandfall":0,"HasAnyLandfall":1}
]"#;

fn landfall(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("landfall").unwrap();
    cmd.env_remove("DATABASE_URL").arg("--db").arg(dir.path().join("storms.db"));
    cmd
}

fn import_fixture(dir: &TempDir) {
    let file = dir.path().join("storms.json");
    std::fs::write(&file, STORMS).unwrap();
    landfall(dir)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"inserted\": 2"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("landfall").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("storm-landfall"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_query_help_lists_sort_columns() {
    let mut cmd = Command::cargo_bin("landfall").unwrap();
    cmd.args(["query", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("windSpeedAtLandfall"));
}

#[test]
fn test_import_then_query() {
    let dir = TempDir::new().unwrap();
    import_fixture(&dir);

    let output = landfall(&dir)
        .args(["query", "--category", "Strict", "--sort", "name"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["metaData"]["totalRecords"], 1);
    assert_eq!(body["data"][0]["stormName"], "ANDREW");
    assert_eq!(body["data"][0]["landfallDate"], "1992-08-24");
}

#[test]
fn test_numeric_search_matches_year() {
    let dir = TempDir::new().unwrap();
    import_fixture(&dir);

    let output = landfall(&dir).args(["query", "2008"]).output().unwrap();
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["metaData"]["totalRecords"], 1);
    assert_eq!(body["data"][0]["stormID"], "AL092008");
}

#[test]
fn test_reimport_reports_duplicate() {
    let dir = TempDir::new().unwrap();
    import_fixture(&dir);

    let file = dir.path().join("storms.json");
    landfall(&dir).arg("import").arg(&file).assert().failure();
    landfall(&dir)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalRecords\": 2"));
}

#[test]
fn test_all_on_empty_database() {
    let dir = TempDir::new().unwrap();
    landfall(&dir)
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalPages\": 0"));
}

#[test]
fn test_unknown_sort_column_fails() {
    let dir = TempDir::new().unwrap();
    landfall(&dir)
        .args(["query", "--sort", "name; DROP TABLE valid_storms"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sort"));
}
