//! Config store, export and import tests.

use predicates::prelude::*;

use rs_runner::config::{Config, ConfigStore};

use crate::fixtures::TestEnv;

// ==================== Store round trips ====================

#[test]
fn test_write_load_round_trip() {
    let env = TestEnv::new();
    let store = ConfigStore::new(Some(env.config.path().to_path_buf()));

    let mut config = Config::new();
    config
        .global_scripts
        .insert("lint".to_string(), "eslint .".to_string());
    config.directory_scripts.insert(
        "/home/user/project".to_string(),
        [("dev".to_string(), "vite dev".to_string())].into(),
    );

    store.write(&config).unwrap();
    assert_eq!(store.load().unwrap(), config);
}

#[test]
fn test_corrupt_config_degrades_to_absent() {
    let env = TestEnv::new();
    env.seed_config("{ definitely not json");

    let store = ConfigStore::new(Some(env.config.path().to_path_buf()));
    assert!(store.load().is_none());
}

#[test]
fn test_invalid_shape_degrades_to_absent() {
    let env = TestEnv::new();
    env.seed_config(r#"{"globalScripts": ["not", "a", "map"]}"#);

    let store = ConfigStore::new(Some(env.config.path().to_path_buf()));
    assert!(store.load().is_none());
}

#[test]
fn test_config_without_directory_scripts_still_loads() {
    let env = TestEnv::new();
    env.seed_config(r#"{"globalScripts": {"test": "jest"}}"#);

    let store = ConfigStore::new(Some(env.config.path().to_path_buf()));
    let config = store.load().unwrap();
    assert_eq!(config.global_scripts.len(), 1);
    assert!(config.directory_scripts.is_empty());
}

// ==================== Corrupt config through the CLI ====================

#[test]
fn test_corrupt_config_means_no_global_scripts() {
    let env = TestEnv::new();
    env.seed_config("{ definitely not json");

    // The corrupt store behaves like "never configured".
    env.rsr()
        .args(["-d", "anything"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No global scripts configuration found"));
}

// ==================== Export ====================

#[test]
fn test_export_without_config_warns() {
    let env = TestEnv::new();

    env.rsr()
        .arg("--export")
        .assert()
        .success()
        .stderr(predicate::str::contains("No configuration found to export"));
}

#[test]
fn test_export_prints_full_config() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "greet", "echo hi"]).assert().success();

    env.rsr()
        .arg("--export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"globalScripts\""))
        .stdout(predicate::str::contains("\"greet\": \"echo hi\""));
}

// ==================== Import ====================

#[test]
fn test_import_merges_into_existing_config() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "old", "echo old"]).assert().success();

    let import_file = env.project.path().join("shared.json");
    std::fs::write(
        &import_file,
        r#"{"globalScripts": {"new": "echo new"}, "directoryScripts": {"/elsewhere": {"dev": "vite"}}}"#,
    )
    .unwrap();

    env.rsr()
        .args(["--import", import_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 added"));

    let config = std::fs::read_to_string(env.config_file()).unwrap();
    assert!(config.contains("\"old\""));
    assert!(config.contains("\"new\""));
    assert!(config.contains("/elsewhere"));
}

#[test]
fn test_import_reports_conflicts() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "greet", "echo hi"]).assert().success();

    let import_file = env.project.path().join("shared.json");
    std::fs::write(
        &import_file,
        r#"{"globalScripts": {"greet": "echo howdy"}}"#,
    )
    .unwrap();

    // stdin is not a terminal here, so the import proceeds after reporting.
    env.rsr()
        .args(["--import", import_file.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("global:greet"))
        .stdout(predicate::str::contains("1 updated"));
}

#[test]
fn test_import_replace_overwrites() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "old", "echo old"]).assert().success();

    let import_file = env.project.path().join("shared.json");
    std::fs::write(&import_file, r#"{"globalScripts": {"new": "echo new"}}"#).unwrap();

    env.rsr()
        .args(["--import", import_file.to_str().unwrap(), "--replace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 global script(s)"));

    let config = std::fs::read_to_string(env.config_file()).unwrap();
    assert!(!config.contains("\"old\""));
    assert!(config.contains("\"new\""));
}

#[test]
fn test_import_invalid_shape_fails() {
    let env = TestEnv::new();

    let import_file = env.project.path().join("bad.json");
    std::fs::write(&import_file, r#"{"directoryScripts": {}}"#).unwrap();

    env.rsr()
        .args(["--import", import_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_import_missing_file_fails() {
    let env = TestEnv::new();

    env.rsr()
        .args(["--import", "/does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading import file"));
}

#[test]
fn test_import_same_file_twice_is_idempotent() {
    let env = TestEnv::new();

    let import_file = env.project.path().join("shared.json");
    std::fs::write(&import_file, r#"{"globalScripts": {"greet": "echo hi"}}"#).unwrap();

    env.rsr()
        .args(["--import", import_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 added, 0 updated"));

    env.rsr()
        .args(["--import", import_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 added, 1 updated"));
}
