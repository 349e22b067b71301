//! CLI integration tests for rsr.
//!
//! These tests verify the command-line interface behavior using assert_cmd.

use predicates::prelude::*;

use crate::fixtures::{standard_scripts, LockfileType, TestEnv};

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    TestEnv::new()
        .rsr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "CLI tool for detecting and running package.json scripts",
        ))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--interactive"))
        .stdout(predicate::str::contains("--add-dir"))
        .stdout(predicate::str::contains("--export"));
}

#[test]
fn test_version_output() {
    TestEnv::new()
        .rsr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

// ==================== List Mode ====================

#[test]
fn test_list_shows_manifest_scripts() {
    let env = TestEnv::new()
        .with_scripts(&standard_scripts())
        .with_lockfile(LockfileType::Npm);

    env.rsr()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Package.json (npm):"))
        .stdout(predicate::str::contains("dev"))
        .stdout(predicate::str::contains("vite build"))
        .stdout(predicate::str::contains("lint"));
}

#[test]
fn test_list_without_lockfile_has_plain_header() {
    let env = TestEnv::new().with_scripts(&standard_scripts());

    env.rsr()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Package.json:"));
}

#[test]
fn test_list_warns_without_global_scripts() {
    let env = TestEnv::new().with_scripts(&standard_scripts());

    env.rsr()
        .arg("--list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No global scripts found"));
}

#[test]
fn test_list_shows_directory_and_global_scripts() {
    let env = TestEnv::new().with_scripts(&standard_scripts());

    env.rsr().args(["-a", "greet", "echo hello"]).assert().success();
    env.rsr()
        .args(["--add-dir", "clean", "rm -rf dist"])
        .assert()
        .success();

    env.rsr()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory scripts"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("Global scripts:"))
        .stdout(predicate::str::contains("greet"));
}

#[test]
fn test_no_arguments_lists_scripts() {
    let env = TestEnv::new().with_scripts(&standard_scripts());

    env.rsr()
        .assert()
        .success()
        .stdout(predicate::str::contains("Package.json"));
}

// ==================== Add / Delete Global Scripts ====================

#[test]
fn test_add_global_script() {
    let env = TestEnv::new();

    env.rsr()
        .args(["-a", "greet", "echo", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added successfully"))
        .stdout(predicate::str::contains("echo hello"));

    let config = std::fs::read_to_string(env.config_file()).unwrap();
    assert!(config.contains("\"greet\": \"echo hello\""));
}

#[test]
fn test_add_global_script_without_value_warns() {
    let env = TestEnv::new();

    env.rsr()
        .args(["-a", "greet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Please specify a value"));

    assert!(!env.config_file().exists());
}

#[test]
fn test_add_empty_command_is_rejected() {
    let env = TestEnv::new();

    env.rsr()
        .args(["-a", "broken", "   "])
        .assert()
        .success()
        .stderr(predicate::str::contains("Script command cannot be empty"));

    assert!(!env.config_file().exists());
}

#[test]
fn test_add_suspicious_command_warns_but_saves() {
    let env = TestEnv::new();

    env.rsr()
        .args(["-a", "nuke", "foo; rm -rf /"])
        .assert()
        .success()
        .stderr(predicate::str::contains("dangerous rm -rf /"))
        .stdout(predicate::str::contains("added successfully"));
}

#[test]
fn test_add_existing_key_warns_about_overwrite() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "greet", "echo one"]).assert().success();
    env.rsr()
        .args(["-a", "greet", "echo two"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists. Overwriting"));

    let config = std::fs::read_to_string(env.config_file()).unwrap();
    assert!(config.contains("echo two"));
}

#[test]
fn test_delete_global_script() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "greet", "echo hello"]).assert().success();
    env.rsr()
        .args(["-d", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed successfully"));
}

#[test]
fn test_delete_unknown_key_lists_available() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "greet", "echo hello"]).assert().success();
    env.rsr()
        .args(["-d", "nope"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not found. Available: greet"));
}

#[test]
fn test_delete_without_config_warns() {
    let env = TestEnv::new();

    env.rsr()
        .args(["-d", "greet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No global scripts configuration found"));
}

// ==================== Add / Delete Directory Scripts ====================

#[test]
fn test_add_and_delete_directory_script() {
    let env = TestEnv::new();

    env.rsr()
        .args(["--add-dir", "clean", "rm -rf dist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added successfully for"));

    env.rsr()
        .args(["--delete-dir", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed successfully"));

    // Last script removed: the directory entry is gone entirely.
    let config = std::fs::read_to_string(env.config_file()).unwrap();
    assert!(config.contains("\"directoryScripts\": {}"));
}

#[test]
fn test_delete_directory_script_without_config_warns() {
    let env = TestEnv::new();

    env.rsr()
        .args(["--delete-dir", "clean"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "No directory scripts found for current directory",
        ));
}

// ==================== Running Scripts ====================

#[test]
fn test_run_global_script() {
    let env = TestEnv::new();

    env.rsr()
        .args(["-a", "greet", "echo hello-from-global"])
        .assert()
        .success();

    env.rsr()
        .arg("greet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Executing global script:"))
        .stdout(predicate::str::contains("hello-from-global"));
}

#[test]
fn test_run_script_exit_code_propagates() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "boom", "exit 3"]).assert().success();

    env.rsr()
        .arg("boom")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exited with code 3"));
}

#[test]
fn test_run_successful_script_has_no_error_diagnostic() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "ok", "true"]).assert().success();

    env.rsr()
        .arg("ok")
        .assert()
        .success()
        .stderr(predicate::str::contains("exited with code").not());
}

#[test]
fn test_quiet_suppresses_executing_line() {
    let env = TestEnv::new();

    env.rsr().args(["-a", "ok", "true"]).assert().success();

    env.rsr()
        .args(["--quiet", "ok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Executing").not());
}

#[test]
fn test_unknown_script_without_runner_is_an_error() {
    let env = TestEnv::new().with_scripts(&standard_scripts());

    env.rsr()
        .arg("unknown-script")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No package manager detected"));
}

#[test]
fn test_malformed_manifest_is_a_hard_failure() {
    let env = TestEnv::new().with_raw_manifest("{ not json");

    env.rsr()
        .arg("anything")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse package.json"));
}

#[test]
fn test_malformed_manifest_does_not_break_listing() {
    let env = TestEnv::new().with_raw_manifest("{ not json");

    env.rsr()
        .arg("--list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error listing scripts"));
}

// ==================== Dry Run ====================

#[test]
fn test_dry_run_prints_without_executing() {
    let env = TestEnv::new();

    env.rsr()
        .args(["-a", "danger", "exit 9"])
        .assert()
        .success();

    env.rsr()
        .args(["--dry-run", "danger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would run: exit 9"));
}
