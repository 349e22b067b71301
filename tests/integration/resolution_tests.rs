//! Resolution order tests through the CLI.
//!
//! The order is: package.json scripts, then directory scripts, then global
//! scripts, then the package-manager fallback. Observed via `--dry-run`.

use crate::fixtures::{LockfileType, TestEnv};

fn dry_run_output(env: &TestEnv, script: &str) -> String {
    let output = env
        .rsr()
        .args(["--dry-run", script])
        .output()
        .expect("run rsr");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_manifest_beats_directory_and_global() {
    let env = TestEnv::new()
        .with_scripts(&[("dev", "vite")])
        .with_lockfile(LockfileType::Npm);

    env.rsr().args(["--add-dir", "dev", "make dev"]).assert().success();
    env.rsr().args(["-a", "dev", "docker compose up"]).assert().success();

    assert!(dry_run_output(&env, "dev").contains("Would run: npm run dev"));
}

#[test]
fn test_directory_beats_global() {
    let env = TestEnv::new();

    env.rsr().args(["--add-dir", "clean", "make clean"]).assert().success();
    env.rsr().args(["-a", "clean", "git clean -fd"]).assert().success();

    assert!(dry_run_output(&env, "clean").contains("Would run: make clean"));
}

#[test]
fn test_global_script_runs_without_runner_prefix() {
    let env = TestEnv::new().with_lockfile(LockfileType::Npm);

    env.rsr().args(["-a", "lint", "eslint ."]).assert().success();

    // Stored command verbatim, no "npm run".
    assert!(dry_run_output(&env, "lint").contains("Would run: eslint ."));
}

#[test]
fn test_unknown_name_falls_back_to_runner() {
    let env = TestEnv::new()
        .with_scripts(&[("dev", "vite")])
        .with_lockfile(LockfileType::Npm);

    assert!(dry_run_output(&env, "outdated").contains("Would run: npm outdated"));
}

#[test]
fn test_directory_scripts_do_not_leak_across_directories() {
    let env = TestEnv::new();
    env.rsr().args(["--add-dir", "clean", "make clean"]).assert().success();

    // Same config store, different working directory.
    let other = tempfile::TempDir::new().unwrap();
    std::fs::write(other.path().join("package-lock.json"), "").unwrap();

    let output = crate::fixtures::rsr_in(other.path(), env.config.path())
        .args(["--dry-run", "clean"])
        .output()
        .expect("run rsr");
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Falls through to the runner because the directory key differs.
    assert!(stdout.contains("Would run: npm clean"));
}

#[test]
fn test_script_arguments_are_forwarded() {
    let env = TestEnv::new()
        .with_scripts(&[("test", "vitest run")])
        .with_lockfile(LockfileType::Npm);

    let output = env
        .rsr()
        .args(["--dry-run", "test", "--watch"])
        .output()
        .expect("run rsr");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Would run: npm run test --watch"));
}
