//! All-green runs: exit zero, scaffolding, idempotence.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{bootstrap, stub_env};

#[test]
fn test_green_run_exits_zero_and_scaffolds_workspace() {
    let env = stub_env();
    env.write_manifest();

    bootstrap(&env)
        .assert()
        .success()
        .stdout(predicate::str::contains("exited cleanly"));

    for dir in ["logs", "data", "templates"] {
        assert!(env.has_dir(dir), "{dir}/ should exist after bootstrap");
    }
    assert!(env.has_marker("pip_ran"), "installer should have been invoked");
    assert!(env.has_marker("engine_ran"), "engine should have been launched");
}

#[test]
fn test_status_line_per_phase_transition() {
    let env = stub_env();
    env.write_manifest();

    bootstrap(&env)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Checking interpreter")
                .and(predicate::str::contains("Installing dependencies"))
                .and(predicate::str::contains("workspace directories"))
                .and(predicate::str::contains("Starting update engine")),
        );
}

#[test]
fn test_second_run_leaves_existing_files_untouched() {
    let env = stub_env();
    env.write_manifest();

    bootstrap(&env).assert().success();

    let keep = env.dir.path().join("logs").join("keep.log");
    std::fs::write(&keep, "precious history").expect("write keep.log");

    bootstrap(&env).assert().success();

    let content = std::fs::read_to_string(&keep).expect("read keep.log");
    assert_eq!(content, "precious history");
}

#[test]
fn test_quiet_run_prints_nothing_on_success() {
    let env = stub_env();
    env.write_manifest();

    bootstrap(&env)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
