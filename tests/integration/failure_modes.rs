//! One test per failure kind: non-zero exit, a diagnostic naming the cause,
//! and no side effects past the first failing step.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{bootstrap, empty_env, stub_env};

#[test]
fn test_interpreter_absent_fails_before_any_side_effect() {
    let env = empty_env();
    env.write_manifest();

    bootstrap(&env)
        .assert()
        .failure()
        .stderr(predicate::str::contains("python3").and(predicate::str::contains("not found")));

    // fail-fast: nothing past the first step happened
    for dir in ["logs", "data", "templates"] {
        assert!(!env.has_dir(dir), "{dir}/ must not be created");
    }
    assert!(!env.has_marker("pip_ran"));
    assert!(!env.has_marker("engine_ran"));
}

#[test]
fn test_missing_manifest_fails_without_invoking_installer() {
    let env = stub_env();
    // no manifest written

    bootstrap(&env)
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest not found"));

    assert!(!env.has_marker("pip_ran"), "installer must not run");
    for dir in ["logs", "data", "templates"] {
        assert!(!env.has_dir(dir), "{dir}/ must not be created");
    }
}

#[test]
fn test_installer_failure_stops_before_scaffold_and_engine() {
    let env = stub_env();
    env.write_manifest();

    bootstrap(&env)
        .env("STUB_PIP_EXIT", "3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dependency installation failed"));

    assert!(env.has_marker("pip_ran"), "installer was attempted");
    assert!(!env.has_marker("engine_ran"), "engine must not be launched");
    for dir in ["logs", "data", "templates"] {
        assert!(!env.has_dir(dir), "{dir}/ must not be created yet");
    }
}

#[test]
fn test_engine_exit_two_reports_log_location() {
    let env = stub_env();
    env.write_manifest();

    bootstrap(&env)
        .env("STUB_ENGINE_EXIT", "2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("logs").and(predicate::str::contains("Update engine")));

    assert!(env.has_marker("engine_ran"));
}

#[test]
fn test_engine_timeout_kills_engine_and_reports() {
    let env = stub_env();
    env.write_manifest();

    // the stub's `sleep 30` is a grandchild holding the inherited stdio; if
    // only the direct child were killed, it would survive as an orphan and
    // this run would block until its natural exit
    let started = std::time::Instant::now();
    bootstrap(&env)
        .env("STUB_ENGINE_SLEEP", "30")
        .args(["--engine-timeout", "1"])
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout"));

    let elapsed = started.elapsed();
    assert!(
        elapsed < std::time::Duration::from_secs(10),
        "engine descendants must die with the group; run took {elapsed:?}"
    );
}
