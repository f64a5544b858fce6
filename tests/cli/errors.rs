//! Error reporting tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_unknown_entry() {
    let t = Test::new();

    let output = t.show("ghost");

    assert_failure(&output);
    assert_stderr_contains(&output, "entry not found: ghost");
    assert_stdout_contains(&output, "rewind set");
}

#[test]
fn test_empty_password_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["set", ENTRY])
        .write_stdin("\n")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "password cannot be empty");
}

#[test]
fn test_empty_id_rejected() {
    let t = Test::new();

    let output = t.set("  ", "secret");

    assert_failure(&output);
    assert_stderr_contains(&output, "entry id cannot be empty");
}

#[test]
fn test_corrupt_store() {
    let t = Test::new();
    std::fs::write(t.store_path(), "[{oops").unwrap();

    let output = t.show(ENTRY);

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse store");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::with_entry(ENTRY, ROTATION);

    let output = t.show(ENTRY);

    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG") && !err.contains("INFO"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with_entry(ENTRY, &["old1"]);

    let output = t
        .cmd()
        .args(["--verbose", "set", ENTRY, "new1"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "password history updated for entry github");
}

#[test]
fn test_completions() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rewind").and(predicate::str::contains("restore")));
}

#[test]
fn test_restore_requires_numeric_index() {
    let t = Test::with_entry(ENTRY, ROTATION);

    t.cmd()
        .args(["restore", ENTRY, "latest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
