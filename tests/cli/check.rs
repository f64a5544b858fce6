//! Tests for `rewind check`.

use crate::support::*;

#[test]
fn test_check_finds_old_password() {
    let t = Test::with_entry(ENTRY, &["old1", "new1"]);

    let output = t.check(ENTRY, "old1");

    assert_success(&output);
    assert_stdout_contains(&output, "found in history");
}

#[test]
fn test_check_unseen_password() {
    let t = Test::with_entry(ENTRY, &["old1", "new1"]);

    let output = t.check(ENTRY, "never-used");

    assert_success(&output);
    assert_stdout_contains(&output, "not in history");
}

#[test]
fn test_check_current_password() {
    let t = Test::with_entry(ENTRY, &["old1", "new1"]);

    let output = t.check(ENTRY, "new1");

    assert_success(&output);
    assert_stdout_contains(&output, "current password");
}
