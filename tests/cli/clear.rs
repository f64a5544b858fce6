//! Tests for `rewind clear`.

use crate::support::*;

#[test]
fn test_clear_removes_history_field() {
    let t = Test::with_entry(ENTRY, ROTATION);

    let output = t.clear(ENTRY);

    assert_success(&output);
    assert_stdout_contains(&output, "cleared history for github");
    let store = t.store_json();
    assert!(store[0]["data"].get("passwordHistory").is_none());
    assert_eq!(store[0]["data"]["password"], "third-pass");
}

#[test]
fn test_clear_twice() {
    let t = Test::with_entry(ENTRY, ROTATION);

    assert_success(&t.clear(ENTRY));
    let after_first = t.store_json();

    let output = t.clear(ENTRY);
    assert_success(&output);
    assert_stdout_contains(&output, "no password history");
    assert_eq!(t.store_json(), after_first);
}
