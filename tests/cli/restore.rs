//! Tests for `rewind restore`.

use crate::support::*;

#[test]
fn test_restore_previous_password() {
    let t = Test::with_entry(ENTRY, ROTATION);

    let output = t.restore(ENTRY, 1);

    assert_success(&output);
    assert_stdout_contains(&output, "restored github from record 1");
    assert_eq!(t.current_password(ENTRY).as_deref(), Some("first-pass"));

    let history = t.show_json(ENTRY);
    assert_eq!(history[0]["password"], "third-pass");
    assert_eq!(history[0]["reason"], "restoration");
}

#[test]
fn test_restore_is_undoable() {
    let t = Test::with_entry(ENTRY, ROTATION);

    assert_success(&t.restore(ENTRY, 0));
    assert_eq!(t.current_password(ENTRY).as_deref(), Some("second-pass"));

    assert_success(&t.restore(ENTRY, 0));
    assert_eq!(t.current_password(ENTRY).as_deref(), Some("third-pass"));
}

#[test]
fn test_restore_invalid_index() {
    let t = Test::with_entry(ENTRY, &["a1", "b2", "c3", "d4"]);
    let before = t.store_json();

    let output = t.restore(ENTRY, 5);

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid history index 5: entry has 3 record(s)");
    assert_stdout_contains(&output, "rewind show");
    assert_eq!(t.store_json(), before);
}
