//! Tests for `rewind set`.

use crate::support::*;

#[test]
fn test_set_creates_entry() {
    let t = Test::new();

    let output = t.set(ENTRY, "initial");

    assert_success(&output);
    assert_stdout_contains(&output, "created github");
    assert_eq!(t.current_password(ENTRY).as_deref(), Some("initial"));
    assert!(t.store_json()[0]["data"].get("passwordHistory").is_none());
}

#[test]
fn test_set_records_previous_password() {
    let t = Test::with_entry(ENTRY, &["old1"]);

    let output = t.set(ENTRY, "new1");

    assert_success(&output);
    assert_stdout_contains(&output, "updated github");
    assert_stdout_contains(&output, "1 record(s)");
    assert_eq!(t.current_password(ENTRY).as_deref(), Some("new1"));

    let history = t.show_json(ENTRY);
    assert_eq!(history[0]["password"], "old1");
    assert_eq!(history[0]["reason"], "manual change");
}

#[test]
fn test_set_with_reason() {
    let t = Test::with_entry(ENTRY, &["old1"]);

    let output = t
        .cmd()
        .args(["set", ENTRY, "new1", "--reason", "breach notice"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(t.show_json(ENTRY)[0]["reason"], "breach notice");
}

#[test]
fn test_set_same_password_is_noop() {
    let t = Test::with_entry(ENTRY, &["same"]);

    let output = t.set(ENTRY, "same");

    assert_success(&output);
    assert_stdout_contains(&output, "already uses this password");
    assert_eq!(t.show_json(ENTRY), serde_json::json!([]));
}

#[test]
fn test_set_warns_on_reuse() {
    let t = Test::with_entry(ENTRY, ROTATION);

    let output = t.set(ENTRY, "first-pass");

    assert_success(&output);
    assert_stdout_contains(&output, "used before");
    assert_eq!(t.current_password(ENTRY).as_deref(), Some("first-pass"));
}

#[test]
fn test_set_via_stdin() {
    let t = Test::with_entry(ENTRY, &["old1"]);

    let output = t
        .cmd()
        .args(["set", ENTRY])
        .write_stdin("piped-secret\n")
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(t.current_password(ENTRY).as_deref(), Some("piped-secret"));
}

#[test]
fn test_set_keeps_ten_records() {
    let t = Test::new();
    for p in many_passwords() {
        assert_success(&t.set(ENTRY, &p));
    }

    let history = t.show_json(ENTRY);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0]["password"], "password-10");
    assert_eq!(history[9]["password"], "password-01");
}
