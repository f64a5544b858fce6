//! Test fixtures and constants.

/// Entry id used across CLI tests.
pub const ENTRY: &str = "github";

/// Passwords an entry goes through, oldest first.
pub const ROTATION: &[&str] = &["first-pass", "second-pass", "third-pass"];

/// Twelve distinct passwords, enough to overflow the default window.
pub fn many_passwords() -> Vec<String> {
    (0..12).map(|i| format!("password-{:02}", i)).collect()
}
