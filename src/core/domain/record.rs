//! History record type.
//!
//! A snapshot of a superseded password.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A password that was replaced, with when and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// The superseded password value.
    pub password: String,
    /// When the new password replaced it.
    pub changed_at: DateTime<Utc>,
    /// Free-text classification of the change. Empty when unknown.
    #[serde(default)]
    pub reason: String,
}

impl HistoryRecord {
    /// Create a record for `password` superseded at `changed_at`.
    pub fn new(
        password: impl Into<String>,
        changed_at: DateTime<Utc>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            password: password.into(),
            changed_at,
            reason: reason.into(),
        }
    }
}
