//! Vault entry type.
//!
//! The entry is owned by whatever vault store the caller uses. rewind only
//! reads it and hands back modified copies, so every field it does not know
//! about is captured and written back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::HistoryRecord;

/// A stored credential record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Opaque identifier.
    #[serde(default)]
    pub id: String,
    /// Credential payload. `None` only for malformed input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EntryData>,
    /// Any other top-level fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `data` section of a vault entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryData {
    /// Current password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Superseded passwords, most recent first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_history: Option<Vec<HistoryRecord>>,
    /// Any other fields of the payload.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VaultEntry {
    /// Create an entry with a current password and no history.
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: Some(EntryData {
                password: Some(password.into()),
                ..EntryData::default()
            }),
            extra: Map::new(),
        }
    }

    /// Current password, treating empty as absent.
    pub fn password(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.password.as_deref())
            .filter(|p| !p.is_empty())
    }

    /// Recorded history, empty if none.
    pub fn history(&self) -> &[HistoryRecord] {
        self.data
            .as_ref()
            .and_then(|d| d.password_history.as_deref())
            .unwrap_or(&[])
    }

    /// Copy of this entry with `data.password` replaced.
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.data.get_or_insert_with(EntryData::default).password = Some(password.into());
        next
    }

    /// Copy of this entry with the history replaced. `None` removes the field.
    pub fn with_history(&self, history: Option<Vec<HistoryRecord>>) -> Self {
        let mut next = self.clone();
        if let Some(data) = next.data.as_mut() {
            data.password_history = history;
        } else if history.is_some() {
            next.data = Some(EntryData {
                password_history: history,
                ..EntryData::default()
            });
        }
        next
    }
}
