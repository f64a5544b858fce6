//! Password history management.
//!
//! [`HistoryManager`] keeps a bounded, most-recent-first log of superseded
//! passwords on a [`VaultEntry`]. Every operation takes the caller's entry by
//! reference and returns a new value; persisting it is the caller's job.

use chrono::{DateTime, Utc};

use crate::core::constants::{
    DEFAULT_DATE_FORMAT, MAX_HISTORY_SIZE, REASON_MANUAL, REASON_RESTORATION,
};
use crate::core::domain::{DisplayRecord, HistoryRecord, VaultEntry};
use crate::core::sink::{LogSink, TracingSink};
use crate::error::HistoryError;

/// Maintains password history on vault entries.
///
/// Holds no entry state of its own, only the retention window, the date
/// format used for display, and the sink diagnostics go to.
#[derive(Debug, Clone)]
pub struct HistoryManager<S: LogSink = TracingSink> {
    max_size: usize,
    date_format: String,
    sink: S,
}

impl HistoryManager {
    /// Manager with the default retention window, logging through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LogSink> HistoryManager<S> {
    /// Manager with the default retention window and the given sink.
    pub fn with_sink(sink: S) -> Self {
        Self {
            max_size: MAX_HISTORY_SIZE,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            sink,
        }
    }

    /// Shrink the retention window. Clamped to `1..=MAX_HISTORY_SIZE`.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size.clamp(1, MAX_HISTORY_SIZE);
        self
    }

    /// Use a different `chrono` format string for displayed dates.
    ///
    /// An invalid format is not rejected here; displayed dates then fall
    /// back to RFC 3339.
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Retention window in effect.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Record the history side of changing `entry`'s password to `new_password`.
    ///
    /// The current password is pushed to the front of the history, stamped
    /// with the current time. The password itself is not changed; assigning
    /// `new_password` is up to the caller.
    ///
    /// Returns the entry unchanged if it has no current password or if
    /// `new_password` equals it.
    pub fn record_change(
        &self,
        entry: &VaultEntry,
        new_password: &str,
        reason: Option<&str>,
    ) -> VaultEntry {
        self.record_change_at(entry, new_password, reason, Utc::now())
    }

    /// [`record_change`](Self::record_change) with an explicit timestamp.
    pub fn record_change_at(
        &self,
        entry: &VaultEntry,
        new_password: &str,
        reason: Option<&str>,
        at: DateTime<Utc>,
    ) -> VaultEntry {
        let Some(current) = entry.password() else {
            return entry.clone();
        };
        if current == new_password {
            return entry.clone();
        }

        let reason = reason.filter(|r| !r.is_empty()).unwrap_or(REASON_MANUAL);
        let history: Vec<HistoryRecord> = std::iter::once(HistoryRecord::new(current, at, reason))
            .chain(self.get_history(entry).iter().cloned())
            .take(self.max_size)
            .collect();

        self.sink.log(&format!(
            "password history updated for entry {}: {} record(s)",
            entry.id,
            history.len()
        ));

        entry.with_history(Some(history))
    }

    /// History of `entry`, most recent first. Empty if none.
    ///
    /// Records beyond the retention window (from entries written elsewhere)
    /// are not visible; the next recorded change drops them.
    pub fn get_history<'a>(&self, entry: &'a VaultEntry) -> &'a [HistoryRecord] {
        let history = entry.history();
        &history[..history.len().min(self.max_size)]
    }

    /// Whether `entry` has at least one history record.
    pub fn has_history(&self, entry: &VaultEntry) -> bool {
        !self.get_history(entry).is_empty()
    }

    /// Restore the password at `index` (0 = most recent).
    ///
    /// The current password is first recorded with reason `"restoration"`,
    /// so a restore can itself be undone by restoring index 0.
    ///
    /// When the history is already full, recording the current password
    /// evicts the oldest record. Restoring that oldest record therefore
    /// removes it from the history while still applying its password.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidIndex` if `index` is out of range.
    pub fn restore_from_history(
        &self,
        entry: &VaultEntry,
        index: usize,
    ) -> Result<VaultEntry, HistoryError> {
        self.restore_from_history_at(entry, index, Utc::now())
    }

    /// [`restore_from_history`](Self::restore_from_history) with an explicit timestamp.
    pub fn restore_from_history_at(
        &self,
        entry: &VaultEntry,
        index: usize,
        at: DateTime<Utc>,
    ) -> Result<VaultEntry, HistoryError> {
        let history = self.get_history(entry);
        let target = history
            .get(index)
            .map(|r| r.password.clone())
            .ok_or(HistoryError::InvalidIndex {
                index,
                len: history.len(),
            })?;

        let recorded = self.record_change_at(entry, &target, Some(REASON_RESTORATION), at);
        Ok(recorded.with_password(target))
    }

    /// Remove the history field from `entry`.
    pub fn clear_history(&self, entry: &VaultEntry) -> VaultEntry {
        self.sink
            .log(&format!("password history cleared for entry {}", entry.id));
        entry.with_history(None)
    }

    /// Whether `password` appears anywhere in `entry`'s history.
    pub fn is_in_history(&self, entry: &VaultEntry, password: &str) -> bool {
        self.get_history(entry)
            .iter()
            .any(|r| r.password == password)
    }

    /// Presentation view of `record`, with relative time measured from now.
    pub fn format_for_display(&self, record: &HistoryRecord, index: usize) -> DisplayRecord {
        self.format_for_display_at(record, index, Utc::now())
    }

    /// Presentation view of `record`, with relative time measured from `now`.
    pub fn format_for_display_at(
        &self,
        record: &HistoryRecord,
        index: usize,
        now: DateTime<Utc>,
    ) -> DisplayRecord {
        DisplayRecord::build(record, index, &self.date_format, now)
    }
}
