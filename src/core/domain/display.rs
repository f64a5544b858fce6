//! Presentation view of history records.

use chrono::{DateTime, Duration, Local, Utc};
use std::fmt::{self, Write as _};

use crate::core::constants::{MASK_CHAR, MAX_MASK_RUN, SHORT_MASK};

/// A history record prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    /// Position in the history (0 = most recent).
    pub index: usize,
    /// Raw password.
    pub password: String,
    /// Masked rendering of the password.
    pub masked: String,
    /// Raw change timestamp.
    pub changed_at: DateTime<Utc>,
    /// Change timestamp in local time, formatted.
    pub formatted_date: String,
    /// Coarse elapsed time since the change.
    pub relative: RelativeTime,
    /// Change reason, empty if none.
    pub reason: String,
}

/// Coarse human-relative time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    /// Less than a minute.
    JustNow,
    /// Less than an hour.
    Minutes(i64),
    /// Less than a day.
    Hours(i64),
    /// Less than a week.
    Days(i64),
    /// Less than 30 days.
    Weeks(i64),
    /// Anything older, in 30-day months.
    Months(i64),
}

impl RelativeTime {
    /// Bucket an elapsed duration. Negative durations count as just now.
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let minutes = elapsed.num_minutes();
        let hours = elapsed.num_hours();
        let days = elapsed.num_days();

        if minutes < 1 {
            RelativeTime::JustNow
        } else if minutes < 60 {
            RelativeTime::Minutes(minutes)
        } else if hours < 24 {
            RelativeTime::Hours(hours)
        } else if days < 7 {
            RelativeTime::Days(days)
        } else if days < 30 {
            RelativeTime::Weeks(days / 7)
        } else {
            RelativeTime::Months(days / 30)
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::JustNow => write!(f, "just now"),
            RelativeTime::Minutes(n) => write!(f, "{} min ago", n),
            RelativeTime::Hours(n) => write!(f, "{} h ago", n),
            RelativeTime::Days(n) => write!(f, "{} d ago", n),
            RelativeTime::Weeks(n) => write!(f, "{} w ago", n),
            RelativeTime::Months(n) => write!(f, "{} mo ago", n),
        }
    }
}

impl DisplayRecord {
    pub(crate) fn build(
        record: &super::HistoryRecord,
        index: usize,
        date_format: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            index,
            password: record.password.clone(),
            masked: mask_password(&record.password),
            changed_at: record.changed_at,
            formatted_date: format_date(record.changed_at, date_format),
            relative: RelativeTime::from_elapsed(now.signed_duration_since(record.changed_at)),
            reason: record.reason.clone(),
        }
    }
}

/// Format `at` in local time, falling back to RFC 3339 if `date_format` is invalid.
fn format_date(at: DateTime<Utc>, date_format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", at.with_timezone(&Local).format(date_format)) {
        Ok(()) => out,
        Err(_) => at.to_rfc3339(),
    }
}

/// Mask a password, keeping the first and last two characters.
///
/// Passwords of four characters or fewer become [`SHORT_MASK`]. Longer ones
/// keep their ends around at most [`MAX_MASK_RUN`] mask characters, so the
/// output length never reveals more than that.
pub fn mask_password(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() <= 4 {
        return SHORT_MASK.to_string();
    }

    let run = (chars.len() - 4).min(MAX_MASK_RUN);
    let mut masked = String::with_capacity(4 + run * MASK_CHAR.len_utf8());
    masked.extend(&chars[..2]);
    masked.extend(std::iter::repeat(MASK_CHAR).take(run));
    masked.extend(&chars[chars.len() - 2..]);
    masked
}
