//! Error types.
//!
//! Every fallible operation in rewind returns [`Result`], whose error side is
//! the aggregate [`Error`]. The history core itself only ever fails with
//! [`HistoryError`]; the remaining variants belong to the CLI surface.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failures of the password history operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    /// Restore requested an index outside the current history.
    #[error("invalid history index {index}: entry has {len} record(s)")]
    InvalidIndex { index: usize, len: usize },
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid history.max_size {0}: must be between 1 and {max}", max = crate::core::constants::MAX_HISTORY_SIZE)]
    InvalidMaxSize(usize),

    #[error("invalid display.date_format: {0}")]
    InvalidDateFormat(String),
}

/// Entry store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("entry not found: {0}")]
    EntryNotFound(String),

    #[error("failed to read store: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write store: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to parse store: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Input validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("entry id cannot be empty")]
    EmptyId,

    #[error("password cannot be empty")]
    EmptyPassword,
}

/// Result alias for rewind operations.
pub type Result<T> = std::result::Result<T, Error>;
