//! Constants used throughout rewind.
//!
//! Centralizes magic strings and limits.

/// Hard upper bound on history records kept per entry.
pub const MAX_HISTORY_SIZE: usize = 10;

/// Reason recorded when the caller supplies none.
pub const REASON_MANUAL: &str = "manual change";

/// Reason recorded for the password pushed aside by a restore.
pub const REASON_RESTORATION: &str = "restoration";

/// Rendering of passwords too short to partially reveal.
pub const SHORT_MASK: &str = "****";

/// Character used for the masked interior of a password.
pub const MASK_CHAR: char = '•';

/// Maximum number of mask characters between the revealed ends.
pub const MAX_MASK_RUN: usize = 8;

/// Default date format for displayed history records.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Entry store file name (.rewind.json), relative to the working directory.
pub const STORE_FILE: &str = ".rewind.json";

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "rewind";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "REWIND_CONFIG";

/// Environment variable overriding the entry store path.
pub const STORE_ENV: &str = "REWIND_STORE";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "REWIND_LOG";
