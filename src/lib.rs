//! Rewind - bounded password history for vault entries.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── show          # List an entry's history
//! │   ├── set           # Change a password, recording the old one
//! │   ├── restore       # Restore a previous password
//! │   ├── clear         # Drop an entry's history
//! │   ├── check         # Password reuse check
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── history       # HistoryManager: record, query, restore, clear, format
//!     ├── domain/       # VaultEntry, HistoryRecord, DisplayRecord, masking
//!     ├── sink          # Logging collaborator
//!     ├── config        # config.toml management
//!     └── store         # JSON entry store used by the CLI
//! ```
//!
//! # Example
//!
//! ```
//! use rewind::{HistoryManager, VaultEntry};
//!
//! let manager = HistoryManager::new();
//! let entry = VaultEntry::new("github", "old-password");
//!
//! let entry = manager
//!     .record_change(&entry, "new-password", None)
//!     .with_password("new-password");
//!
//! assert!(manager.is_in_history(&entry, "old-password"));
//!
//! let entry = manager.restore_from_history(&entry, 0).unwrap();
//! assert_eq!(entry.password(), Some("old-password"));
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Config;
pub use crate::core::domain::{
    mask_password, DisplayRecord, EntryData, HistoryRecord, RelativeTime, VaultEntry,
};
pub use crate::core::history::HistoryManager;
pub use crate::core::sink::{LogSink, NullSink, TracingSink};
pub use crate::core::store::EntryStore;
pub use crate::error::{Error, HistoryError, Result};
