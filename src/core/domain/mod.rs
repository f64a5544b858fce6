//! Domain types.

mod display;
mod entry;
mod record;

pub use display::{mask_password, DisplayRecord, RelativeTime};
pub use entry::{EntryData, VaultEntry};
pub use record::HistoryRecord;
