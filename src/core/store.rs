//! File-backed entry store.
//!
//! A JSON array of vault entries. This is the persistence the CLI uses; the
//! history core never touches it.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::VaultEntry;
use crate::error::{Result, StoreError};

/// Entries loaded from a JSON file.
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: Vec<VaultEntry>,
}

impl EntryStore {
    /// Default store path: `REWIND_STORE`, else `.rewind.json` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var(constants::STORE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(constants::STORE_FILE))
    }

    /// Load the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFile` or `StoreError::Parse`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        debug!(path = %path.display(), "loading store");

        if !path.exists() {
            return Ok(Self {
                path,
                entries: Vec::new(),
            });
        }

        let contents = std::fs::read_to_string(&path).map_err(StoreError::ReadFile)?;
        let entries: Vec<VaultEntry> = if contents.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&contents).map_err(StoreError::Parse)?
        };

        debug!(entries = entries.len(), "store loaded");
        Ok(Self { path, entries })
    }

    /// Path this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, in file order.
    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&VaultEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look up an entry by id, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EntryNotFound`.
    pub fn require(&self, id: &str) -> Result<&VaultEntry> {
        self.get(id)
            .ok_or_else(|| StoreError::EntryNotFound(id.to_string()).into())
    }

    /// Replace the entry with the same id, or append it.
    pub fn upsert(&mut self, entry: VaultEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    /// Write the store back to disk.
    ///
    /// Writes to a sibling temp file and renames it over the target.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` or `StoreError::WriteFile`.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(StoreError::Serialize)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, format!("{}\n", json)).map_err(StoreError::WriteFile)?;
        std::fs::rename(&tmp, &self.path).map_err(StoreError::WriteFile)?;

        debug!(path = %self.path.display(), entries = self.entries.len(), "store saved");
        Ok(())
    }
}
