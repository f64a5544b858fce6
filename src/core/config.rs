//! Configuration file management.
//!
//! Handles reading and validating the optional `config.toml`. A missing file
//! is not an error; every setting has a default.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::history::HistoryManager;
use crate::core::sink::LogSink;
use crate::error::{ConfigError, Result};

/// User configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// History retention settings
    #[serde(default)]
    pub history: HistorySettings,
    /// Display settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// The `[history]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Retention window, at most `MAX_HISTORY_SIZE`
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// Warn when a new password was used before
    #[serde(default = "default_true")]
    pub warn_on_reuse: bool,
}

/// The `[display]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// `chrono` strftime format for history dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_max_size() -> usize {
    constants::MAX_HISTORY_SIZE
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    constants::DEFAULT_DATE_FORMAT.to_string()
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            warn_on_reuse: true,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Path to the configuration file.
    ///
    /// `REWIND_CONFIG` wins; otherwise `<config_dir>/rewind/config.toml`.
    /// Returns `None` when no config directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load configuration from the default location.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// `ConfigError::Parse` if the TOML is malformed, or a validation error.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(
            max_size = config.history.max_size,
            warn_on_reuse = config.history.warn_on_reuse,
            "config loaded"
        );

        Ok(config)
    }

    /// Check that settings are within bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMaxSize` if the retention window is outside
    /// `1..=MAX_HISTORY_SIZE`, or `ConfigError::InvalidDateFormat` if the date
    /// format does not parse.
    pub fn validate(&self) -> Result<()> {
        let max = self.history.max_size;
        if max == 0 || max > constants::MAX_HISTORY_SIZE {
            return Err(ConfigError::InvalidMaxSize(max).into());
        }

        let format = &self.display.date_format;
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidDateFormat(format.clone()).into());
        }

        Ok(())
    }

    /// Build a history manager from these settings.
    pub fn manager<S: LogSink>(&self, sink: S) -> HistoryManager<S> {
        HistoryManager::with_sink(sink)
            .with_max_size(self.history.max_size)
            .with_date_format(self.display.date_format.clone())
    }
}
