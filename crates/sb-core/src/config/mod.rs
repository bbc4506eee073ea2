//! # Configuration
//!
//! Data structures for the values the history and the watcher are tuned by,
//! plus the TOML → DTO mapping.
//!
//! Mapping falls back to the defaults in [`defaults`] for missing keys and
//! rejects values of the wrong type. Range checks live in the `validate`
//! methods so a DTO built in code goes through the same rules as one read
//! from disk.
//!
//! ```toml
//! [history]
//! capacity = 30
//! max_display_chars = 55
//! recopy_mode = "consuming"   # or "non-consuming"
//!
//! [watcher]
//! poll_interval_ms = 200
//! ```

pub mod defaults;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context};

use crate::history::HistoryError;

/// What `recopy` does to the selected entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecopyMode {
    /// Remove the entry; the watcher re-adds it at the head after the write.
    #[default]
    Consuming,
    /// Leave the entry in place; dedup absorbs the write-back.
    NonConsuming,
}

impl RecopyMode {
    pub fn removes_entry(self) -> bool {
        matches!(self, RecopyMode::Consuming)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecopyMode::Consuming => "consuming",
            RecopyMode::NonConsuming => "non-consuming",
        }
    }
}

impl fmt::Display for RecopyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecopyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "consuming" => Ok(RecopyMode::Consuming),
            "non-consuming" | "non_consuming" | "nonconsuming" => Ok(RecopyMode::NonConsuming),
            other => Err(format!(
                "unknown recopy mode \"{other}\" (expected \"consuming\" or \"non-consuming\")"
            )),
        }
    }
}

/// History store tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of entries kept.
    pub capacity: usize,
    /// Longest single-line clipping shown verbatim as its key.
    pub max_display_chars: usize,
    pub recopy_mode: RecopyMode,
}

impl HistoryConfig {
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.capacity == 0 {
            return Err(HistoryError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.max_display_chars == 0 {
            return Err(HistoryError::InvalidConfig(
                "max_display_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Clipboard watcher tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherConfig {
    pub poll_interval: Duration,
}

impl WatcherConfig {
    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.poll_interval < defaults::MIN_POLL_INTERVAL {
            return Err(HistoryError::InvalidConfig(format!(
                "poll_interval_ms must be at least {}",
                defaults::MIN_POLL_INTERVAL.as_millis()
            )));
        }
        Ok(())
    }
}

/// Application configuration DTO.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub history: HistoryConfig,
    pub watcher: WatcherConfig,
}

impl AppConfig {
    /// Create AppConfig from a parsed TOML document.
    ///
    /// Missing sections and keys take their defaults. Values of the wrong type
    /// or sign are errors.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let history = toml_value.get("history");
        let watcher = toml_value.get("watcher");

        let capacity = read_usize(history, "capacity")
            .context("Invalid [history] capacity")?
            .unwrap_or(defaults::DEFAULT_CAPACITY);
        let max_display_chars = read_usize(history, "max_display_chars")
            .context("Invalid [history] max_display_chars")?
            .unwrap_or(defaults::DEFAULT_MAX_DISPLAY_CHARS);
        let recopy_mode = match history.and_then(|h| h.get("recopy_mode")) {
            None => RecopyMode::default(),
            Some(value) => value
                .as_str()
                .ok_or_else(|| anyhow!("[history] recopy_mode must be a string"))?
                .parse()
                .map_err(|e: String| anyhow!(e))?,
        };
        let poll_interval = read_usize(watcher, "poll_interval_ms")
            .context("Invalid [watcher] poll_interval_ms")?
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(defaults::DEFAULT_POLL_INTERVAL);

        Ok(Self {
            history: HistoryConfig {
                capacity,
                max_display_chars,
                recopy_mode,
            },
            watcher: WatcherConfig { poll_interval },
        })
    }

    pub fn validate(&self) -> Result<(), HistoryError> {
        self.history.validate()?;
        self.watcher.validate()
    }
}

fn read_usize(section: Option<&toml::Value>, key: &str) -> anyhow::Result<Option<usize>> {
    let Some(value) = section.and_then(|s| s.get(key)) else {
        return Ok(None);
    };
    let raw = value
        .as_integer()
        .ok_or_else(|| anyhow!("{key} must be an integer"))?;
    let parsed = usize::try_from(raw).map_err(|_| anyhow!("{key} must not be negative, got {raw}"))?;
    Ok(Some(parsed))
}
