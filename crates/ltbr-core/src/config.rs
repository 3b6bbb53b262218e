//! Configuration loading for ltbr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment toggle that enables the note delete confirmation dialog.
pub const CONFIRM_NOTES_DELETE_ENV: &str = "CONFIRM_NOTES_DELETE";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ask before deleting a note
    pub confirm_note_delete: bool,
    /// Number of ranked words on the statistics tab
    pub top_words: usize,
    /// Reading speed assumed until real data exists
    pub default_wpm: f64,
    /// Pauses at least this long are not counted as reading time
    pub idle_threshold_secs: u64,
}

impl Config {
    pub const DEFAULT_WPM: f64 = crate::reading::DEFAULT_WPM;
    pub const DEFAULT_IDLE_THRESHOLD_SECS: u64 = 300;

    /// Loads configuration from the default path and applies environment
    /// overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path()?)?;
        config.apply_env_overrides(std::env::var(CONFIRM_NOTES_DELETE_ENV).ok().as_deref());
        Ok(config)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Applies the delete confirmation toggle. Only the literal `true`
    /// enables it; any other value disables it. `None` keeps the file value.
    pub fn apply_env_overrides(&mut self, confirm_notes_delete: Option<&str>) {
        if let Some(value) = confirm_notes_delete {
            self.confirm_note_delete = value == "true";
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confirm_note_delete: false,
            top_words: crate::stats::DEFAULT_TOP_WORDS,
            default_wpm: Self::DEFAULT_WPM,
            idle_threshold_secs: Self::DEFAULT_IDLE_THRESHOLD_SECS,
        }
    }
}

pub mod paths {
    //! Path resolution for ltbr data files.
    //!
    //! LTBR_HOME resolution order:
    //! 1. LTBR_HOME environment variable (if set)
    //! 2. ~/ltbr (default)

    use std::path::PathBuf;

    use anyhow::{Context, Result};

    pub const HOME_ENV: &str = "LTBR_HOME";

    /// Returns the ltbr home directory.
    pub fn ltbr_home() -> Result<PathBuf> {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return Ok(PathBuf::from(home));
        }

        dirs::home_dir()
            .map(|h| h.join("ltbr"))
            .context("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(ltbr_home()?.join("config.toml"))
    }

    /// Returns the path to the shared progress store.
    pub fn progress_path() -> Result<PathBuf> {
        Ok(ltbr_home()?.join("progress.json"))
    }

    /// Log file name, created inside the home directory.
    pub const LOG_FILE_NAME: &str = "ltbr.log";
}
