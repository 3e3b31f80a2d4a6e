//! Dashboard settings.
//!
//! Resolution order: built-in defaults, then the settings file, then
//! command-line overrides (applied by the binary). The settings file is JSON;
//! unknown keys are ignored and missing keys take their defaults.

use crate::constants::{
    APP_DIR_NAME, DEFAULT_DATA_PATH, DEFAULT_HOST, DEFAULT_MAX_SESSIONS, DEFAULT_PORT,
    DEFAULT_SLOW_RECOMPUTE_MS, SETTINGS_FILE_NAME,
};
use crate::types::{Aggregation, DomainOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything configurable about a dashboard process
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dataset file (csv, tsv or json)
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Ordering of dropdown options
    pub domain_order: DomainOrder,
    /// How bar values are combined when a region has several rows
    pub bar_aggregation: Aggregation,
    /// Recomputes slower than this are logged as warnings
    pub slow_recompute_ms: f64,
    /// Oldest sessions are dropped beyond this count
    pub max_sessions: usize,
    /// Open the dashboard in the default browser once serving
    pub open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            domain_order: DomainOrder::default(),
            bar_aggregation: Aggregation::default(),
            slow_recompute_ms: DEFAULT_SLOW_RECOMPUTE_MS,
            max_sessions: DEFAULT_MAX_SESSIONS,
            open_browser: false,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `explicit` if given, else from the default location if a
    /// file exists there, else use defaults.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            tracing::debug!("Loading settings from {}", path.display());
            return Self::from_file(path);
        }
        match default_settings_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading settings from {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `host:port` to bind the server to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `<config dir>/avocado-board/settings.json`, if the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
