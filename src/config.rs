//! Configuration-file defaults
//!
//! Optional TOML file supplying default notification fields for flags the
//! user did not pass. A missing or unparseable file is never an error; the
//! tool falls back to built-in defaults and logs what happened.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotifyConfig {
    /// Default notification fields applied where flags are absent
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default notification fields
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Defaults {
    /// Default notification title
    #[serde(default)]
    pub title: Option<String>,

    /// Default notification subtitle
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Default icon path or URL
    #[serde(default)]
    pub icon: Option<String>,

    /// Default sound name; "none" silences every notification
    #[serde(default)]
    pub sound: Option<String>,
}

impl NotifyConfig {
    /// Load configuration from the default path (~/.config/notify-cli/config.toml)
    pub fn load() -> Self {
        Self::load_from_path(Self::default_path())
    }

    /// Get the default configuration path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new().map_or_else(
            || PathBuf::from("~/.config/notify-cli/config.toml"),
            |dirs| dirs.config_dir().join("notify-cli").join("config.toml"),
        )
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: PathBuf) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::debug!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}, using defaults", e);
                Self::default()
            }
        }
    }
}
