//! User configuration, stored as JSON in the platform config directory.
//!
//! Loading never fails: a missing or malformed file falls back to defaults so
//! the brochure always starts.

use std::{env, io, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when persisting the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Preferred theme name ("marine" or "ansi")
    pub theme: Option<String>,
    /// Overrides the displayed contact phone
    pub phone: Option<String>,
}

impl AppConfig {
    /// Loads the configuration from the default path, falling back to
    /// defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        let path = default_config_path();
        if let Ok(content) = std::fs::read_to_string(&path)
            && let Ok(config) = serde_json::from_str(&content)
        {
            return config;
        }
        AppConfig::default()
    }

    /// Writes the configuration to the default path, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = default_config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// Default path for the configuration file.
///
/// `NAVETTA_CONFIG_PATH` overrides the platform location when set and
/// non-empty.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var("NAVETTA_CONFIG_PATH")
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("navetta")
        .join("config.json")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs_next::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let parsed: Result<AppConfig, _> = serde_json::from_str("{not json");
        assert!(parsed.is_err());
        assert_eq!(AppConfig::default().theme, None);
    }

    #[test]
    fn config_round_trips() {
        let config = AppConfig {
            theme: Some("marine".into()),
            phone: Some("081 000 0000".into()),
        };
        let json = serde_json::to_string(&config).expect("serialize AppConfig");
        let back: AppConfig = serde_json::from_str(&json).expect("deserialize AppConfig");
        assert_eq!(back, config);
    }
}
