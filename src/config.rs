//! Runtime settings
//!
//! Settings live in a RON file in the platform config directory. A missing
//! file means defaults; `POKEMON_API_URL` overrides the catalog endpoint.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable overriding `Settings::api_url`
pub const API_URL_ENV: &str = "POKEMON_API_URL";

/// Default catalog endpoint
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the species catalog
    pub api_url: String,
    /// Catalog request timeout in seconds
    pub timeout_secs: u64,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            log_filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Get the settings file path
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "alpha-enemy", "AlphaEnemy") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("settings.ron");
        path
    } else {
        PathBuf::from("./settings.ron")
    }
}

impl Settings {
    /// Read settings from a RON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from `path`, or defaults if there is no file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let settings = Self::from_file(path)?;
        log::debug!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    /// Load settings from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&settings_path())
    }

    /// Apply `POKEMON_API_URL` if it is set
    pub fn apply_env(&mut self) {
        self.apply_env_override(std::env::var(API_URL_ENV).ok());
    }

    /// Override the catalog endpoint if a non-empty value is given
    pub fn apply_env_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let settings: Settings = ron::from_str("(timeout_secs: 5)").unwrap();
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_from_missing_and_broken() {
        let dir = std::env::temp_dir().join(format!("alpha-enemy-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.ron");
        assert_eq!(Settings::load_from(&missing).unwrap(), Settings::default());

        let broken = dir.join("broken.ron");
        fs::write(&broken, "(timeout_secs: \"soon\")").unwrap();
        assert!(matches!(Settings::load_from(&broken), Err(ConfigError::Parse { .. })));

        let good = dir.join("good.ron");
        fs::write(&good, "(api_url: \"http://localhost:8000/api/v2\")").unwrap();
        assert_eq!(Settings::load_from(&good).unwrap().api_url, "http://localhost:8000/api/v2");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_env_override() {
        let mut settings = Settings::default();
        settings.apply_env_override(Some("  ".to_string()));
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        settings.apply_env_override(Some("http://mirror.local/api/v2".to_string()));
        assert_eq!(settings.api_url, "http://mirror.local/api/v2");
    }
}
