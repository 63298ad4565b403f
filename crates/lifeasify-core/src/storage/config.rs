//! TOML-based application configuration.
//!
//! Holds the adjustable business assumptions behind the derived displays,
//! currently the lifespan used by the lifetime projection.
//!
//! Configuration is stored at `~/.config/lifeasify/config.toml`. Missing
//! files and missing fields fall back to defaults rather than erroring.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;
use crate::projection::DEFAULT_LIFESPAN_YEARS;

const CONFIG_FILE: &str = "config.toml";

/// Projection-specific configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Lifespan assumption behind the "it'll take in a life" column.
    #[serde(default = "default_lifespan_years")]
    pub lifespan_years: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            lifespan_years: default_lifespan_years(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/lifeasify/config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub projection: ProjectionConfig,
}

fn default_lifespan_years() -> f64 {
    DEFAULT_LIFESPAN_YEARS
}

impl Config {
    /// Path of the configuration file inside the data directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from(CONFIG_FILE),
            message: e.to_string(),
        })?;
        Ok(dir.join(CONFIG_FILE))
    }

    /// Load the configuration, falling back to defaults when the file does
    /// not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
