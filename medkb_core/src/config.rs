//! Configuration file support for medkb.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/medkb/config.toml`. Every
//! field has a default, so a partial file is valid and a missing file means
//! all defaults.

use crate::level::LevelNumber;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Where stores come from
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    /// Directory of additional JSON store files
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,

    /// Publish the compiled-in stores alongside the loaded ones
    #[serde(default = "default_true")]
    pub load_builtin: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            load_builtin: true,
        }
    }
}

/// Presentation defaults
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Level shown for tiered entries when none is requested
    #[serde(default = "default_level")]
    pub default_level: LevelNumber,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
        }
    }
}

/// Checks run after the library is assembled
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    /// Log a warning for every dangling cross-reference
    #[serde(default = "default_true")]
    pub lint_cross_references: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            lint_cross_references: true,
        }
    }
}

// Default value functions
fn default_store_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("medkb").join("stores")
}

fn default_level() -> LevelNumber {
    LevelNumber::ALL[1]
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("medkb").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
