//! district-engine configuration management.
//!
//! Handles the configuration file at:
//! - Linux/macOS: ~/.config/district-engine/config.toml
//! - Windows: %APPDATA%\district-engine\config.toml
//!
//! A missing file means defaults everywhere.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::error::{EngineError, Result};
use crate::normalize::AliasTable;
use crate::query::{SortState, DEFAULT_SORT_KEY};
use crate::selection::DEFAULT_COMPACT_BREAKPOINT;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Master-detail layout settings
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Roster view defaults
    #[serde(default)]
    pub roster: RosterConfig,

    /// Alternative spellings: alias -> canonical district name
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogConfig {
    /// JSON or TOML catalog file; the built-in taxonomy when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Viewport width below which master and detail share one pane
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: u32,
}

fn default_compact_breakpoint() -> u32 {
    DEFAULT_COMPACT_BREAKPOINT
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: default_compact_breakpoint(),
        }
    }
}

/// Roster configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterConfig {
    /// Sort column used when none is given
    #[serde(default = "default_sort_key")]
    pub default_sort: String,
}

fn default_sort_key() -> String {
    DEFAULT_SORT_KEY.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort_key(),
        }
    }
}

impl EngineConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("district-engine").join("config.toml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| EngineError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| EngineError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that only fail later, when they are used
    pub fn validate(&self) -> Result<()> {
        self.logging
            .level
            .parse::<LevelFilter>()
            .map_err(|_| EngineError::ConfigError {
                message: format!(
                    "[logging] level '{}' is not one of off, error, warn, info, debug, trace",
                    self.logging.level
                ),
            })?;
        Ok(())
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| EngineError::IoError {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| EngineError::ConfigError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, content).map_err(|e| EngineError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Alias normalizer built from the `[aliases]` table
    pub fn alias_table(&self) -> AliasTable {
        AliasTable::from(&self.aliases)
    }

    /// Initial roster sort state
    pub fn default_sort(&self) -> SortState {
        SortState::ascending(self.roster.default_sort.clone())
    }
}
