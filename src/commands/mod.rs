//! Command modules for the district-engine CLI
//!
//! Each command module implements a single top-level command:
//! - `catalog` - List or validate the hierarchy catalog
//! - `directory` - Build the district directory from a roster
//! - `query` - Scoped, searched, grouped directory view
//! - `roster` - Searched and sorted roster of one district
//! - `show` - Resolve a selection and report the pane layout
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext` for output format, configuration and the
//! catalog source.

pub mod catalog;
pub mod directory;
pub mod query;
pub mod roster;
pub mod show;

pub use catalog::run_catalog;
pub use directory::run_directory;
pub use query::run_query;
pub use roster::run_roster;
pub use show::run_show;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::HierarchyCatalog;
use crate::cli::OutputFormat;
use crate::config::EngineConfig;
use crate::directory::{build_with, Directory};
use crate::entity::load_entities;
use crate::error::Result;

/// Shared context passed to all command handlers
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Output format (text, toon, or json)
    pub format: OutputFormat,
    /// Loaded configuration
    pub config: EngineConfig,
    /// Catalog file given on the command line
    pub catalog_override: Option<PathBuf>,
}

/// Encode a JSON value as proper TOON using the rtoon library
pub fn encode_toon(value: &serde_json::Value) -> String {
    rtoon::encode_default(value).unwrap_or_else(|e| format!("TOON encoding error: {}", e))
}

impl CommandContext {
    pub fn new(format: OutputFormat, config: EngineConfig) -> Self {
        Self {
            format,
            config,
            catalog_override: None,
        }
    }

    pub fn with_catalog_override(mut self, path: Option<PathBuf>) -> Self {
        self.catalog_override = path;
        self
    }

    /// Catalog from `--catalog`, then `[catalog] path`, then the built-in one
    pub fn catalog(&self) -> Result<Arc<HierarchyCatalog>> {
        let path = self
            .catalog_override
            .as_deref()
            .or(self.config.catalog.path.as_deref());
        match path {
            Some(path) => Ok(Arc::new(HierarchyCatalog::load(path)?)),
            None => Ok(Arc::new(HierarchyCatalog::builtin().clone())),
        }
    }

    /// Load the roster and build the directory with the configured aliases
    pub fn build_directory(&self, entities: &Path) -> Result<Directory> {
        let catalog = self.catalog()?;
        let entities = load_entities(entities)?;
        Ok(build_with(&catalog, &entities, &self.config.alias_table()))
    }

    /// Render `json` in the requested format; `text` produces the text form
    pub fn render(&self, json: &serde_json::Value, text: impl FnOnce() -> String) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(json).unwrap_or_default(),
            OutputFormat::Toon => encode_toon(json),
            OutputFormat::Text => text(),
        }
    }
}

/// Section header used by text output
pub(crate) fn banner(title: &str) -> String {
    let rule = "═".repeat(43);
    format!("{rule}\n  {title}\n{rule}\n\n")
}
