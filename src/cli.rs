//! CLI argument definitions using clap with subcommand architecture
//!
//! Every command reads an entity roster (JSON), joins it against the
//! hierarchy catalog, and prints the requested view.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Location-scoped directory and query engine
#[derive(Parser, Debug)]
#[command(name = "district-engine")]
#[command(about = "Join rosters onto the region/sub-region/district hierarchy and query them")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_name = "FILE", global = true, env = "DISTRICT_ENGINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog file overriding the configured/built-in catalog
    #[arg(long, value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,
}

// ============================================
// Main Commands Enum
// ============================================

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List or validate the hierarchy catalog
    #[command(visible_alias = "c")]
    Catalog(CatalogArgs),

    /// Build the district directory from a roster
    #[command(visible_alias = "d")]
    Directory(DirectoryArgs),

    /// Filter and group the directory by scope and name search
    #[command(visible_alias = "q")]
    Query(QueryArgs),

    /// Search and sort the roster of one district
    #[command(visible_alias = "r")]
    Roster(RosterArgs),

    /// Resolve a selected record and report the pane layout
    Show(ShowArgs),
}

// ============================================
// Catalog Subcommand
// ============================================

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only list this region
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Only validate; print nothing but the verdict
    #[arg(long)]
    pub check: bool,
}

// ============================================
// Directory Subcommand
// ============================================

#[derive(Args, Debug)]
pub struct DirectoryArgs {
    /// Entity roster (JSON array or {"entities": [...]})
    #[arg(value_name = "ENTITIES")]
    pub entities: PathBuf,

    /// List entities that matched no district
    #[arg(long)]
    pub show_unmatched: bool,

    /// Hide districts without entities in text output
    #[arg(long)]
    pub non_empty: bool,
}

// ============================================
// Query Subcommand
// ============================================

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Entity roster (JSON array or {"entities": [...]})
    #[arg(value_name = "ENTITIES")]
    pub entities: PathBuf,

    /// Region scope ("All" for national view)
    #[arg(long, value_name = "REGION", default_value = "All")]
    pub scope: String,

    /// Narrow the scope to one sub-region of --scope
    #[arg(long, value_name = "SUB_REGION")]
    pub sub_region: Option<String>,

    /// Case-insensitive substring of the district name
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Order nodes within groups by name, count, region or subRegion
    #[arg(long, value_name = "KEY", default_value = "name")]
    pub sort: String,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

// ============================================
// Roster Subcommand
// ============================================

#[derive(Args, Debug)]
pub struct RosterArgs {
    /// Entity roster (JSON array or {"entities": [...]})
    #[arg(value_name = "ENTITIES")]
    pub entities: PathBuf,

    /// District whose roster to list
    #[arg(long, value_name = "DISTRICT")]
    pub district: String,

    /// Case-insensitive substring of name, subLocation or role
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Sort column (defaults to the configured roster sort)
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

// ============================================
// Show Subcommand
// ============================================

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Entity roster (JSON array or {"entities": [...]})
    #[arg(value_name = "ENTITIES")]
    pub entities: PathBuf,

    /// District the record belongs to
    #[arg(long, value_name = "DISTRICT")]
    pub district: String,

    /// Selected record id
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// Viewport width used to pick the pane layout
    #[arg(long, value_name = "PX", default_value = "1280")]
    pub width: u32,
}

// ============================================
// Output Format
// ============================================

/// Output format for all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// TOON (Token-Oriented Object Notation)
    Toon,
    /// JSON for machine parsing
    Json,
}
