//! district-engine: location-scoped directory and query engine
//!
//! Joins flat rosters (personnel, households, report scopes) onto a
//! region → sub-region → district hierarchy and serves the filter, search,
//! sort and selection operations of a master-detail dashboard.
//!
//! # Pipeline
//!
//! - [`catalog`] - static taxonomy, validated on load
//! - [`normalize`] - free-text location keys to join keys
//! - [`directory`] - roster + catalog → district nodes (+ unmatched bucket)
//! - [`query`] - scope/search/sort over nodes and rosters
//! - [`selection`] - single selection re-derived from live data
//! - [`session`] - memoized build and query steps
//!
//! # Example
//!
//! ```
//! use district_engine::{build, query, HierarchyCatalog, Entity, QueryState};
//!
//! let catalog = HierarchyCatalog::from_json_str(
//!     r#"{ "North": { "SubA": ["Gulu", "Omoro"] } }"#,
//! ).unwrap();
//! let entities = vec![
//!     Entity::new("1", " gulu ").with_attr("name", "A"),
//!     Entity::new("2", "OMORO").with_attr("name", "B"),
//! ];
//!
//! let directory = build(&catalog, &entities);
//! let view = query(directory.nodes(), &QueryState::new().with_search("om"));
//! assert_eq!(view.total, 1);
//! assert_eq!(view.groups[0].nodes[0].name, "Omoro");
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod directory;
pub mod entity;
pub mod error;
pub mod normalize;
pub mod query;
pub mod selection;
pub mod session;

// Re-export commonly used types
pub use catalog::{DistrictLocation, HierarchyCatalog};
pub use cli::{Cli, Commands, OutputFormat};
pub use config::EngineConfig;
pub use directory::{build, build_with, Directory, DistrictNode, NodeSummary};
pub use entity::{load_entities, parse_entities, Entity};
pub use error::{EngineError, Result};
pub use normalize::{normalize, AliasTable, CaseFold, Normalizer};
pub use query::{
    query, query_entities, query_entities_with, DirectoryView, NodeGroup, QueryState,
    RosterQuery, Scope, SortDirection, SortState,
};
pub use selection::{
    Identified, Layout, PaneVisibility, SelectionCoordinator, SelectionEvent, SelectionState,
};
pub use session::{QueryResult, Session, SessionStats};
