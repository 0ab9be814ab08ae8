//! Query engine over the built directory
//!
//! Two independent pure functions:
//! - [`query`] filters district nodes by scope and name search and groups them
//!   (by region for a national scope, by sub-region once a region is chosen).
//! - [`query_entities`] searches and sorts the roster of one district.
//!
//! All view state lives in immutable values ([`QueryState`], [`RosterQuery`],
//! [`SortState`]) that callers replace wholesale on every interaction.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::directory::{compare_names, DistrictNode};
use crate::entity::Entity;

/// Roster fields matched by the roster-level search box
pub const ROSTER_SEARCH_FIELDS: &[&str] = &["name", "subLocation", "role"];

/// Default sort key for both directory and roster views
pub const DEFAULT_SORT_KEY: &str = "name";

/// Location scope of the directory view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "camelCase")]
pub enum Scope {
    #[default]
    All,
    Region { region: String },
    SubRegion { region: String, sub_region: String },
}

impl Scope {
    pub fn region(name: impl Into<String>) -> Self {
        Scope::Region {
            region: name.into(),
        }
    }

    pub fn sub_region(region: impl Into<String>, sub_region: impl Into<String>) -> Self {
        Scope::SubRegion {
            region: region.into(),
            sub_region: sub_region.into(),
        }
    }

    /// Whether `node` falls inside this scope
    pub fn admits(&self, node: &DistrictNode) -> bool {
        match self {
            Scope::All => true,
            Scope::Region { region } => node.region == *region,
            Scope::SubRegion { region, sub_region } => {
                node.region == *region && node.sub_region == *sub_region
            }
        }
    }

    /// Label of the group `node` is shown under for this scope
    fn group_label<'a>(&self, node: &'a DistrictNode) -> &'a str {
        match self {
            Scope::All => &node.region,
            _ => &node.sub_region,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self::ascending(DEFAULT_SORT_KEY)
    }
}

impl SortState {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Column header click: the active key flips direction, a new key starts
    /// ascending.
    #[must_use]
    pub fn toggle(&self, key: &str) -> Self {
        if self.key == key {
            Self {
                key: self.key.clone(),
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(key)
        }
    }
}

/// Directory-level view state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QueryState {
    pub scope: Scope,
    pub search: String,
    pub sort: SortState,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scope(&self, scope: Scope) -> Self {
        Self {
            scope,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sort(&self, sort: SortState) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Apply a column header click
    #[must_use]
    pub fn toggle_sort(&self, key: &str) -> Self {
        self.with_sort(self.sort.toggle(key))
    }
}

/// Roster-level view state (search box and sortable columns of one district)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RosterQuery {
    pub search: String,
    pub sort: SortState,
}

impl RosterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn toggle_sort(&self, key: &str) -> Self {
        Self {
            sort: self.sort.toggle(key),
            ..self.clone()
        }
    }
}

/// One labelled group of the directory view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeGroup<'a> {
    pub label: &'a str,
    pub nodes: Vec<&'a DistrictNode>,
}

/// Filtered, grouped directory view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryView<'a> {
    /// Groups ordered by label, case-insensitive ascending
    pub groups: Vec<NodeGroup<'a>>,
    /// Number of nodes across all groups
    pub total: usize,
}

impl<'a> DirectoryView<'a> {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn group(&self, label: &str) -> Option<&NodeGroup<'a>> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// Nodes in display order
    pub fn nodes(&self) -> impl Iterator<Item = &'a DistrictNode> + '_ {
        self.groups.iter().flat_map(|g| g.nodes.iter().copied())
    }

    /// Sum of entity counts across the view
    pub fn entity_total(&self) -> usize {
        self.nodes().map(DistrictNode::count).sum()
    }
}

/// Group of node positions; the index form of [`NodeGroup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GroupPositions {
    pub label: String,
    pub positions: Vec<usize>,
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

fn compare_nodes(a: &DistrictNode, b: &DistrictNode, key: &str) -> Ordering {
    match key {
        "count" => a.count().cmp(&b.count()),
        "name" => compare_names(&a.name, &b.name),
        "region" => a.region.to_lowercase().cmp(&b.region.to_lowercase()),
        "subRegion" => a.sub_region.to_lowercase().cmp(&b.sub_region.to_lowercase()),
        _ => Ordering::Equal,
    }
}

/// Compute the grouped view as node positions
pub(crate) fn query_positions(nodes: &[DistrictNode], state: &QueryState) -> Vec<GroupPositions> {
    let needle = state.search.to_lowercase();
    let mut groups: Vec<GroupPositions> = Vec::new();

    for (position, node) in nodes.iter().enumerate() {
        if !state.scope.admits(node) || !contains_folded(&node.name, &needle) {
            continue;
        }
        let label = state.scope.group_label(node);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.positions.push(position),
            None => groups.push(GroupPositions {
                label: label.to_string(),
                positions: vec![position],
            }),
        }
    }

    groups.sort_by(|a, b| compare_names(&a.label, &b.label));
    for group in &mut groups {
        group.positions.sort_by(|&a, &b| {
            state
                .sort
                .direction
                .apply(compare_nodes(&nodes[a], &nodes[b], &state.sort.key))
        });
    }
    groups
}

pub(crate) fn resolve_positions<'a>(
    nodes: &'a [DistrictNode],
    groups: &'a [GroupPositions],
) -> DirectoryView<'a> {
    let groups: Vec<NodeGroup<'a>> = groups
        .iter()
        .map(|g| NodeGroup {
            label: &g.label,
            nodes: g.positions.iter().map(|&p| &nodes[p]).collect(),
        })
        .collect();
    let total = groups.iter().map(|g| g.nodes.len()).sum();
    DirectoryView { groups, total }
}

/// Filter and group district nodes.
///
/// - `scope` keeps nodes inside the chosen region / sub-region
/// - `search` is a case-insensitive substring of the district name only
/// - groups are regions under [`Scope::All`], sub-regions otherwise
pub fn query<'a>(nodes: &'a [DistrictNode], state: &QueryState) -> DirectoryView<'a> {
    let positions = query_positions(nodes, state);
    let groups: Vec<NodeGroup<'a>> = positions
        .into_iter()
        .map(|g| {
            let label = g
                .positions
                .first()
                .map(|&p| state.scope.group_label(&nodes[p]))
                .unwrap_or_default();
            NodeGroup {
                label,
                nodes: g.positions.iter().map(|&p| &nodes[p]).collect(),
            }
        })
        .collect();
    let total = groups.iter().map(|g| g.nodes.len()).sum();
    tracing::debug!(
        "Directory query scope={:?} search={:?}: {} nodes in {} groups",
        state.scope,
        state.search,
        total,
        groups.len()
    );
    DirectoryView { groups, total }
}

fn matches_roster_fields(entity: &Entity, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || ROSTER_SEARCH_FIELDS
            .iter()
            .any(|field| contains_folded(&entity.field(field), needle_lower))
}

/// Whether `entity` matches the roster search box
pub fn roster_matches(entity: &Entity, search: &str) -> bool {
    matches_roster_fields(entity, &search.to_lowercase())
}

/// Search and sort one district's roster.
///
/// Sorting compares the `sort_key` field case-insensitively (missing values
/// read as empty) and is stable for equal keys in both directions.
pub fn query_entities<'a>(
    entities: &'a [Entity],
    search: &str,
    sort_key: &str,
    direction: SortDirection,
) -> Vec<&'a Entity> {
    let needle = search.to_lowercase();
    let mut keyed: Vec<(String, &'a Entity)> = entities
        .iter()
        .filter(|e| matches_roster_fields(e, &needle))
        .map(|e| (e.field(sort_key).to_lowercase(), e))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// [`query_entities`] driven by a [`RosterQuery`] value
pub fn query_entities_with<'a>(entities: &'a [Entity], roster: &RosterQuery) -> Vec<&'a Entity> {
    query_entities(
        entities,
        &roster.search,
        &roster.sort.key,
        roster.sort.direction,
    )
}
