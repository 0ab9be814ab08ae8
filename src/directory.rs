//! Directory builder: joins a flat roster onto the hierarchy catalog
//!
//! Each catalog district becomes one [`DistrictNode`] owning the entities
//! whose normalized location key matches it. Districts without entities are
//! kept with a zero count. Entities that match no district are collected in
//! [`Directory::unmatched`] instead of disappearing.

use ahash::AHashMap;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::catalog::HierarchyCatalog;
use crate::entity::Entity;
use crate::normalize::{normalize, CaseFold, Normalizer};

/// A catalog district together with its matched entities
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictNode {
    pub name: String,
    pub region: String,
    pub sub_region: String,
    entities: Vec<Entity>,
}

impl DistrictNode {
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        sub_region: impl Into<String>,
        entities: Vec<Entity>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            sub_region: sub_region.into(),
            entities,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Always `entities().len()`
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Find a member entity by id
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// The node without its entities, for list views
    pub fn summary(&self) -> NodeSummary<'_> {
        NodeSummary {
            name: &self.name,
            region: &self.region,
            sub_region: &self.sub_region,
            count: self.count(),
        }
    }
}

/// Serialized header of a [`DistrictNode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary<'a> {
    pub name: &'a str,
    pub region: &'a str,
    pub sub_region: &'a str,
    pub count: usize,
}

impl Serialize for DistrictNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Full<'a> {
            #[serde(flatten)]
            summary: NodeSummary<'a>,
            entities: &'a [Entity],
        }

        Full {
            summary: self.summary(),
            entities: &self.entities,
        }
        .serialize(serializer)
    }
}

/// Output of one builder run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Directory {
    nodes: Vec<DistrictNode>,
    unmatched: Vec<Entity>,
}

impl Directory {
    /// Nodes sorted by district name, case-insensitive ascending
    pub fn nodes(&self) -> &[DistrictNode] {
        &self.nodes
    }

    /// Entities whose location key matched no catalog district, in input order
    pub fn unmatched(&self) -> &[Entity] {
        &self.unmatched
    }

    /// Look up a node by free-text district name
    pub fn node(&self, name: &str) -> Option<&DistrictNode> {
        let key = normalize(name);
        self.nodes.iter().find(|n| normalize(&n.name) == key)
    }

    /// Entities attached to some node
    pub fn matched_total(&self) -> usize {
        self.nodes.iter().map(DistrictNode::count).sum()
    }

    /// Every input entity, matched or not
    pub fn entity_total(&self) -> usize {
        self.matched_total() + self.unmatched.len()
    }

    /// Distinct regions present in the nodes, in first-seen order
    pub fn regions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for node in &self.nodes {
            if !out.contains(&node.region.as_str()) {
                out.push(&node.region);
            }
        }
        out
    }
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Directory", 4)?;
        state.serialize_field("districts", &self.nodes.len())?;
        state.serialize_field("matched", &self.matched_total())?;
        state.serialize_field("nodes", &self.nodes)?;
        state.serialize_field("unmatched", &self.unmatched)?;
        state.end()
    }
}

/// Case-insensitive district name ordering, ties broken by the raw name
pub(crate) fn compare_names(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Build the directory with the default case-fold normalizer
pub fn build(catalog: &HierarchyCatalog, entities: &[Entity]) -> Directory {
    build_with(catalog, entities, &CaseFold)
}

/// Build the directory with a custom normalizer.
///
/// Never fails: unmatched input ends up in [`Directory::unmatched`].
pub fn build_with(
    catalog: &HierarchyCatalog,
    entities: &[Entity],
    normalizer: &dyn Normalizer,
) -> Directory {
    // key -> input positions, in input order
    let mut groups: AHashMap<String, Vec<usize>> = AHashMap::with_capacity(entities.len());
    for (position, entity) in entities.iter().enumerate() {
        groups
            .entry(normalizer.normalize(&entity.location_key))
            .or_default()
            .push(position);
    }

    let mut claimed = vec![false; entities.len()];
    let mut nodes: Vec<DistrictNode> = Vec::with_capacity(catalog.len());
    for district in catalog.districts() {
        // Catalog names are canonical; only roster keys go through the normalizer
        let matched = match groups.remove(&normalize(district.name)) {
            Some(positions) => positions
                .into_iter()
                .map(|p| {
                    claimed[p] = true;
                    entities[p].clone()
                })
                .collect(),
            None => Vec::new(),
        };
        nodes.push(DistrictNode::new(
            district.name,
            district.region,
            district.sub_region,
            matched,
        ));
    }

    nodes.sort_by(|a, b| compare_names(&a.name, &b.name));

    let unmatched: Vec<Entity> = entities
        .iter()
        .zip(claimed)
        .filter(|(_, claimed)| !claimed)
        .map(|(e, _)| e.clone())
        .collect();

    if !unmatched.is_empty() {
        tracing::warn!(
            "{} of {} entities matched no catalog district",
            unmatched.len(),
            entities.len()
        );
    }
    tracing::debug!(
        "Built directory: {} districts, {} matched entities",
        nodes.len(),
        entities.len() - unmatched.len()
    );

    Directory { nodes, unmatched }
}
