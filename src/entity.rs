//! Flat roster records (personnel, households, report scopes)
//!
//! The engine only interprets `id` and `locationKey`. Every other attribute
//! is opaque and is read back as a display string for search and sort.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{EngineError, Result};

/// Field name that addresses [`Entity::id`] in search/sort keys
pub const ID_FIELD: &str = "id";
/// Field name that addresses [`Entity::location_key`]
pub const LOCATION_FIELD: &str = "locationKey";

/// One roster record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identifier; positional ids are assigned on load when missing
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// District name as entered by the data provider
    #[serde(
        rename = "locationKey",
        alias = "location_key",
        alias = "district",
        default,
        deserialize_with = "lenient_string"
    )]
    pub location_key: String,
    /// Domain attributes (name, contact, role, risk level, ...)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Entity {
    pub fn new(id: impl Into<String>, location_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location_key: location_key.into(),
            attributes: Map::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Read any field as a display string. Missing fields read as `""`.
    pub fn field(&self, key: &str) -> Cow<'_, str> {
        match key {
            ID_FIELD => Cow::Borrowed(self.id.as_str()),
            LOCATION_FIELD => Cow::Borrowed(self.location_key.as_str()),
            _ => self
                .attributes
                .get(key)
                .map(display_value)
                .unwrap_or(Cow::Borrowed("")),
        }
    }

    pub fn name(&self) -> Cow<'_, str> {
        self.field("name")
    }
}

fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Accept strings, numbers and null where a string is expected
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

/// Parse a roster from JSON: a bare array, or `{ "entities": [...] }`.
///
/// Records without an id get their 0-based input position as id, suffixed
/// when that position is already another record's id.
pub fn parse_entities(content: &str) -> Result<Vec<Entity>> {
    let value: Value = serde_json::from_str(content).map_err(|e| EngineError::InvalidInput {
        message: format!("Failed to parse entities JSON: {}", e),
    })?;

    let list = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("entities") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(EngineError::InvalidInput {
                    message: "expected an array or an object with an 'entities' array".to_string(),
                })
            }
        },
        _ => {
            return Err(EngineError::InvalidInput {
                message: "expected an array of entity objects".to_string(),
            })
        }
    };

    let mut entities = Vec::with_capacity(list.len());
    for (position, item) in list.into_iter().enumerate() {
        if !item.is_object() {
            return Err(EngineError::InvalidInput {
                message: format!("entity #{} is not an object", position),
            });
        }
        let entity: Entity =
            serde_json::from_value(item).map_err(|e| EngineError::InvalidInput {
                message: format!("entity #{}: {}", position, e),
            })?;
        entities.push(entity);
    }
    assign_positional_ids(&mut entities);

    let mut ids: Vec<&str> = entities.iter().map(|e| e.id.as_str()).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    if ids.len() != before {
        tracing::warn!(
            "{} entities share an id with another record; selection resolves to the first",
            before - ids.len()
        );
    }

    Ok(entities)
}

/// Give id-less records their input position as id. A position already used
/// as an explicit id gets a `.N` suffix so every generated id is unique.
fn assign_positional_ids(entities: &mut [Entity]) {
    let mut taken: AHashSet<String> = entities
        .iter()
        .filter(|e| !e.id.is_empty())
        .map(|e| e.id.clone())
        .collect();

    for (position, entity) in entities.iter_mut().enumerate() {
        if !entity.id.is_empty() {
            continue;
        }
        let mut candidate = position.to_string();
        let mut suffix = 1;
        while taken.contains(&candidate) {
            candidate = format!("{}.{}", position, suffix);
            suffix += 1;
        }
        taken.insert(candidate.clone());
        entity.id = candidate;
    }
}

/// Read and parse a roster file
pub fn load_entities(path: &Path) -> Result<Vec<Entity>> {
    if !path.exists() {
        return Err(EngineError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| EngineError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let entities = parse_entities(&content)?;
    tracing::debug!("Loaded {} entities from {}", entities.len(), path.display());
    Ok(entities)
}
