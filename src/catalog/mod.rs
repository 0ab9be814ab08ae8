//! Hierarchy catalog: the region → sub-region → district taxonomy
//!
//! The catalog is the join target for every roster. It is immutable once
//! built, and every district (compared by its normalized name) belongs to
//! exactly one (region, sub-region) pair. Custom catalogs are validated when
//! loaded; the built-in catalog is a lazily initialized process-wide constant.

mod builtin;
mod file;

use std::fs;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use serde::ser::{Serialize, SerializeMap, Serializer};

use self::file::CatalogFile;
use crate::error::{EngineError, Result};
use crate::normalize::normalize;

static BUILTIN: Lazy<HierarchyCatalog> = Lazy::new(|| {
    let entries = builtin::BUILTIN_TAXONOMY
        .iter()
        .map(|(region, subs)| RegionEntry {
            name: region.to_string(),
            sub_regions: subs
                .iter()
                .map(|(sub, districts)| SubRegionEntry {
                    name: sub.to_string(),
                    districts: districts.iter().map(|d| d.to_string()).collect(),
                })
                .collect(),
        })
        .collect();
    HierarchyCatalog::assemble(entries)
});

/// Where a district sits in the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistrictLocation {
    pub name: String,
    pub region: String,
    pub sub_region: String,
}

/// Borrowed view of one district during a catalog walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictRef<'a> {
    pub region: &'a str,
    pub sub_region: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRegionEntry {
    pub name: String,
    pub districts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEntry {
    pub name: String,
    pub sub_regions: Vec<SubRegionEntry>,
}

/// Static region/sub-region/district taxonomy
#[derive(Debug, Clone)]
pub struct HierarchyCatalog {
    regions: Vec<RegionEntry>,
    /// normalized district name -> location
    index: AHashMap<String, DistrictLocation>,
}

impl HierarchyCatalog {
    /// The built-in taxonomy, initialized on first use
    pub fn builtin() -> &'static HierarchyCatalog {
        &BUILTIN
    }

    /// Build a catalog from ordered entries, rejecting invalid taxonomies
    pub fn from_entries(regions: Vec<RegionEntry>) -> Result<Self> {
        validate_entries(&regions)?;
        Ok(Self::assemble(regions))
    }

    /// Parse a JSON catalog: `{ "Region": { "SubRegion": ["District", ...] } }`
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(content).map_err(|e| EngineError::InvalidCatalog {
                message: format!("Failed to parse catalog JSON: {}", e),
            })?;
        Self::from_entries(file.0)
    }

    /// Parse a TOML catalog with one table per region
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| EngineError::InvalidCatalog {
            message: format!("Failed to parse catalog TOML: {}", e),
        })?;
        Self::from_entries(file.0)
    }

    /// Load a catalog file, choosing the parser from the extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EngineError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| EngineError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&content)?,
            _ => Self::from_json_str(&content)?,
        };
        tracing::debug!(
            "Loaded catalog from {}: {} regions, {} districts",
            path.display(),
            catalog.regions.len(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Index entries without validation. Later duplicates never replace the
    /// first occurrence.
    fn assemble(regions: Vec<RegionEntry>) -> Self {
        let mut index = AHashMap::new();
        for region in &regions {
            for sub in &region.sub_regions {
                for district in &sub.districts {
                    index
                        .entry(normalize(district))
                        .or_insert_with(|| DistrictLocation {
                            name: district.clone(),
                            region: region.name.clone(),
                            sub_region: sub.name.clone(),
                        });
                }
            }
        }
        Self { regions, index }
    }

    /// Re-run load-time validation on this catalog
    pub fn validate(&self) -> Result<()> {
        validate_entries(&self.regions)
    }

    /// Region entries in catalog order
    pub fn entries(&self) -> &[RegionEntry] {
        &self.regions
    }

    /// Region names in catalog order
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    pub fn region(&self, name: &str) -> Option<&RegionEntry> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn has_region(&self, name: &str) -> bool {
        self.region(name).is_some()
    }

    /// Sub-region names of `region`, or `None` if the region is unknown
    pub fn sub_regions(&self, region: &str) -> Option<Vec<&str>> {
        self.region(region)
            .map(|r| r.sub_regions.iter().map(|s| s.name.as_str()).collect())
    }

    /// Districts of one (region, sub-region) pair in catalog order
    pub fn districts_in(&self, region: &str, sub_region: &str) -> Option<&[String]> {
        self.region(region)?
            .sub_regions
            .iter()
            .find(|s| s.name == sub_region)
            .map(|s| s.districts.as_slice())
    }

    /// Walk every district region → sub-region → district
    pub fn districts(&self) -> impl Iterator<Item = DistrictRef<'_>> {
        self.regions.iter().flat_map(|region| {
            region.sub_regions.iter().flat_map(move |sub| {
                sub.districts.iter().map(move |name| DistrictRef {
                    region: &region.name,
                    sub_region: &sub.name,
                    name,
                })
            })
        })
    }

    /// Find a district by free-text name (case and outer whitespace ignored)
    pub fn locate(&self, district: &str) -> Option<&DistrictLocation> {
        self.index.get(&normalize(district))
    }

    /// Number of districts
    pub fn len(&self) -> usize {
        self.regions
            .iter()
            .flat_map(|r| r.sub_regions.iter())
            .map(|s| s.districts.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_entries(regions: &[RegionEntry]) -> Result<()> {
    let mut seen: AHashMap<String, (String, String)> = AHashMap::new();
    let mut region_names: AHashSet<&str> = AHashSet::new();

    for region in regions {
        if region.name.trim().is_empty() {
            return Err(EngineError::InvalidCatalog {
                message: "region name must not be empty".to_string(),
            });
        }
        if !region_names.insert(region.name.as_str()) {
            return Err(EngineError::InvalidCatalog {
                message: format!("region '{}' is listed more than once", region.name),
            });
        }

        let mut sub_names: AHashSet<&str> = AHashSet::new();
        for sub in &region.sub_regions {
            if sub.name.trim().is_empty() {
                return Err(EngineError::InvalidCatalog {
                    message: format!("empty sub-region name in region '{}'", region.name),
                });
            }
            if !sub_names.insert(sub.name.as_str()) {
                return Err(EngineError::InvalidCatalog {
                    message: format!(
                        "sub-region '{}/{}' is listed more than once",
                        region.name, sub.name
                    ),
                });
            }

            for district in &sub.districts {
                let key = normalize(district);
                if key.is_empty() {
                    return Err(EngineError::InvalidCatalog {
                        message: format!("empty district name in '{}/{}'", region.name, sub.name),
                    });
                }
                if let Some((first_region, first_sub)) = seen.get(&key) {
                    return Err(EngineError::InvalidCatalog {
                        message: format!(
                            "district '{}' appears in both '{}/{}' and '{}/{}'",
                            district, first_region, first_sub, region.name, sub.name
                        ),
                    });
                }
                seen.insert(key, (region.name.clone(), sub.name.clone()));
            }
        }
    }

    Ok(())
}

impl Serialize for HierarchyCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.regions.len()))?;
        for region in &self.regions {
            map.serialize_entry(&region.name, &SubRegionMap(&region.sub_regions))?;
        }
        map.end()
    }
}

struct SubRegionMap<'a>(&'a [SubRegionEntry]);

impl Serialize for SubRegionMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for sub in self.0 {
            map.serialize_entry(&sub.name, &sub.districts)?;
        }
        map.end()
    }
}
