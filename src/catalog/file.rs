//! Catalog file shape: `{ "Region": { "SubRegion": ["District", ...] } }`
//!
//! Deserialized with map visitors instead of an intermediate map type so that
//! key order is kept and a region or sub-region listed twice reaches
//! validation instead of being collapsed by the parser.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use super::{RegionEntry, SubRegionEntry};

pub(crate) struct CatalogFile(pub Vec<RegionEntry>);

struct SubRegions(Vec<SubRegionEntry>);

impl<'de> Deserialize<'de> for CatalogFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RegionsVisitor;

        impl<'de> Visitor<'de> for RegionsVisitor {
            type Value = CatalogFile;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of regions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut regions = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, subs)) = map.next_entry::<String, SubRegions>()? {
                    regions.push(RegionEntry {
                        name,
                        sub_regions: subs.0,
                    });
                }
                Ok(CatalogFile(regions))
            }
        }

        deserializer.deserialize_map(RegionsVisitor)
    }
}

impl<'de> Deserialize<'de> for SubRegions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SubRegionsVisitor;

        impl<'de> Visitor<'de> for SubRegionsVisitor {
            type Value = SubRegions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping sub-regions to district lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut subs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, districts)) = map.next_entry::<String, Vec<String>>()? {
                    subs.push(SubRegionEntry { name, districts });
                }
                Ok(SubRegions(subs))
            }
        }

        deserializer.deserialize_map(SubRegionsVisitor)
    }
}
