//! Location key normalization
//!
//! Entity rosters carry district names as free text. Observed noise is limited
//! to letter case and leading/trailing whitespace, so the default strategy only
//! folds those. Internal whitespace and punctuation are significant because
//! real district names contain them.

use std::collections::BTreeMap;

use ahash::AHashMap;

/// Canonicalize a free-text location key for joining.
///
/// Lower-cases and trims leading/trailing whitespace. Never displayed.
///
/// # Example
///
/// ```
/// use district_engine::normalize::normalize;
///
/// assert_eq!(normalize("  Gulu "), "gulu");
/// assert_eq!(normalize("Madi-Okollo"), "madi-okollo");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Strategy for turning a raw location key into a join key.
///
/// The directory builder only depends on this trait, so fuzzy matching or
/// alias tables can be swapped in without touching the join.
pub trait Normalizer {
    fn normalize(&self, raw: &str) -> String;
}

/// Default strategy: case fold plus outer trim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseFold;

impl Normalizer for CaseFold {
    fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }
}

/// Alias table on top of [`CaseFold`].
///
/// Keys and targets are both stored normalized, so `"Gulu Municipality"` and
/// `" gulu municipality"` resolve to the same canonical district.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: AHashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` as another spelling of `canonical`
    pub fn with_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.insert(alias, canonical);
        self
    }

    pub fn insert(&mut self, alias: &str, canonical: &str) {
        self.aliases.insert(normalize(alias), normalize(canonical));
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl From<&BTreeMap<String, String>> for AliasTable {
    fn from(map: &BTreeMap<String, String>) -> Self {
        let mut table = AliasTable::new();
        for (alias, canonical) in map {
            table.insert(alias, canonical);
        }
        table
    }
}

impl Normalizer for AliasTable {
    fn normalize(&self, raw: &str) -> String {
        let key = normalize(raw);
        match self.aliases.get(&key) {
            Some(canonical) => canonical.clone(),
            None => key,
        }
    }
}
