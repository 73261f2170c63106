//! Compile-time studio registry
//!
//! The first resolution tier after memory: a curated table of major parent
//! publishers, their subsidiary studios, and well-known game franchises.
//! All reverse indices are built up front in [`StudioRegistry::new`], so
//! lookups are plain map reads with no lazy population on the query path.

use std::collections::{HashMap, HashSet};

use crate::models::StudioInfo;
use crate::utils::normalize::normalize_studio_key;

mod data;

/// One parent publisher with its subsidiary studios, in declaration order.
#[derive(Debug, Clone)]
pub struct ParentStudio {
    pub key: String,
    pub subsidiaries: Vec<StudioInfo>,
}

#[derive(Debug, Clone)]
struct FranchiseEntry {
    key: String,
    studios: Vec<StudioInfo>,
}

/// Static lookup tables for parent publishers and game franchises.
///
/// A subsidiary that appears under several parents (studio changed hands,
/// umbrella owner) indexes to its first declaring parent.
#[derive(Debug)]
pub struct StudioRegistry {
    parents: Vec<ParentStudio>,
    /// Parent key or alias, lower-cased
    parent_index: HashMap<String, usize>,
    /// Subsidiary catalog slug
    slug_index: HashMap<String, usize>,
    /// Subsidiary display name, lower-cased
    name_index: HashMap<String, usize>,
    franchises: Vec<FranchiseEntry>,
    franchise_index: HashMap<String, usize>,
}

impl StudioRegistry {
    pub fn new() -> Self {
        let mut parents = Vec::with_capacity(data::PUBLISHERS.len());
        let mut parent_index = HashMap::new();
        let mut slug_index = HashMap::new();
        let mut name_index = HashMap::new();

        for record in data::PUBLISHERS {
            let idx = parents.len();
            let subsidiaries: Vec<StudioInfo> = record
                .subsidiaries
                .iter()
                .map(|(name, slug)| StudioInfo::new(*name, *slug))
                .collect();

            parent_index.insert(record.key.to_string(), idx);
            for alias in record.aliases {
                parent_index.insert((*alias).to_string(), idx);
            }
            for info in &subsidiaries {
                slug_index.entry(info.slug.clone()).or_insert(idx);
                name_index
                    .entry(info.display_name.to_lowercase())
                    .or_insert(idx);
            }

            parents.push(ParentStudio {
                key: record.key.to_string(),
                subsidiaries,
            });
        }

        let mut franchises = Vec::with_capacity(data::FRANCHISES.len());
        let mut franchise_index = HashMap::new();
        for (key, studios) in data::FRANCHISES {
            let idx = franchises.len();
            franchise_index.insert((*key).to_string(), idx);
            franchises.push(FranchiseEntry {
                key: (*key).to_string(),
                studios: studios
                    .iter()
                    .map(|(name, slug)| StudioInfo::new(*name, *slug))
                    .collect(),
            });
        }

        Self {
            parents,
            parent_index,
            slug_index,
            name_index,
            franchises,
            franchise_index,
        }
    }

    fn lookup(&self, name: &str) -> Option<&ParentStudio> {
        let key = normalize_studio_key(name);
        if key.is_empty() {
            return None;
        }
        let idx = self
            .parent_index
            .get(&key)
            .or_else(|| self.slug_index.get(&key))
            .or_else(|| self.name_index.get(&key))?;
        self.parents.get(*idx)
    }

    /// Subsidiary studios for a query naming a parent publisher (or alias),
    /// a subsidiary slug, or a subsidiary display name.
    pub fn subsidiaries(&self, name: &str) -> Option<&[StudioInfo]> {
        self.lookup(name).map(|parent| parent.subsidiaries.as_slice())
    }

    /// Comma-joined catalog slugs for the same resolution as [`subsidiaries`].
    ///
    /// [`subsidiaries`]: StudioRegistry::subsidiaries
    pub fn subsidiary_slugs(&self, name: &str) -> Option<String> {
        self.lookup(name).map(|parent| {
            parent
                .subsidiaries
                .iter()
                .map(|s| s.slug.as_str())
                .collect::<Vec<_>>()
                .join(",")
        })
    }

    /// Display names for the same resolution as [`subsidiaries`], as a set.
    ///
    /// [`subsidiaries`]: StudioRegistry::subsidiaries
    pub fn subsidiary_names(&self, name: &str) -> Option<HashSet<String>> {
        self.lookup(name).map(|parent| {
            parent
                .subsidiaries
                .iter()
                .map(|s| s.display_name.clone())
                .collect()
        })
    }

    pub fn is_known_studio(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Studios behind a well-known game series.
    ///
    /// Tries an exact franchise-key match first, then falls back to substring
    /// containment in either direction. Among several containing keys the
    /// longest one wins; equal lengths keep the earliest declared entry.
    pub fn studios_for_game_series(&self, query: &str) -> Option<&[StudioInfo]> {
        let key = normalize_studio_key(query);
        if key.is_empty() {
            return None;
        }
        if let Some(idx) = self.franchise_index.get(&key) {
            return self.franchises.get(*idx).map(|f| f.studios.as_slice());
        }

        let mut best: Option<&FranchiseEntry> = None;
        for entry in &self.franchises {
            if (entry.key.contains(&key) || key.contains(&entry.key))
                && best.map_or(true, |b| entry.key.len() > b.key.len())
            {
                best = Some(entry);
            }
        }
        best.map(|f| f.studios.as_slice())
    }

    pub fn is_game_series(&self, query: &str) -> bool {
        self.studios_for_game_series(query).is_some()
    }

    /// All parent entries in declaration order. Cache warm-up walks these.
    pub fn parent_entries(&self) -> impl Iterator<Item = &ParentStudio> {
        self.parents.iter()
    }
}

impl Default for StudioRegistry {
    fn default() -> Self {
        Self::new()
    }
}
