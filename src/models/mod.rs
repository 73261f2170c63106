use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single subsidiary studio as it appears in the game catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudioInfo {
    pub display_name: String,
    /// Catalog identifier, e.g. "bethesda-game-studios"
    pub slug: String,
}

impl StudioInfo {
    pub fn new(display_name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            slug: slug.into(),
        }
    }
}

/// The cached value for one parent studio
///
/// `slugs` comma-splits into catalog identifiers corresponding 1:1 with
/// `display_names`; the write path always produces both together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedExpansion {
    pub display_names: HashSet<String>,
    pub slugs: String, // comma-joined catalog slugs
    pub cached_at: DateTime<Utc>,
}

impl CachedExpansion {
    pub fn new(display_names: HashSet<String>, slugs: String) -> Self {
        Self {
            display_names,
            slugs,
            cached_at: Utc::now(),
        }
    }

    /// Whether this entry has outlived the given retention window
    pub fn is_expired(&self, ttl: Duration) -> bool {
        Utc::now() - self.cached_at > ttl
    }
}

/// Durable representation of one expansion in the `studio_expansions` table
///
/// `display_names` is stored as a JSON array in a TEXT column; `cached_at`
/// is stored as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionRow {
    pub studio_key: String,
    pub display_names: Vec<String>,
    pub slugs: String,
    pub cached_at: DateTime<Utc>,
}

impl ExpansionRow {
    pub fn from_expansion(studio_key: impl Into<String>, expansion: &CachedExpansion) -> Self {
        let mut display_names: Vec<String> = expansion.display_names.iter().cloned().collect();
        display_names.sort();
        Self {
            studio_key: studio_key.into(),
            display_names,
            slugs: expansion.slugs.clone(),
            cached_at: expansion.cached_at,
        }
    }

    pub fn into_expansion(self) -> CachedExpansion {
        CachedExpansion {
            display_names: self.display_names.into_iter().collect(),
            slugs: self.slugs,
            cached_at: self.cached_at,
        }
    }
}

/// A catalog game as consumed by the filter pipeline
///
/// Extra catalog fields are ignored on deserialize; missing credit lists
/// default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
}

/// Which credit list(s) a studio filter matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudioFilterType {
    Developer,
    Publisher,
    Both,
}
