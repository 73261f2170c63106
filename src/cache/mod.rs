//! Read-through, write-back studio expansion cache
//!
//! Resolution walks three tiers in order: a bounded in-memory LRU, the
//! compile-time studio registry, and the durable SQLite store. Writes fan
//! out to the memory and store tiers concurrently and join before return;
//! a failed store leg is logged and swallowed, so the tiers may diverge
//! until the next successful write.
//!
//! The service is handed its store and registry explicitly and owns no
//! global state, so tests construct it against mock stores.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Duration;
use lru::LruCache;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CacheConfig;
use crate::database::ExpansionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{CachedExpansion, ExpansionRow};
use crate::registry::StudioRegistry;
use crate::utils::normalize::normalize_studio_key;

#[derive(Debug, Default)]
struct Counters {
    memory_hits: AtomicU64,
    registry_hits: AtomicU64,
    store_hits: AtomicU64,
    misses: AtomicU64,
}

/// Point-in-time snapshot of the tier counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub memory_hits: u64,
    pub registry_hits: u64,
    pub store_hits: u64,
    pub misses: u64,
}

/// Multi-tier cache resolving parent studios to their subsidiary sets
pub struct StudioCacheService<S: ExpansionStore> {
    /// In-memory tier. The mutex is synchronous and held only for map
    /// operations, never across an await point.
    memory: Mutex<LruCache<String, CachedExpansion>>,
    registry: Arc<StudioRegistry>,
    store: S,
    /// Uniform retention window for the memory and store tiers
    ttl: Duration,
    counters: Counters,
}

impl<S: ExpansionStore> StudioCacheService<S> {
    pub fn new(store: S, registry: Arc<StudioRegistry>, config: &CacheConfig) -> AppResult<Self> {
        let capacity =
            NonZeroUsize::new(config.memory_capacity).ok_or_else(|| AppError::Configuration {
                message: "cache.memory_capacity must be at least 1".to_string(),
            })?;
        let ttl = Duration::from_std(config.ttl).map_err(|_| AppError::Configuration {
            message: format!("cache.ttl {:?} is out of range", config.ttl),
        })?;

        Ok(Self {
            memory: Mutex::new(LruCache::new(capacity)),
            registry,
            store,
            ttl,
            counters: Counters::default(),
        })
    }

    /// The map stays usable after a panicking thread poisoned the lock.
    fn memory_lock(&self) -> MutexGuard<'_, LruCache<String, CachedExpansion>> {
        self.memory
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resolve a parent studio through the memory, registry, and store tiers.
    ///
    /// Returns `None` on a total miss. Computing a fresh expansion is the
    /// caller's job; the result comes back through [`store`](Self::store).
    pub async fn resolve(&self, parent_studio: &str) -> Option<CachedExpansion> {
        let key = normalize_studio_key(parent_studio);

        // Memory tier. Peek first: a stale entry must not be promoted, and
        // stays in place until the next successful write overwrites it.
        {
            let mut memory = self.memory_lock();
            let fresh = memory
                .peek(&key)
                .map(|entry| !entry.is_expired(self.ttl))
                .unwrap_or(false);
            if fresh {
                if let Some(entry) = memory.get(&key).cloned() {
                    self.counters.memory_hits.fetch_add(1, Ordering::Relaxed);
                    debug!(studio = %key, "memory tier hit");
                    return Some(entry);
                }
            }
        }

        // Static registry tier
        if let Some(subsidiaries) = self.registry.subsidiaries(&key) {
            let names: HashSet<String> = subsidiaries
                .iter()
                .map(|s| s.display_name.clone())
                .collect();
            let slugs = subsidiaries
                .iter()
                .map(|s| s.slug.as_str())
                .collect::<Vec<_>>()
                .join(",");
            let expansion = CachedExpansion::new(names, slugs);
            self.memory_lock().put(key.clone(), expansion.clone());
            self.counters.registry_hits.fetch_add(1, Ordering::Relaxed);
            debug!(studio = %key, "registry tier hit");
            return Some(expansion);
        }

        // Durable tier. Read errors degrade to a miss.
        match self.store.get_expansion(&key).await {
            Ok(Some(row)) => {
                let expansion = row.into_expansion();
                if !expansion.is_expired(self.ttl) {
                    self.memory_lock().put(key.clone(), expansion.clone());
                    self.counters.store_hits.fetch_add(1, Ordering::Relaxed);
                    debug!(studio = %key, "store tier hit");
                    return Some(expansion);
                }
                debug!(studio = %key, "store row expired");
            }
            Ok(None) => {}
            Err(e) => {
                warn!(studio = %key, error = %e, "store read failed, treating as miss");
            }
        }

        self.counters.misses.fetch_add(1, Ordering::Relaxed);
        debug!(studio = %key, "cache miss on all tiers");
        None
    }

    /// Write an expansion through both tiers.
    ///
    /// The memory insert and the store upsert run concurrently and are both
    /// awaited before return. A failed store leg is logged and swallowed;
    /// the memory tier keeps serving the value in the meantime.
    pub async fn store(&self, parent_studio: &str, display_names: HashSet<String>, slugs: String) {
        let key = normalize_studio_key(parent_studio);
        let expansion = CachedExpansion::new(display_names, slugs);
        let row = ExpansionRow::from_expansion(key.clone(), &expansion);

        let memory_leg = async {
            self.memory_lock().put(key.clone(), expansion.clone());
        };
        let store_leg = async {
            if let Err(e) = self.store.upsert_expansion(&row).await {
                warn!(studio = %key, error = %e, "store write failed, value held in memory only");
            }
        };

        tokio::join!(memory_leg, store_leg);
    }

    /// Display names only, if any tier resolves.
    pub async fn expanded_studios(&self, parent_studio: &str) -> Option<HashSet<String>> {
        self.resolve(parent_studio).await.map(|e| e.display_names)
    }

    /// Comma-joined catalog slugs; an empty slug string reads as `None`.
    pub async fn studio_slugs(&self, parent_studio: &str) -> Option<String> {
        self.resolve(parent_studio)
            .await
            .map(|e| e.slugs)
            .filter(|slugs| !slugs.is_empty())
    }

    /// Names and slugs together, only when the slug side is non-empty.
    pub async fn expansion_data(&self, parent_studio: &str) -> Option<(HashSet<String>, String)> {
        self.resolve(parent_studio).await.and_then(|e| {
            if e.slugs.is_empty() {
                None
            } else {
                Some((e.display_names, e.slugs))
            }
        })
    }

    /// Bulk-load every registry entry into the memory tier.
    ///
    /// Synchronous and store-free, for warming a cold process so common
    /// queries hit memory immediately. Returns the number of entries loaded.
    pub fn prefetch_popular_studios(&self) -> usize {
        let mut loaded = 0;
        let mut memory = self.memory_lock();
        for parent in self.registry.parent_entries() {
            let names: HashSet<String> = parent
                .subsidiaries
                .iter()
                .map(|s| s.display_name.clone())
                .collect();
            let slugs = parent
                .subsidiaries
                .iter()
                .map(|s| s.slug.as_str())
                .collect::<Vec<_>>()
                .join(",");
            memory.put(parent.key.clone(), CachedExpansion::new(names, slugs));
            loaded += 1;
        }
        debug!(loaded, "prefetched registry entries into memory tier");
        loaded
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            memory_hits: self.counters.memory_hits.load(Ordering::Relaxed),
            registry_hits: self.counters.registry_hits.load(Ordering::Relaxed),
            store_hits: self.counters.store_hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
        }
    }

    /// Number of entries currently in the memory tier
    pub fn memory_len(&self) -> usize {
        self.memory_lock().len()
    }
}
