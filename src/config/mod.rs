//! Configuration for the studio expansion cache and filter pipeline
//!
//! All sections and fields carry serde defaults, so a partial TOML file (or
//! no file at all, via [`Config::default`]) yields a working configuration.
//! Durations are written as human-readable strings (`"30d"`, `"5m"`).

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

pub mod duration_serde;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub maintenance: MaintenanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of expansions held in the in-memory LRU tier
    #[serde(default = "default_memory_capacity")]
    pub memory_capacity: usize,
    /// How long a cached expansion stays servable, in memory and on disk
    #[serde(default = "default_ttl", with = "duration_serde::duration")]
    pub ttl: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Floor for the per-task chunk size when partitioning a catalog
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceConfig {
    /// Cron expression (with seconds field) for the expiry sweep
    #[serde(default = "default_sweep_cron")]
    pub sweep_cron: String,
    /// Upper bound for the random delay added to each scheduled sweep
    #[serde(default = "default_max_jitter", with = "duration_serde::duration")]
    pub max_jitter: Duration,
}

fn default_database_url() -> String {
    "sqlite://./studio-cache.db".to_string()
}

fn default_memory_capacity() -> usize {
    50
}

fn default_ttl() -> Duration {
    // 30 days
    Duration::from_secs(30 * 24 * 60 * 60)
}

fn default_min_chunk_size() -> usize {
    25
}

fn default_sweep_cron() -> String {
    // Daily at 03:00 UTC
    "0 0 3 * * *".to_string()
}

fn default_max_jitter() -> Duration {
    Duration::from_secs(5 * 60)
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: Some(5),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            memory_capacity: default_memory_capacity(),
            ttl: default_ttl(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_chunk_size: default_min_chunk_size(),
        }
    }
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            sweep_cron: default_sweep_cron(),
            max_jitter: default_max_jitter(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> AppResult<()> {
        if self.cache.memory_capacity == 0 {
            return Err(AppError::Configuration {
                message: "cache.memory_capacity must be at least 1".to_string(),
            });
        }
        if self.cache.ttl.is_zero() {
            return Err(AppError::Configuration {
                message: "cache.ttl must be non-zero".to_string(),
            });
        }
        if self.filter.min_chunk_size == 0 {
            return Err(AppError::Configuration {
                message: "filter.min_chunk_size must be at least 1".to_string(),
            });
        }
        cron::Schedule::from_str(&self.maintenance.sweep_cron)?;
        Ok(())
    }
}
