//! Periodic expiry sweep for the durable tier
//!
//! Rows older than the cache TTL are deleted on a cron schedule with a
//! bounded random delay, so several processes sharing one database do not
//! all sweep at the same instant. Only the store tier is swept; memory
//! entries expire lazily at read time and the lookup path never deletes.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use cron::Schedule;
use tracing::{debug, error, info};

use crate::config::{CacheConfig, MaintenanceConfig};
use crate::database::ExpansionStore;
use crate::errors::{AppError, AppResult, StoreResult};

/// Cron-driven cleanup task over an [`ExpansionStore`]
pub struct ExpirySweeper<S: ExpansionStore> {
    store: S,
    schedule: Schedule,
    ttl: chrono::Duration,
    max_jitter: Duration,
}

impl<S: ExpansionStore> ExpirySweeper<S> {
    pub fn new(
        store: S,
        cache_config: &CacheConfig,
        maintenance_config: &MaintenanceConfig,
    ) -> AppResult<Self> {
        let schedule = Schedule::from_str(&maintenance_config.sweep_cron)?;
        let ttl = chrono::Duration::from_std(cache_config.ttl).map_err(|_| {
            AppError::Configuration {
                message: format!("cache.ttl {:?} is out of range", cache_config.ttl),
            }
        })?;

        Ok(Self {
            store,
            schedule,
            ttl,
            max_jitter: maintenance_config.max_jitter,
        })
    }

    /// Delete rows older than the retention window; returns the count.
    pub async fn sweep_once(&self) -> StoreResult<u64> {
        let cutoff = Utc::now() - self.ttl;
        let deleted = self.store.delete_expired(cutoff).await?;

        if deleted > 0 {
            info!(
                deleted,
                cutoff = %cutoff.format("%Y-%m-%d %H:%M:%S UTC"),
                "expired expansions removed"
            );
        } else {
            debug!("expiry sweep found nothing to remove");
        }

        Ok(deleted)
    }

    /// Long-lived loop: sleep until the next scheduled fire time plus
    /// jitter, sweep, repeat. Sweep failures are logged and do not end the
    /// loop.
    pub async fn run(self) -> Result<()> {
        info!("expiry sweeper started");

        loop {
            let Some(next) = self.schedule.upcoming(Utc).next() else {
                info!("sweep schedule has no upcoming fire times, sweeper exiting");
                return Ok(());
            };

            let wait = (next - Utc::now()).to_std().unwrap_or(Duration::ZERO);
            let jitter = Duration::from_millis(fastrand::u64(0..=self.max_jitter.as_millis() as u64));
            debug!(
                next = %next.format("%Y-%m-%d %H:%M:%S UTC"),
                jitter_ms = jitter.as_millis() as u64,
                "next expiry sweep scheduled"
            );
            tokio::time::sleep(wait + jitter).await;

            if let Err(e) = self.sweep_once().await {
                error!(error = %e, "expiry sweep failed");
            }
        }
    }
}
