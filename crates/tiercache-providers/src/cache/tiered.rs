//! Two-tier cache
//!
//! An in-process [`TtlStore`] (tier 1) in front of a remote engine (tier 2).
//!
//! - **Get** is cache-aside: tier 1 hits are trusted without consulting
//!   tier 2; a tier 2 hit repopulates tier 1 with the remaining ttl tier 2
//!   reports. Misses are not cached, nor is a value whose key tier 2 no
//!   longer holds by the time its ttl is read.
//! - **Set** is write-through: tier 1 first, then tier 2. A tier 2 failure is
//!   returned but tier 1 keeps the new value.
//! - **Expire** runs on both tiers and reports tier 2's outcome only.
//!
//! There is no cross-tier locking. A set racing with a get that is between
//! its tier 2 fetch and its tier 1 repopulate can have its tier 1 value
//! replaced by the older fetched one until that entry expires.

use crate::cache::ttl_store::TtlStore;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tiercache_domain::constants::TIERED_SCHEME;
use tiercache_domain::error::Result;
use tiercache_domain::ports::{CacheEngine, CacheValue, ExpireOutcome};
use tiercache_domain::value_objects::whole_secs_ceil;
use tracing::{debug, warn};

/// In-process tier in front of a remote tier
#[derive(Debug, Clone)]
pub struct TieredCache {
    local: Arc<TtlStore>,
    remote: Arc<dyn CacheEngine>,
}

impl TieredCache {
    /// Compose the two tiers
    pub fn new(local: Arc<TtlStore>, remote: Arc<dyn CacheEngine>) -> Self {
        Self { local, remote }
    }

    /// Tier 1
    pub fn local(&self) -> &Arc<TtlStore> {
        &self.local
    }

    /// Tier 2
    pub fn remote(&self) -> &Arc<dyn CacheEngine> {
        &self.remote
    }

    async fn populate_local(&self, key: &str, value: CacheValue) {
        let ttl = match self.remote.ttl_remaining(key).await {
            Ok(Some(ttl)) => ttl,
            Ok(None) => {
                debug!(key, "Skipping local populate, remote key is gone");
                return;
            }
            Err(e) => {
                warn!(key, "Skipping local populate, remote ttl unavailable: {}", e);
                return;
            }
        };

        debug!(key, ?ttl, "tiered: populated from remote");
        if let Err(e) = self.local.set(key, value, whole_secs_ceil(ttl)).await {
            warn!(key, "Local populate failed: {}", e);
        }
    }
}

#[async_trait]
impl CacheEngine for TieredCache {
    async fn get(&self, key: &str) -> Result<Option<CacheValue>> {
        if let Ok(Some(value)) = self.local.get(key).await {
            debug!(key, "tiered: local hit");
            return Ok(Some(value));
        }

        let Some(value) = self.remote.get(key).await? else {
            return Ok(None);
        };

        self.populate_local(key, value.clone()).await;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: CacheValue, ttl_secs: i64) -> Result<()> {
        self.local.set(key, value.clone(), ttl_secs).await?;

        self.remote.set(key, value, ttl_secs).await.inspect_err(|e| {
            warn!(key, "Remote write failed after local write: {}", e);
        })
    }

    async fn expire(&self, pattern: &str) -> ExpireOutcome {
        let local = self.local.expire(pattern).await;
        if let Some(e) = &local.error {
            debug!(pattern, "Local expire error discarded: {}", e);
        }

        self.remote.expire(pattern).await
    }

    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        self.remote.ttl_remaining(key).await
    }

    fn engine_name(&self) -> &str {
        TIERED_SCHEME
    }
}
