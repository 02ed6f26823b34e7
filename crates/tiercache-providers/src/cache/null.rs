//! No-op cache backend
//!
//! Selected by an empty connection string so caching can be switched off
//! without touching call sites.

use async_trait::async_trait;
use tiercache_domain::constants::NULL_ENGINE_NAME;
use tiercache_domain::error::Result;
use tiercache_domain::ports::{CacheEngine, CacheValue, ExpireOutcome};

/// Cache that never stores anything
///
/// Every get is a miss, every set and expire succeeds without side effects.
///
/// # Example
///
/// ```rust
/// use tiercache_providers::cache::NullCache;
///
/// let cache = NullCache::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl NullCache {
    /// Create a new no-op cache
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheEngine for NullCache {
    async fn get(&self, _key: &str) -> Result<Option<CacheValue>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: CacheValue, _ttl_secs: i64) -> Result<()> {
        Ok(())
    }

    async fn expire(&self, _pattern: &str) -> ExpireOutcome {
        ExpireOutcome::empty()
    }

    fn engine_name(&self) -> &str {
        NULL_ENGINE_NAME
    }
}
