//! Cache Engine Port
//!
//! The uniform operation set every cache backend implements: the in-process
//! TTL store, the remote store adapter, the tiered composite and the no-op
//! backend.
//!
//! ## Expire semantics
//!
//! A pattern without [`WILDCARD`](crate::constants::WILDCARD) deletes exactly
//! that key and always reports it as removed. A pattern containing it is
//! matched against every stored key; which matches are actually deleted is
//! backend policy (the in-process store spares permanent entries, the remote
//! store deletes all of them).

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Generic value representation stored by every backend
pub type CacheValue = serde_json::Value;

/// Keys a single expire call removed (or reports as removed)
pub type ExpiredKeys = Vec<String>;

/// Result of an expire call
///
/// Carries the keys that were processed even when part of the call failed,
/// so callers can act on partial results.
#[derive(Debug, Default)]
pub struct ExpireOutcome {
    /// Keys removed by the call
    pub removed: ExpiredKeys,
    /// Combined failure, if anything went wrong
    pub error: Option<Error>,
}

impl ExpireOutcome {
    /// Successful outcome
    pub fn removed(removed: ExpiredKeys) -> Self {
        Self {
            removed,
            error: None,
        }
    }

    /// Outcome with a failure and whatever was removed before it
    pub fn partial(removed: ExpiredKeys, error: Error) -> Self {
        Self {
            removed,
            error: Some(error),
        }
    }

    /// Outcome that removed nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the call completed without any failure
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Drop partial results and keep only the error, if any
    pub fn into_result(self) -> Result<ExpiredKeys> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.removed),
        }
    }
}

/// Cache Engine Port
///
/// # Implementations
///
/// - **TtlStore**: in-process map with lazy expiry, sweeping and snapshots
/// - **RemoteStore**: adapter over an external expiring key-value service
/// - **TieredCache**: TtlStore in front of a remote engine
/// - **NullCache**: no-op backend used when caching is disabled
///
/// # Example
///
/// ```ignore
/// use serde_json::json;
///
/// cache.set("user:123", json!({"name": "Ada"}), 300).await?;
///
/// if let Some(user) = cache.get("user:123").await? {
///     println!("{user}");
/// }
///
/// let removed = cache.expire("user:*").await.into_result()?;
/// ```
#[async_trait]
pub trait CacheEngine: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache
    ///
    /// # Returns
    /// `Ok(None)` for missing or logically expired keys; absence is never an error
    async fn get(&self, key: &str) -> Result<Option<CacheValue>>;

    /// Store a value, replacing any existing entry
    ///
    /// # Arguments
    /// * `key` - The cache key
    /// * `value` - The value to store
    /// * `ttl_secs` - Time to live in seconds; zero or negative means permanent
    async fn set(&self, key: &str, value: CacheValue, ttl_secs: i64) -> Result<()>;

    /// Remove a key, or every key matching a glob pattern
    async fn expire(&self, pattern: &str) -> ExpireOutcome;

    /// Remaining time to live of a key
    ///
    /// # Returns
    /// `Some(Duration::ZERO)` for a permanent key, `None` when the key is
    /// missing. Backends that keep no expiry information return `None`.
    async fn ttl_remaining(&self, _key: &str) -> Result<Option<Duration>> {
        Ok(None)
    }

    /// Get the name/identifier of this backend (e.g. "memory", "redis", "null")
    fn engine_name(&self) -> &str;
}
