//! Key-Value Service Port
//!
//! The external expiring key-value service consumed by the remote store.
//! Glob matching for [`list_keys`](KeyValueService::list_keys) happens on the
//! service side.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// External expiring key-value service
#[async_trait]
pub trait KeyValueService: Send + Sync + std::fmt::Debug {
    /// Fetch raw bytes
    ///
    /// # Returns
    /// `Ok(None)` when the service reports the key missing; transport and
    /// protocol failures are errors
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store raw bytes; `Duration::ZERO` means no expiry
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()>;

    /// Delete keys, returning how many existed
    async fn delete(&self, keys: &[String]) -> Result<usize>;

    /// Enumerate keys matching a glob pattern
    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Remaining time to live
    ///
    /// # Returns
    /// `Some(Duration::ZERO)` for a key without expiry, `None` when the key
    /// is missing
    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>>;

    /// Liveness check performed at construction
    async fn ping(&self) -> Result<()>;
}
