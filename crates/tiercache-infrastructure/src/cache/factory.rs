//! Cache factory
//!
//! Each call builds a fresh, independently owned engine; there is no
//! process-wide cache instance.

use crate::cache::url::parse_connection_string;
use std::sync::Arc;
use tiercache_domain::error::Result;
use tiercache_domain::ports::{CacheEngine, Clock};
use tiercache_providers::cache::{NullCache, TtlStore, TtlStoreOptions};
use tiercache_providers::resolve_cache_backend;

/// Builds cache engines from connection strings
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheFactory;

impl CacheFactory {
    /// Build the engine a connection string names
    ///
    /// An empty or blank string yields the no-op cache.
    ///
    /// # Errors
    /// - [`tiercache_domain::Error::Config`] for an unknown scheme or bad option
    /// - [`tiercache_domain::Error::BackendUnavailable`] when Redis cannot be
    ///   reached
    pub async fn connect(connection_string: &str) -> Result<Arc<dyn CacheEngine>> {
        let config = parse_connection_string(connection_string)?;
        resolve_cache_backend(config).await
    }

    /// Like [`connect`](Self::connect) with an explicit time source for the
    /// in-process tier
    pub async fn connect_with_clock(
        connection_string: &str,
        clock: Arc<dyn Clock>,
    ) -> Result<Arc<dyn CacheEngine>> {
        let config = parse_connection_string(connection_string)?.with_clock(clock);
        resolve_cache_backend(config).await
    }

    /// No-op cache
    pub fn create_null() -> Arc<dyn CacheEngine> {
        Arc::new(NullCache::new())
    }

    /// In-process store, starting its sweep when configured
    ///
    /// Must be called from within a tokio runtime when a sweep is configured.
    pub fn create_memory(options: TtlStoreOptions) -> Arc<dyn CacheEngine> {
        Arc::new(TtlStore::start(options))
    }
}
