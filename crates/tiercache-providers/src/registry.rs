//! Cache Backend Registry
//!
//! Maps a connection-string scheme to a factory producing the uniform
//! [`CacheEngine`] contract. Selecting a backend is a table lookup; adding a
//! backend means adding an entry to [`CACHE_BACKENDS`].

use crate::cache::{NullCache, TtlStore, TtlStoreOptions};
use futures::future::BoxFuture;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tiercache_domain::constants::{
    MEMORY_SCHEME, NULL_ENGINE_NAME, REDIS_SCHEME, REDIS_TLS_SCHEME, TIERED_SCHEME,
    TIERED_TLS_SCHEME,
};
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::{CacheEngine, Clock, SystemClock};

/// Configuration for backend creation
///
/// Contains every option a backend might need. Backends use what they need
/// and ignore the rest.
#[derive(Debug, Clone)]
pub struct CacheBackendConfig {
    /// Backend name (the connection-string scheme, e.g. "memory", "mem+redis")
    pub backend: String,
    /// Remote connection string (for Redis-backed backends)
    pub uri: Option<String>,
    /// Sweep interval of the in-process tier; zero disables the sweep
    pub sweep_interval: Duration,
    /// Snapshot file of the in-process tier
    pub persist_path: Option<PathBuf>,
    /// Time source of the in-process tier
    pub clock: Arc<dyn Clock>,
}

impl Default for CacheBackendConfig {
    fn default() -> Self {
        Self {
            backend: String::new(),
            uri: None,
            sweep_interval: Duration::ZERO,
            persist_path: None,
            clock: Arc::new(SystemClock),
        }
    }
}

impl CacheBackendConfig {
    /// Create a new config with the given backend name
    pub fn new(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            ..Default::default()
        }
    }

    /// Set the remote connection string
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the sweep interval
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Set the snapshot file
    pub fn with_persist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.persist_path = Some(path.into());
        self
    }

    /// Set the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Options for the in-process tier
    pub fn ttl_store_options(&self) -> TtlStoreOptions {
        TtlStoreOptions {
            sweep_interval: self.sweep_interval,
            persist_path: self.persist_path.clone(),
            clock: Arc::clone(&self.clock),
        }
    }

    #[cfg_attr(not(feature = "cache-redis"), allow(dead_code))]
    fn remote_uri(&self) -> Result<&str> {
        self.uri
            .as_deref()
            .ok_or_else(|| Error::config(format!("{} cache requires a remote URI", self.backend)))
    }
}

/// Future produced by a backend factory
pub type BackendFuture = BoxFuture<'static, Result<Arc<dyn CacheEngine>>>;

/// Registry entry for cache backends
pub struct CacheBackendEntry {
    /// Unique backend name, matched against the connection-string scheme
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a backend instance
    pub factory: fn(CacheBackendConfig) -> BackendFuture,
}

impl std::fmt::Debug for CacheBackendEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheBackendEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// All known backends
pub static CACHE_BACKENDS: &[CacheBackendEntry] = &[
    CacheBackendEntry {
        name: NULL_ENGINE_NAME,
        description: "No-op cache, every get misses",
        factory: null_factory,
    },
    CacheBackendEntry {
        name: MEMORY_SCHEME,
        description: "In-process TTL store with optional sweep and snapshot",
        factory: memory_factory,
    },
    #[cfg(feature = "cache-redis")]
    CacheBackendEntry {
        name: REDIS_SCHEME,
        description: "Redis remote store",
        factory: redis_factory,
    },
    #[cfg(feature = "cache-redis")]
    CacheBackendEntry {
        name: REDIS_TLS_SCHEME,
        description: "Redis remote store over TLS",
        factory: redis_factory,
    },
    #[cfg(feature = "cache-redis")]
    CacheBackendEntry {
        name: TIERED_SCHEME,
        description: "In-process TTL store in front of Redis",
        factory: tiered_factory,
    },
    #[cfg(feature = "cache-redis")]
    CacheBackendEntry {
        name: TIERED_TLS_SCHEME,
        description: "In-process TTL store in front of Redis over TLS",
        factory: tiered_factory,
    },
];

fn null_factory(_config: CacheBackendConfig) -> BackendFuture {
    Box::pin(async move { Ok(Arc::new(NullCache::new()) as Arc<dyn CacheEngine>) })
}

fn memory_factory(config: CacheBackendConfig) -> BackendFuture {
    Box::pin(async move {
        let store = TtlStore::start(config.ttl_store_options());
        Ok(Arc::new(store) as Arc<dyn CacheEngine>)
    })
}

#[cfg(feature = "cache-redis")]
async fn connect_remote(config: &CacheBackendConfig) -> Result<crate::cache::RemoteStore> {
    let service = crate::kv::RedisKeyValueService::connect(config.remote_uri()?).await?;
    Ok(crate::cache::RemoteStore::new(Arc::new(service)))
}

#[cfg(feature = "cache-redis")]
fn redis_factory(config: CacheBackendConfig) -> BackendFuture {
    Box::pin(async move {
        let remote = connect_remote(&config).await?;
        Ok(Arc::new(remote) as Arc<dyn CacheEngine>)
    })
}

#[cfg(feature = "cache-redis")]
fn tiered_factory(config: CacheBackendConfig) -> BackendFuture {
    Box::pin(async move {
        let remote = connect_remote(&config).await?;
        let local = TtlStore::start(config.ttl_store_options());
        let tiered = crate::cache::TieredCache::new(Arc::new(local), Arc::new(remote));
        Ok(Arc::new(tiered) as Arc<dyn CacheEngine>)
    })
}

/// Resolve a backend by name and create it
///
/// # Errors
/// - [`Error::Config`] when no backend is registered under the name
/// - whatever the backend factory reports (e.g. [`Error::BackendUnavailable`])
pub async fn resolve_cache_backend(config: CacheBackendConfig) -> Result<Arc<dyn CacheEngine>> {
    let Some(entry) = CACHE_BACKENDS.iter().find(|e| e.name == config.backend) else {
        let available: Vec<&str> = CACHE_BACKENDS.iter().map(|e| e.name).collect();
        return Err(Error::config(format!(
            "invalid cache backend '{}'. Available backends: {:?}",
            config.backend, available
        )));
    };

    tracing::info!(backend = entry.name, "Setting up cache backend");
    (entry.factory)(config).await
}

/// List all registered backends as (name, description) pairs
pub fn list_cache_backends() -> Vec<(&'static str, &'static str)> {
    CACHE_BACKENDS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
