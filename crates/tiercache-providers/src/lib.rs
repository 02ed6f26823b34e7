//! # tiercache - Backend Implementations
//!
//! Every backend implements the [`CacheEngine`] port defined in
//! `tiercache-domain`.
//!
//! | Backend | Scheme | Description |
//! |---------|--------|-------------|
//! | [`NullCache`](cache::NullCache) | `null` / empty string | No-op, caching disabled |
//! | [`TtlStore`](cache::TtlStore) | `memory` | In-process map with sweep and snapshots |
//! | [`RemoteStore`](cache::RemoteStore) | `redis`, `rediss` | Adapter over an external key-value service |
//! | [`TieredCache`](cache::TieredCache) | `mem+redis`, `mem+rediss` | In-process tier in front of a remote tier |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! tiercache-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Without `cache-redis` only the in-process and no-op backends are built.

// Re-export tiercache-domain types commonly used with backends
pub use tiercache_domain::error::{Error, Result};
pub use tiercache_domain::ports::{CacheEngine, KeyValueService};

/// Cache backend implementations
pub mod cache;

/// Key-value service clients consumed by the remote store
pub mod kv;

/// Scheme to factory registry
pub mod registry;

pub use registry::{
    CacheBackendConfig, CacheBackendEntry, CACHE_BACKENDS, list_cache_backends,
    resolve_cache_backend,
};
