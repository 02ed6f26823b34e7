//! # tiercache
//!
//! A pluggable key/value cache with per-entry time-to-live. One contract,
//! [`CacheEngine`], is implemented by:
//!
//! - an in-process TTL store with optional background sweep and on-disk
//!   snapshot
//! - a Redis-backed remote store
//! - a tiered composite putting the in-process store in front of Redis
//! - a no-op cache that never stores anything
//!
//! A connection string picks the backend.
//!
//! ## Example
//!
//! ```ignore
//! use serde_json::json;
//! use tiercache::CacheEngine;
//!
//! let cache = tiercache::connect("mem+redis://localhost:6379/0?ttl=60").await?;
//! cache.set("user:1", json!({"name": "ada"}), 300).await?;
//! let hit = cache.get("user:1").await?;
//! cache.expire("user:*").await.into_result()?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - ports, value objects, errors
//! - `providers` - backend implementations and the backend registry
//! - `infrastructure` - connection strings, configuration, logging

pub mod cli;

/// Domain layer - ports, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tiercache_domain::*;
}

/// Cache backends
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use tiercache_providers::*;
}

/// Infrastructure layer - factory, config, logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tiercache_infrastructure::*;
}

pub use domain::*;
pub use infrastructure::{CacheFactory, SharedCache};

use std::sync::Arc;

/// Build the cache a connection string names
///
/// Shorthand for [`CacheFactory::connect`].
pub async fn connect(connection_string: &str) -> Result<Arc<dyn CacheEngine>> {
    CacheFactory::connect(connection_string).await
}
