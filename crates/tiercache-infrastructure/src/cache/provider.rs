//! Shared cache wrapper
//!
//! Typed access on top of any [`CacheEngine`]: values go in and out as
//! `serde` types and keys can be scoped under a namespace.

use crate::constants::{CACHE_DEFAULT_TTL_SECS, CACHE_NAMESPACE_SEPARATOR};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::{CacheEngine, ExpireOutcome};

/// Shared cache handle
///
/// Cheap to clone; all clones use the same engine.
#[derive(Clone)]
pub struct SharedCache {
    engine: Arc<dyn CacheEngine>,
    namespace: Option<String>,
    default_ttl_secs: i64,
}

// Construction and Configuration Methods
impl SharedCache {
    /// Wrap an engine
    pub fn new(engine: Arc<dyn CacheEngine>) -> Self {
        Self {
            engine,
            namespace: None,
            default_ttl_secs: CACHE_DEFAULT_TTL_SECS,
        }
    }

    /// Wrap an engine with a default namespace
    pub fn with_namespace<S: Into<String>>(engine: Arc<dyn CacheEngine>, namespace: S) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..Self::new(engine)
        }
    }

    /// Ttl used by [`set`](Self::set)
    pub fn with_default_ttl(mut self, ttl_secs: i64) -> Self {
        self.default_ttl_secs = ttl_secs;
        self
    }

    /// Set the default namespace
    pub fn set_namespace<S: Into<String>>(&mut self, namespace: S) {
        self.namespace = Some(namespace.into());
    }

    /// Clear the default namespace
    pub fn clear_namespace(&mut self) {
        self.namespace = None;
    }

    /// The wrapped engine
    pub fn engine(&self) -> Arc<dyn CacheEngine> {
        Arc::clone(&self.engine)
    }

    fn namespaced_key(&self, key: &str) -> String {
        scoped_key(self.namespace.as_deref(), key)
    }
}

// Cache Operations Methods
impl SharedCache {
    /// Get a typed value
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        typed_get(self.engine.as_ref(), &self.namespaced_key(key)).await
    }

    /// Store a typed value with the default ttl
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        self.set_with_ttl(key, value, self.default_ttl_secs).await
    }

    /// Store a typed value; a ttl of zero or less never expires
    pub async fn set_with_ttl<T>(&self, key: &str, value: &T, ttl_secs: i64) -> Result<()>
    where
        T: Serialize + Sync,
    {
        typed_set(self.engine.as_ref(), &self.namespaced_key(key), value, ttl_secs).await
    }

    /// Expire a key or a `*` pattern, both resolved inside the namespace
    pub async fn expire(&self, pattern: &str) -> ExpireOutcome {
        self.engine.expire(&self.namespaced_key(pattern)).await
    }

    /// Remaining ttl as the engine reports it; `None` for a missing key
    pub async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        self.engine.ttl_remaining(&self.namespaced_key(key)).await
    }

    /// Create a namespaced view of this cache
    pub fn namespaced<S: Into<String>>(&self, namespace: S) -> NamespacedCache {
        NamespacedCache {
            engine: Arc::clone(&self.engine),
            namespace: namespace.into(),
            default_ttl_secs: self.default_ttl_secs,
        }
    }
}

impl fmt::Debug for SharedCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCache")
            .field("engine", &self.engine.engine_name())
            .field("namespace", &self.namespace)
            .finish()
    }
}

impl From<Arc<dyn CacheEngine>> for SharedCache {
    fn from(engine: Arc<dyn CacheEngine>) -> Self {
        Self::new(engine)
    }
}

/// Cache view scoped to one namespace
#[derive(Clone)]
pub struct NamespacedCache {
    engine: Arc<dyn CacheEngine>,
    namespace: String,
    default_ttl_secs: i64,
}

impl NamespacedCache {
    /// Get a typed value within this namespace
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        typed_get(self.engine.as_ref(), &self.key(key)).await
    }

    /// Store a typed value within this namespace
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        typed_set(
            self.engine.as_ref(),
            &self.key(key),
            value,
            self.default_ttl_secs,
        )
        .await
    }

    /// Expire every key of this namespace
    pub async fn clear(&self) -> ExpireOutcome {
        self.engine.expire(&self.key("*")).await
    }

    /// Namespace of this view
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn key(&self, key: &str) -> String {
        scoped_key(Some(&self.namespace), key)
    }
}

impl fmt::Debug for NamespacedCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespacedCache")
            .field("engine", &self.engine.engine_name())
            .field("namespace", &self.namespace)
            .finish()
    }
}

fn scoped_key(namespace: Option<&str>, key: &str) -> String {
    match namespace {
        Some(ns) => format!("{ns}{CACHE_NAMESPACE_SEPARATOR}{key}"),
        None => key.to_string(),
    }
}

async fn typed_get<T>(engine: &dyn CacheEngine, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    match engine.get(key).await? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| Error::serialization("Failed to deserialize cached value", e)),
        None => Ok(None),
    }
}

async fn typed_set<T>(engine: &dyn CacheEngine, key: &str, value: &T, ttl_secs: i64) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)
        .map_err(|e| Error::serialization("Failed to serialize value for cache", e))?;
    engine.set(key, value, ttl_secs).await
}
