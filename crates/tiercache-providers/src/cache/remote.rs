//! Remote store adapter
//!
//! Translates [`CacheEngine`] calls into calls on an external expiring
//! key-value service. Values cross the wire as bytes produced by a
//! [`ValueCodec`].
//!
//! A glob passed to `expire` deletes **every** key the service lists for it,
//! permanent or not. This differs from the in-process store, which spares
//! permanent entries.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tiercache_domain::error::Result;
use tiercache_domain::ports::{CacheEngine, CacheValue, ExpireOutcome, KeyValueService};
use tiercache_domain::value_objects::{JsonCodec, KeyPattern, ValueCodec, ttl_from_secs};
use tracing::debug;

/// Name reported by the remote store
pub const REMOTE_ENGINE_NAME: &str = "remote";

/// Cache engine backed by an external key-value service
#[derive(Clone)]
pub struct RemoteStore {
    service: Arc<dyn KeyValueService>,
    codec: Arc<dyn ValueCodec>,
}

impl RemoteStore {
    /// Create a remote store encoding values as JSON
    pub fn new(service: Arc<dyn KeyValueService>) -> Self {
        Self::with_codec(service, Arc::new(JsonCodec))
    }

    /// Create a remote store with an explicit codec
    pub fn with_codec(service: Arc<dyn KeyValueService>, codec: Arc<dyn ValueCodec>) -> Self {
        Self { service, codec }
    }

    /// The underlying service
    pub fn service(&self) -> Arc<dyn KeyValueService> {
        Arc::clone(&self.service)
    }
}

#[async_trait]
impl CacheEngine for RemoteStore {
    async fn get(&self, key: &str) -> Result<Option<CacheValue>> {
        match self.service.get(key).await? {
            Some(bytes) => self.codec.decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: CacheValue, ttl_secs: i64) -> Result<()> {
        let bytes = self.codec.encode(&value)?;
        self.service.set(key, bytes, ttl_from_secs(ttl_secs)).await
    }

    async fn expire(&self, pattern: &str) -> ExpireOutcome {
        match KeyPattern::parse(pattern) {
            KeyPattern::Exact(key) => {
                let keys = vec![key];
                match self.service.delete(&keys).await {
                    Ok(_) => ExpireOutcome::removed(keys),
                    Err(e) => ExpireOutcome::partial(keys, e),
                }
            }
            KeyPattern::Glob(glob) => {
                let keys = match self.service.list_keys(&glob).await {
                    Ok(keys) => keys,
                    Err(e) => return ExpireOutcome::partial(Vec::new(), e),
                };
                if keys.is_empty() {
                    return ExpireOutcome::empty();
                }

                debug!(pattern = %glob, matched = keys.len(), "Deleting matching remote keys");
                match self.service.delete(&keys).await {
                    Ok(_) => ExpireOutcome::removed(keys),
                    Err(e) => ExpireOutcome::partial(keys, e),
                }
            }
        }
    }

    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        self.service.ttl_remaining(key).await
    }

    fn engine_name(&self) -> &str {
        REMOTE_ENGINE_NAME
    }
}

impl fmt::Debug for RemoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteStore")
            .field("service", &self.service)
            .field("codec", &self.codec.codec_name())
            .finish()
    }
}
