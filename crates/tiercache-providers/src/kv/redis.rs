//! Redis key-value service
//!
//! ## Features
//!
//! - Server-side glob enumeration through `KEYS`
//! - Millisecond ttl queries through `PTTL`
//! - Reconnecting multiplexed connection via `ConnectionManager`
//!
//! ## Example
//!
//! ```ignore
//! use tiercache_providers::kv::RedisKeyValueService;
//!
//! let service = RedisKeyValueService::connect("redis://:secret@127.0.0.1/1").await?;
//! ```

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use std::fmt;
use std::time::Duration;
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::KeyValueService;
use tiercache_domain::value_objects::whole_secs_ceil;

/// Redis client behind the key-value service port
#[derive(Clone)]
pub struct RedisKeyValueService {
    manager: ConnectionManager,
    address: String,
}

impl RedisKeyValueService {
    /// Connect and verify the server answers `PING`
    ///
    /// # Errors
    /// - [`Error::Config`] when the connection string is not a valid Redis URL
    /// - [`Error::BackendUnavailable`] when the server cannot be reached
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::config_with_source(format!("Invalid Redis connection string: {e}"), e)
        })?;
        let address = redacted_address(connection_string);

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            Error::backend_unavailable(format!("Failed to connect to Redis at {address}"), e)
        })?;

        let service = Self { manager, address };
        service.ping().await.map_err(|e| match e {
            Error::Backend { message, source } => Error::BackendUnavailable { message, source },
            other => other,
        })?;

        tracing::info!(address = %service.address, "Connected to Redis");
        Ok(service)
    }

    /// Get the Redis server address description
    pub fn server_address(&self) -> &str {
        &self.address
    }

    fn connection(&self) -> ConnectionManager {
        self.manager.clone()
    }
}

/// Host part of a connection string, credentials removed
fn redacted_address(connection_string: &str) -> String {
    let rest = connection_string
        .split_once("://")
        .map_or(connection_string, |(_, rest)| rest);
    rest.rsplit_once('@')
        .map_or(rest, |(_, host)| host)
        .to_string()
}

fn command_error(command: &str, e: redis::RedisError) -> Error {
    Error::backend_with_source(format!("Redis {command} failed: {e}"), e)
}

#[async_trait]
impl KeyValueService for RedisKeyValueService {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection();
        let value: redis::RedisResult<Option<Vec<u8>>> = conn.get(key).await;
        value.map_err(|e| command_error("GET", e))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        let mut conn = self.connection();

        let result: redis::RedisResult<()> = if ttl.is_zero() {
            conn.set(key, value).await
        } else {
            let secs = u64::try_from(whole_secs_ceil(ttl)).unwrap_or(u64::MAX);
            conn.set_ex(key, value, secs).await
        };

        result.map_err(|e| command_error("SET", e))
    }

    async fn delete(&self, keys: &[String]) -> Result<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection();
        let deleted: redis::RedisResult<usize> = conn.del(keys.to_vec()).await;
        deleted.map_err(|e| command_error("DEL", e))
    }

    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.connection();
        let keys: redis::RedisResult<Vec<String>> = conn.keys(pattern).await;
        keys.map_err(|e| command_error("KEYS", e))
    }

    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        let mut conn = self.connection();
        let millis: redis::RedisResult<i64> = conn.pttl(key).await;

        match millis.map_err(|e| command_error("PTTL", e))? {
            // -2: missing, -1: no expiry
            -2 => Ok(None),
            millis => Ok(Some(
                u64::try_from(millis)
                    .map(Duration::from_millis)
                    .unwrap_or(Duration::ZERO),
            )),
        }
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection();
        let pong: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
        pong.map(|_| ()).map_err(|e| command_error("PING", e))
    }
}

impl fmt::Debug for RedisKeyValueService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisKeyValueService")
            .field("server", &self.address)
            .finish()
    }
}
