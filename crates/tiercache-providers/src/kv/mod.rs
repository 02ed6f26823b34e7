//! Key-value service clients
//!
//! Implementations of the [`KeyValueService`](tiercache_domain::ports::KeyValueService)
//! port consumed by [`RemoteStore`](crate::cache::RemoteStore).

#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-redis")]
pub use self::redis::RedisKeyValueService;
