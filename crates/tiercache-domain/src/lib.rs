//! # tiercache domain
//!
//! Ports and value objects shared by every cache backend.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`CacheEngine`](ports::CacheEngine) | Uniform get / set / expire contract |
//! | [`KeyValueService`](ports::KeyValueService) | External expiring key-value service consumed by the remote backend |
//! | [`Clock`](ports::Clock) | Time source used for expiry decisions |
//! | [`Entry`](value_objects::Entry) | Stored value with creation time and ttl |
//! | [`KeyPattern`](value_objects::KeyPattern) | Exact key or glob pattern given to expire |
//! | [`ValueCodec`](value_objects::ValueCodec) | Value to bytes encoding |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, ExpireErrors, Result};
pub use ports::{CacheEngine, CacheValue, Clock, ExpireOutcome, ExpiredKeys, KeyValueService};
pub use value_objects::{Entry, JsonCodec, KeyPattern, ValueCodec};
