//! Domain ports
//!
//! Traits implemented by the provider crate and consumed by the
//! infrastructure layer.

pub mod cache;
pub mod clock;
pub mod kv_service;

pub use cache::{CacheEngine, CacheValue, ExpireOutcome, ExpiredKeys};
pub use clock::{Clock, ManualClock, SystemClock};
pub use kv_service::KeyValueService;
