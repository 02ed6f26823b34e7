//! Cache Backend Implementations
//!
//! ## Available Backends
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`NullCache`] | Disabled | No-op stub |
//! | [`TtlStore`] | Local | In-process TTL map |
//! | [`RemoteStore`] | Distributed | Pass-through to a [`KeyValueService`](tiercache_domain::ports::KeyValueService) |
//! | [`TieredCache`] | Composite | [`TtlStore`] in front of a remote engine |
//!
//! ## Bulk expiry divergence
//!
//! A glob passed to `expire` removes only matches with a ttl on
//! [`TtlStore`], but every match on [`RemoteStore`]. [`TieredCache`] runs
//! both and reports the remote result.

pub mod null;
pub mod remote;
pub mod snapshot;
pub mod sweeper;
pub mod tiered;
pub mod ttl_store;

pub use null::NullCache;
pub use remote::RemoteStore;
pub use snapshot::Snapshot;
pub use sweeper::SweepHandle;
pub use tiered::TieredCache;
pub use ttl_store::{TtlStore, TtlStoreOptions};
