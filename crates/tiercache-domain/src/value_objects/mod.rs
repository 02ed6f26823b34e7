//! Value objects

pub mod codec;
pub mod entry;
pub mod pattern;

pub use codec::{JsonCodec, ValueCodec};
pub use entry::{Entry, ttl_from_secs, whole_secs_ceil};
pub use pattern::{GlobMatcher, KeyPattern};
