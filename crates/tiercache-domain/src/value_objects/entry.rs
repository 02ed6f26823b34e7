//! Stored cache entry

use crate::ports::CacheValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Represents a stored value with its creation time and time to live
///
/// A zero ttl means the entry never expires by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    value: CacheValue,
    created_at: DateTime<Utc>,
    ttl: Duration,
}

impl Entry {
    /// Creates a new entry
    pub fn new(value: CacheValue, created_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            value,
            created_at,
            ttl,
        }
    }

    /// Returns the stored value
    pub fn value(&self) -> &CacheValue {
        &self.value
    }

    /// Consumes the entry, returning the stored value
    pub fn into_value(self) -> CacheValue {
        self.value
    }

    /// Returns the creation time
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the time to live
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether the entry never expires by time
    pub fn is_permanent(&self) -> bool {
        self.ttl.is_zero()
    }

    /// Checks if this entry is logically expired at `now`
    ///
    /// A clock reading earlier than the creation time never expires an entry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        if self.is_permanent() {
            return false;
        }
        match now.signed_duration_since(self.created_at).to_std() {
            Ok(elapsed) => elapsed >= self.ttl,
            Err(_) => false,
        }
    }

    /// Time left before the entry expires; zero when permanent or expired
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.is_permanent() {
            return Duration::ZERO;
        }
        let elapsed = now
            .signed_duration_since(self.created_at)
            .to_std()
            .unwrap_or(Duration::ZERO);
        self.ttl.saturating_sub(elapsed)
    }
}

/// Convert a caller supplied ttl in seconds; zero or negative means permanent
pub fn ttl_from_secs(ttl_secs: i64) -> Duration {
    u64::try_from(ttl_secs)
        .map(Duration::from_secs)
        .unwrap_or(Duration::ZERO)
}

/// Whole seconds covering `ttl`, rounding any fraction up
///
/// Keeps a sub-second remainder from collapsing to zero, which would read as
/// "permanent".
pub fn whole_secs_ceil(ttl: Duration) -> i64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    i64::try_from(secs).unwrap_or(i64::MAX)
}
