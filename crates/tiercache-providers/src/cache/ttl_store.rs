//! In-process TTL store
//!
//! Key to entry map guarded by a single reader/writer lock. Every public
//! operation is one synchronous critical section; nothing awaits while the
//! lock is held, including the snapshot flush, which therefore blocks other
//! callers for its duration.
//!
//! ## Expiry
//!
//! - Reads treat logically expired entries as absent but never remove them
//! - The background sweep (when configured) removes every expired entry
//! - `expire("prefix*")` removes matching entries that have a ttl and leaves
//!   permanent ones in place; `expire("key")` always removes the key
//!
//! ## Example
//!
//! ```ignore
//! use tiercache_providers::cache::{TtlStore, TtlStoreOptions};
//! use std::time::Duration;
//!
//! let store = TtlStore::start(
//!     TtlStoreOptions::new()
//!         .with_sweep_interval(Duration::from_secs(60))
//!         .with_persist_path("cache.dat"),
//! );
//! ```

use crate::cache::snapshot::Snapshot;
use crate::cache::sweeper::SweepHandle;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tiercache_domain::constants::MEMORY_SCHEME;
use tiercache_domain::error::{ExpireErrors, Result};
use tiercache_domain::ports::{CacheEngine, CacheValue, Clock, ExpireOutcome, SystemClock};
use tiercache_domain::value_objects::{Entry, GlobMatcher, KeyPattern, ttl_from_secs};
use tracing::{debug, info, warn};

/// Construction options for [`TtlStore`]
#[derive(Debug, Clone)]
pub struct TtlStoreOptions {
    /// Period of the background sweep; zero disables it
    pub sweep_interval: Duration,
    /// Snapshot file; `None` keeps the store memory-only
    pub persist_path: Option<PathBuf>,
    /// Time source for expiry decisions
    pub clock: Arc<dyn Clock>,
}

impl Default for TtlStoreOptions {
    fn default() -> Self {
        Self {
            sweep_interval: Duration::ZERO,
            persist_path: None,
            clock: Arc::new(SystemClock),
        }
    }
}

impl TtlStoreOptions {
    /// Options with no sweep, no persistence and the system clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sweep interval
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    /// Set the snapshot file
    pub fn with_persist_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.persist_path = Some(path.into());
        self
    }

    /// Set the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// State shared between the store and its sweep task
#[derive(Debug)]
struct StoreState {
    entries: RwLock<HashMap<String, Entry>>,
    snapshot: Option<Snapshot>,
    clock: Arc<dyn Clock>,
}

impl StoreState {
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write the whole keyspace out; failures are logged and swallowed
    fn flush(&self, entries: &HashMap<String, Entry>) {
        if let Some(snapshot) = &self.snapshot {
            if let Err(e) = snapshot.save(entries) {
                warn!("Cache snapshot not persisted: {}", e);
            }
        }
    }

    fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.write();

        debug!("Starting sweep");
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();
        debug!(removed, remaining = entries.len(), "Done sweep");

        self.flush(&entries);
        removed
    }
}

/// In-process TTL cache
#[derive(Debug)]
pub struct TtlStore {
    state: Arc<StoreState>,
    sweeper: Mutex<Option<SweepHandle>>,
}

impl TtlStore {
    /// Create a store without starting the sweep
    ///
    /// Seeds the keyspace from the snapshot file when one is configured and
    /// readable; otherwise starts empty.
    pub fn new(options: TtlStoreOptions) -> Self {
        let snapshot = options.persist_path.map(Snapshot::new);

        let entries = match snapshot.as_ref().map(Snapshot::load) {
            Some(Ok(Some(entries))) => {
                info!(entries = entries.len(), "Cache snapshot loaded");
                entries
            }
            Some(Err(e)) => {
                warn!("Cache snapshot ignored, starting empty: {}", e);
                HashMap::new()
            }
            Some(Ok(None)) | None => HashMap::new(),
        };

        Self {
            state: Arc::new(StoreState {
                entries: RwLock::new(entries),
                snapshot,
                clock: options.clock,
            }),
            sweeper: Mutex::new(None),
        }
    }

    /// Create a store and start its sweep when the interval is positive
    ///
    /// Must be called from within a tokio runtime when a sweep is configured.
    pub fn start(options: TtlStoreOptions) -> Self {
        let interval = options.sweep_interval;
        let store = Self::new(options);
        if !interval.is_zero() {
            let handle = store.spawn_sweeper(interval);
            *store.sweeper_slot() = Some(handle);
        }
        store
    }

    /// Spawn a sweep task for this store and hand back its handle
    ///
    /// The caller owns the handle; dropping it stops the sweep.
    pub fn spawn_sweeper(&self, interval: Duration) -> SweepHandle {
        let state = Arc::clone(&self.state);
        SweepHandle::spawn("ttl-store-sweep", interval, move || {
            state.sweep();
        })
    }

    /// Stop the sweep started by [`start`](Self::start), if any
    pub async fn stop_sweeper(&self) {
        let handle = self.sweeper_slot().take();
        if let Some(handle) = handle {
            handle.stop().await;
        }
    }

    /// Whether the sweep started by [`start`](Self::start) is running
    pub fn is_sweeping(&self) -> bool {
        self.sweeper_slot()
            .as_ref()
            .is_some_and(SweepHandle::is_running)
    }

    /// Remove every logically expired entry now
    ///
    /// # Returns
    /// Number of removed entries
    pub fn sweep(&self) -> usize {
        self.state.sweep()
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    /// Whether the key is physically stored, regardless of expiry
    pub fn contains_entry(&self, key: &str) -> bool {
        self.state.read().contains_key(key)
    }

    /// Raw stored entry, regardless of expiry
    pub fn entry(&self, key: &str) -> Option<Entry> {
        self.state.read().get(key).cloned()
    }

    fn sweeper_slot(&self) -> std::sync::MutexGuard<'_, Option<SweepHandle>> {
        self.sweeper.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, key: &str) -> Option<CacheValue> {
        let now = self.state.clock.now();
        self.state
            .read()
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value().clone())
    }

    fn insert(&self, key: &str, value: CacheValue, ttl_secs: i64) {
        let entry = Entry::new(value, self.state.clock.now(), ttl_from_secs(ttl_secs));
        let mut entries = self.state.write();

        entries.insert(key.to_string(), entry);
        self.state.flush(&entries);
    }

    fn remaining(&self, key: &str) -> Option<Duration> {
        let now = self.state.clock.now();
        self.state
            .read()
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.remaining(now))
    }

    fn expire_exact(&self, key: String) -> ExpireOutcome {
        let mut entries = self.state.write();
        entries.remove(&key);
        self.state.flush(&entries);
        ExpireOutcome::removed(vec![key])
    }

    fn expire_matching(&self, pattern: &str) -> ExpireOutcome {
        let mut errors = ExpireErrors::new();
        let mut removed = Vec::new();

        match GlobMatcher::new(pattern) {
            Ok(matcher) => {
                let mut entries = self.state.write();
                entries.retain(|key, entry| {
                    if entry.is_permanent() || !matcher.matches(key) {
                        return true;
                    }
                    removed.push(key.clone());
                    false
                });
                if !removed.is_empty() {
                    self.state.flush(&entries);
                }
            }
            Err(e) => errors.push(e),
        }

        debug!(pattern, removed = removed.len(), "Expired matching keys");
        match errors.into_error() {
            Some(err) => ExpireOutcome::partial(removed, err),
            None => ExpireOutcome::removed(removed),
        }
    }
}

#[async_trait]
impl CacheEngine for TtlStore {
    async fn get(&self, key: &str) -> Result<Option<CacheValue>> {
        Ok(self.lookup(key))
    }

    async fn set(&self, key: &str, value: CacheValue, ttl_secs: i64) -> Result<()> {
        self.insert(key, value, ttl_secs);
        Ok(())
    }

    async fn expire(&self, pattern: &str) -> ExpireOutcome {
        match KeyPattern::parse(pattern) {
            KeyPattern::Exact(key) => self.expire_exact(key),
            KeyPattern::Glob(glob) => self.expire_matching(&glob),
        }
    }

    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        Ok(self.remaining(key))
    }

    fn engine_name(&self) -> &str {
        MEMORY_SCHEME
    }
}
