//! Shared test doubles

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tiercache_domain::error::{Error, Result};
use tiercache_domain::ports::{CacheValue, KeyValueService, ManualClock};
use tiercache_domain::value_objects::{JsonCodec, ValueCodec};
use tiercache_providers::cache::{TtlStore, TtlStoreOptions};
use tokio::sync::Notify;

/// Per-operation call counters
#[derive(Debug, Default)]
pub struct CallCounters {
    pub get: AtomicUsize,
    pub set: AtomicUsize,
    pub delete: AtomicUsize,
    pub list_keys: AtomicUsize,
    pub ttl: AtomicUsize,
}

impl CallCounters {
    pub fn gets(&self) -> usize {
        self.get.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.delete.load(Ordering::SeqCst)
    }

    pub fn ttls(&self) -> usize {
        self.ttl.load(Ordering::SeqCst)
    }
}

/// Pauses one `get` after it has read its value
#[derive(Debug, Default)]
pub struct GetGate {
    pub entered: Notify,
    pub release: Notify,
}

/// In-memory stand-in for an external key-value service
///
/// Entries never expire on their own; the stored ttl is what
/// `ttl_remaining` reports.
#[derive(Debug, Default)]
pub struct FakeKeyValueService {
    entries: Mutex<HashMap<String, (Vec<u8>, Duration)>>,
    pub calls: CallCounters,
    fail_sets: AtomicBool,
    fail_list: AtomicBool,
    gate: Mutex<Option<Arc<GetGate>>>,
}

impl FakeKeyValueService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: CacheValue, ttl: Duration) {
        let bytes = JsonCodec.encode(&value).unwrap();
        self.insert_raw(key, bytes, ttl);
    }

    pub fn insert_raw(&self, key: &str, bytes: Vec<u8>, ttl: Duration) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (bytes, ttl));
    }

    pub fn value(&self, key: &str) -> Option<CacheValue> {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(bytes, _)| JsonCodec.decode(bytes).unwrap())
    }

    pub fn stored_ttl(&self, key: &str) -> Option<Duration> {
        self.entries.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn fail_sets(&self, fail: bool) {
        self.fail_sets.store(fail, Ordering::SeqCst);
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Make the next `get` wait for `release` after reading its value
    pub fn gate_next_get(&self) -> Arc<GetGate> {
        let gate = Arc::new(GetGate::default());
        *self.gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }
}

#[async_trait]
impl KeyValueService for FakeKeyValueService {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.calls.get.fetch_add(1, Ordering::SeqCst);
        let value = self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(bytes, _)| bytes.clone());

        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        self.calls.set.fetch_add(1, Ordering::SeqCst);
        if self.fail_sets.load(Ordering::SeqCst) {
            return Err(Error::backend("connection reset"));
        }
        self.insert_raw(key, value, ttl);
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<usize> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        Ok(keys.iter().filter(|k| entries.remove(*k).is_some()).count())
    }

    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.calls.list_keys.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Error::backend("KEYS timed out"));
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .keys()
            .filter(|k| keys_pattern_matches(pattern.as_bytes(), k.as_bytes()))
            .cloned()
            .collect())
    }

    async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        self.calls.ttl.fetch_add(1, Ordering::SeqCst);
        Ok(self.stored_ttl(key))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Glob matching with Redis `KEYS` rules
///
/// `*` runs, `?`, `\` escapes and `[...]` classes with ranges and `^`
/// negation. An unclosed class ends at the end of the pattern.
pub fn keys_pattern_matches(pattern: &[u8], key: &[u8]) -> bool {
    match pattern {
        [] => key.is_empty(),
        [b'*', rest @ ..] => {
            rest.is_empty() || (0..=key.len()).any(|i| keys_pattern_matches(rest, &key[i..]))
        }
        [b'?', rest @ ..] => !key.is_empty() && keys_pattern_matches(rest, &key[1..]),
        [b'[', class @ ..] => {
            let Some((&c, key_rest)) = key.split_first() else {
                return false;
            };
            let (negate, mut class) = match class {
                [b'^', tail @ ..] => (true, tail),
                _ => (false, class),
            };
            let mut hit = false;
            loop {
                match class {
                    [] => break,
                    [b']', tail @ ..] => {
                        class = tail;
                        break;
                    }
                    [b'\\', esc, tail @ ..] => {
                        hit |= *esc == c;
                        class = tail;
                    }
                    [lo, b'-', hi, tail @ ..] if *hi != b']' => {
                        let (lo, hi) = if lo <= hi { (*lo, *hi) } else { (*hi, *lo) };
                        hit |= (lo..=hi).contains(&c);
                        class = tail;
                    }
                    [x, tail @ ..] => {
                        hit |= *x == c;
                        class = tail;
                    }
                }
            }
            hit != negate && keys_pattern_matches(class, key_rest)
        }
        [b'\\', literal, rest @ ..] | [literal, rest @ ..] => {
            key.first() == Some(literal) && keys_pattern_matches(rest, &key[1..])
        }
    }
}

/// Store without sweep or persistence, driven by a manual clock
pub fn manual_store() -> (TtlStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_now());
    let store = TtlStore::new(TtlStoreOptions::new().with_clock(clock.clone()));
    (store, clock)
}

/// Sorted copy of a key list
pub fn sorted(mut keys: Vec<String>) -> Vec<String> {
    keys.sort();
    keys
}
