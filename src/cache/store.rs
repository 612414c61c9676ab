//! Cache Store Module
//!
//! Unsynchronised HashMap storage with time-based expiration. Shared access
//! goes through [`TimedCache`](crate::cache::TimedCache), which wraps this
//! store in a lock and drives its sweep.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage where every entry shares one fixed expiration.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Read and reclamation counters
    stats: CacheStats,
    /// Lifetime of every entry
    expiration: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `expiration`.
    pub fn new(expiration: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            expiration,
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its lifetime.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the value if present and fresh.
    ///
    /// A stale entry is removed on the spot, so callers never observe data
    /// older than the expiration even if no sweep has run yet.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&mut self, key: &str, now: Instant) -> Option<Vec<u8>> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired_at(now, self.expiration) {
            self.entries.remove(key);
            self.stats.record_lazy_expiration();
            return None;
        }

        let value = entry.value.clone();
        self.stats.record_hit();
        Some(value)
    }

    // == Remove ==
    /// Removes the entry for `key`. Absent keys are ignored.
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Remove Expired ==
    /// Removes every entry that is stale right now.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired(&mut self) -> usize {
        self.remove_expired_at(Instant::now())
    }

    pub(crate) fn remove_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let expiration = self.expiration;
        self.entries
            .retain(|_, entry| !entry.is_expired_at(now, expiration));

        let removed = before - self.entries.len();
        self.stats.record_swept(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of stored entries, including stale ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
