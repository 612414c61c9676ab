//! Timed Cache Module
//!
//! Thread-safe cache handle: a [`CacheStore`] behind an `Arc<RwLock<_>>`
//! plus the background sweep that reclaims stale entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_sweep_task;

// == Timed Cache ==
/// Concurrent byte cache with a fixed time-to-live.
///
/// Entries are considered stale once `expiration` has elapsed since they were
/// added. Stale entries are never returned: reads remove them on the spot,
/// and a background sweep removes the rest once per `expiration` period.
///
/// Every operation that can modify the map, `get` included, takes the write
/// lock.
///
/// # Example
/// ```ignore
/// let cache = TimedCache::new(Duration::from_secs(300))?;
/// cache.add("pokemon_pikachu", body).await;
/// if let Some(bytes) = cache.get("pokemon_pikachu").await { /* ... */ }
/// cache.shutdown();
/// ```
#[derive(Debug)]
pub struct TimedCache {
    store: Arc<RwLock<CacheStore>>,
    expiration: Duration,
    shutdown_tx: watch::Sender<bool>,
    sweeper: JoinHandle<()>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// Returns [`PokedexError::InvalidExpiration`] for a zero `expiration`.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn new(expiration: Duration) -> Result<Self> {
        if expiration.is_zero() {
            return Err(PokedexError::InvalidExpiration);
        }

        let store = Arc::new(RwLock::new(CacheStore::new(expiration)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let sweeper = spawn_sweep_task(store.clone(), expiration, shutdown_rx);

        debug!(expiration_ms = expiration.as_millis() as u64, "Cache created");

        Ok(Self {
            store,
            expiration,
            shutdown_tx,
            sweeper,
        })
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let mut store = self.store.write().await;
        store.insert(key.into(), value.into());
    }

    // == Get ==
    /// Returns the value for `key` if present and fresh.
    ///
    /// A stale entry is deleted before returning `None`.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut store = self.store.write().await;
        store.get(key)
    }

    // == Delete ==
    /// Removes the entry for `key`; absent keys are ignored.
    pub async fn delete(&self, key: &str) {
        let mut store = self.store.write().await;
        store.remove(key);
    }

    /// Number of stored entries, including stale ones not yet reclaimed.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Shutdown ==
    /// Signals the sweep task to stop and returns immediately.
    ///
    /// The cache stays usable afterwards; stale entries are then only
    /// removed when read. Calling this more than once is a no-op that logs a
    /// warning.
    pub fn shutdown(&self) {
        if self.shutdown_tx.send_replace(true) {
            warn!("Cache shutdown requested more than once; ignoring");
            return;
        }
        info!("Cache sweep shutdown signalled");
    }

    /// Whether the background sweep task is still running.
    pub fn is_sweeping(&self) -> bool {
        !self.sweeper.is_finished()
    }
}
