//! Expiration Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps expired entries every `period`.
///
/// The first sweep happens one full period after spawning. Each sweep holds
/// the write lock for the whole scan, so it never interleaves with inserts.
///
/// The task stops as soon as `shutdown` changes or its sender is dropped,
/// whichever comes first; it does not wait for the next tick.
///
/// # Panics
/// Must be called from within a tokio runtime.
pub fn spawn_sweep_task(
    store: Arc<RwLock<CacheStore>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(period_ms = period.as_millis() as u64, "Starting expiration sweep task");

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                _ = shutdown.changed() => {
                    break;
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut store_guard = store.write().await;
                        store_guard.remove_expired()
                    };

                    if removed > 0 {
                        info!("Expiration sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Expiration sweep: no expired entries found");
                    }
                }
            }
        }

        debug!("Expiration sweep task stopped");
    })
}
