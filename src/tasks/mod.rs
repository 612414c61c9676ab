//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Expiration sweep: removes stale cache entries once per TTL period

mod sweep;

pub use sweep::spawn_sweep_task;
