//! Pokedex - An interactive PokeAPI client
//!
//! Browse location areas, explore them and catch Pokemon, with API
//! responses kept in a time-based cache.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::TimedCache;
pub use commands::{execute, Outcome, Session};
pub use config::Config;
pub use error::{PokedexError, Result};
