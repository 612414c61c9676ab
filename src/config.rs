//! Configuration Module
//!
//! Handles loading the client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Largest accepted `map` page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache entry lifetime in seconds (also the sweep period)
    pub cache_ttl: u64,
    /// Base URL of the PokeAPI service, without trailing slash
    pub base_url: String,
    /// Number of location areas shown per `map` page
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `POKEAPI_BASE_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20, max: 100)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            page_size: env::var("POKEDEX_PAGE_SIZE")
                .ok()
                .and_then(|v| parse_page_size(&v))
                .unwrap_or(defaults.page_size),
        }
    }

    /// Cache TTL as a [`Duration`].
    pub fn cache_expiration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

/// Parses a page size, clamping it to [`MAX_PAGE_SIZE`].
///
/// Returns `None` for zero or unparsable input.
fn parse_page_size(value: &str) -> Option<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&v| v > 0)
        .map(|v| v.min(MAX_PAGE_SIZE))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 300,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 20,
        }
    }
}
