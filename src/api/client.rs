//! PokeAPI Client
//!
//! Fetches PokeAPI resources, reading through the shared [`TimedCache`].

use std::sync::Arc;

use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, PokemonResponse};

/// Value sent in the `User-Agent` header of every request.
pub const CLIENT_USER_AGENT: &str = "PokedexRs";

/// HTTP client for PokeAPI with response caching.
///
/// Successful response bodies are cached verbatim under composite keys of
/// the form `<resource-kind>_<parameter>`, so repeated queries within the
/// cache TTL never reach the network.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<TimedCache>,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>, cache: Arc<TimedCache>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache,
        }
    }

    /// Builds a client from configuration, sharing the given cache.
    pub fn from_config(config: &Config, cache: Arc<TimedCache>) -> Self {
        Self::new(config.base_url.clone(), cache)
    }

    pub fn cache(&self) -> &Arc<TimedCache> {
        &self.cache
    }

    // == Location Areas ==
    /// Returns the names of `limit` location areas starting at `offset`.
    pub async fn location_areas(&self, offset: u32, limit: u32) -> Result<Vec<String>> {
        let key = format!("location_areas_{offset}");
        let url = format!(
            "{}/location-area?limit={limit}&offset={offset}",
            self.base_url
        );
        let page: LocationAreaPage = self.fetch_json(&key, &url).await?;
        Ok(page.names())
    }

    // == Explore ==
    /// Returns the names of the Pokemon encountered in `area`.
    pub async fn explore(&self, area: &str) -> Result<Vec<String>> {
        let key = format!("explore_{area}");
        let url = format!("{}/location-area/{area}/", self.base_url);
        let detail: LocationAreaDetail = self.fetch_json(&key, &url).await?;
        Ok(detail.pokemon_names())
    }

    // == Pokemon ==
    pub async fn pokemon(&self, name: &str) -> Result<PokemonResponse> {
        let key = format!("pokemon_{name}");
        let url = format!("{}/pokemon/{name}/", self.base_url);
        self.fetch_json(&key, &url).await
    }

    /// Decodes the cached body for `key`, or fetches `url` and caches it.
    ///
    /// Only bodies that decode successfully are cached.
    async fn fetch_json<T: DeserializeOwned>(&self, key: &str, url: &str) -> Result<T> {
        if let Some(body) = self.cache.get(key).await {
            debug!(key, "Cache hit");
            return Ok(serde_json::from_slice(&body)?);
        }

        debug!(key, url, "Cache miss, fetching");
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;
        self.cache.add(key, body.to_vec()).await;
        Ok(value)
    }
}
