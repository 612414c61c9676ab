//! API Module
//!
//! HTTP access to PokeAPI.
//!
//! # Endpoints used
//! - `GET /location-area?limit=&offset=` - A page of location areas
//! - `GET /location-area/{name}/` - Encounters in one area
//! - `GET /pokemon/{name}/` - A single Pokemon

pub mod client;

pub use client::{PokeApiClient, CLIENT_USER_AGENT};
