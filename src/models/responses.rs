//! Response DTOs for the PokeAPI endpoints
//!
//! Defines the structure of the JSON bodies the client decodes.

use serde::{Deserialize, Serialize};

/// A `{ "name", "url" }` reference, the building block of most PokeAPI bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Body of `GET /location-area?limit=&offset=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Location area names on this page, in API order.
    pub fn names(&self) -> Vec<String> {
        self.results.iter().map(|area| area.name.clone()).collect()
    }
}

/// One entry of `pokemon_encounters`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Body of `GET /location-area/{name}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaDetail {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationAreaDetail {
    /// Names of the Pokemon that can be encountered in this area.
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.clone())
            .collect()
    }
}

/// One entry of a Pokemon's `stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One entry of a Pokemon's `types`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Body of `GET /pokemon/{name}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    /// Null for some alternate forms
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}
