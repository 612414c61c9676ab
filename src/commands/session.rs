//! Session state shared by all commands

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::api::PokeApiClient;
use crate::models::Pokemon;

/// Everything a command may read or change during one Pokedex run.
///
/// Passed explicitly to every handler; there is no global state.
pub struct Session {
    /// PokeAPI access, including the response cache
    pub client: PokeApiClient,
    /// Caught Pokemon by name
    pub pokedex: BTreeMap<String, Pokemon>,
    /// Offset of the next location-area page `map` will show
    pub next_offset: u32,
    /// Location areas per page
    pub page_size: u32,
    /// Source of catch rolls
    rng: Box<dyn RngCore + Send>,
}

impl Session {
    /// Creates a session with an entropy-seeded random source.
    pub fn new(client: PokeApiClient, page_size: u32) -> Self {
        Self::with_rng(client, page_size, StdRng::from_entropy())
    }

    /// Creates a session with a caller-provided random source.
    pub fn with_rng(
        client: PokeApiClient,
        page_size: u32,
        rng: impl RngCore + Send + 'static,
    ) -> Self {
        Self {
            client,
            pokedex: BTreeMap::new(),
            next_offset: 0,
            page_size,
            rng: Box::new(rng),
        }
    }

    /// Uniform roll in `[0, 1)` for a catch attempt.
    pub(crate) fn roll(&mut self) -> f64 {
        self.rng.gen()
    }
}
