//! PokeAPI response shapes and the caught-Pokemon domain type
//!
//! Response structs mirror the JSON returned by PokeAPI; only the fields the
//! client shows are decoded.

pub mod pokemon;
pub mod responses;

// Re-export commonly used types
pub use pokemon::{Pokemon, PokemonStat};
pub use responses::{
    LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter, PokemonResponse,
    StatSlot, TypeSlot,
};
