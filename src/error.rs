//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
///
/// Cache reads and writes never fail; the variants here cover cache misuse,
/// PokeAPI transport problems and command-line mistakes.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The cache was configured with a zero expiration
    #[error("Cache expiration must be greater than zero")]
    InvalidExpiration,

    /// Transport-level failure talking to PokeAPI
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// PokeAPI answered with a non-success status
    #[error("API request to {url} failed with status code {status}")]
    Status { status: u16, url: String },

    /// A cached or fetched payload could not be (de)serialized
    #[error("Invalid payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was called with the wrong arguments
    #[error("usage: {0}")]
    Usage(String),

    /// `mapb` was used before any page was shown
    #[error("already on the first page")]
    FirstPage,

    /// The interactive line editor failed
    #[error("Line editor failed: {0}")]
    Prompt(String),

    /// The first word of the line is not a known command
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
