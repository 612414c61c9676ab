//! Caught Pokemon
//!
//! The trimmed-down record kept in the session pokedex and its `inspect`
//! rendering.

use std::fmt;

use crate::models::PokemonResponse;

/// Highest base experience used when computing catch odds.
pub const MAX_BASE_EXPERIENCE: f64 = 255.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonStat {
    pub name: String,
    pub base_stat: u32,
}

/// A Pokemon as stored in the pokedex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<String>,
}

impl Pokemon {
    /// Probability of a throw succeeding: `base_experience / 255`.
    ///
    /// Values above 255 are clamped to a certain catch.
    pub fn catch_rate(&self) -> f64 {
        (self.base_experience as f64 / MAX_BASE_EXPERIENCE).min(1.0)
    }

    pub fn format_stats(&self) -> String {
        self.stats
            .iter()
            .map(|stat| format!("  -{}: {}\n", stat.name, stat.base_stat))
            .collect()
    }

    pub fn format_types(&self) -> String {
        self.types
            .iter()
            .map(|kind| format!("  - {kind}\n"))
            .collect()
    }
}

impl From<PokemonResponse> for Pokemon {
    fn from(response: PokemonResponse) -> Self {
        Self {
            name: response.name,
            base_experience: response.base_experience.unwrap_or_default(),
            height: response.height,
            weight: response.weight,
            stats: response
                .stats
                .into_iter()
                .map(|slot| PokemonStat {
                    name: slot.stat.name,
                    base_stat: slot.base_stat,
                })
                .collect(),
            types: response.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }
}

/// The `inspect` view.
impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Weight: {}", self.weight)?;
        writeln!(f, "Stats:")?;
        write!(f, "{}", self.format_stats())?;
        writeln!(f, "Types:")?;
        write!(f, "{}", self.format_types())
    }
}
