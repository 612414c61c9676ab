//! Command Handlers
//!
//! One function per command. Each returns the text to show the user.

use std::fmt::Write;

use tracing::debug;

use crate::commands::{Session, COMMANDS};
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;

/// Handler for `help`
pub fn help() -> String {
    let mut out = String::from("\nWelcome to the Pokedex!\n\nAvailable commands:\n\n");
    for spec in COMMANDS {
        let _ = writeln!(out, "{}: {}", spec.name, spec.description);
    }
    out
}

/// Handler for `map`
///
/// Shows the page at the session offset, then advances the offset.
pub async fn map(session: &mut Session) -> Result<String> {
    let offset = session.next_offset;
    let areas = session
        .client
        .location_areas(offset, session.page_size)
        .await?;

    let mut out = String::from("\nLocation Areas:\n");
    for area in &areas {
        let _ = writeln!(out, "{area}");
    }

    session.next_offset = offset.saturating_add(session.page_size);
    Ok(out)
}

/// Handler for `mapb`
///
/// Steps back two pages (the one just shown and the one before it) and
/// shows that page. Before the first page the offset is reset.
pub async fn map_back(session: &mut Session) -> Result<String> {
    let previous = session
        .page_size
        .checked_mul(2)
        .and_then(|step| session.next_offset.checked_sub(step));
    let Some(previous) = previous else {
        session.next_offset = 0;
        return Err(PokedexError::FirstPage);
    };

    session.next_offset = previous;
    map(session).await
}

/// Handler for `explore <area_name>`
pub async fn explore(session: &mut Session, args: &[&str]) -> Result<String> {
    let [area] = args else {
        return Err(PokedexError::Usage("explore <area_name>".to_string()));
    };

    let pokemon = session.client.explore(area).await?;

    let mut out = format!("\nExploring {area}...\nFound Pokemon:\n");
    for name in &pokemon {
        let _ = writeln!(out, " - {name}");
    }
    Ok(out)
}

/// Handler for `catch <pokemon_name>`
pub async fn catch(session: &mut Session, args: &[&str]) -> Result<String> {
    let [name] = args else {
        return Err(PokedexError::Usage("catch <pokemon_name>".to_string()));
    };

    if session.pokedex.contains_key(*name) {
        return Ok(format!("You already caught {name}!\n"));
    }

    let pokemon = Pokemon::from(session.client.pokemon(name).await?);

    let mut out = format!("Throwing a Pokeball at {name}...\n");
    let roll = session.roll();
    let catch_rate = pokemon.catch_rate();
    debug!(pokemon = %name, roll, catch_rate, "Catch attempt");

    if roll <= catch_rate {
        let _ = writeln!(out, "{name} was caught!");
        out.push_str("You may now inspect it with the inspect command.\n");
        session.pokedex.insert(name.to_string(), pokemon);
    } else {
        let _ = writeln!(out, "{name} escaped!");
    }
    Ok(out)
}

/// Handler for `inspect <pokemon_name>`
pub fn inspect(session: &Session, args: &[&str]) -> Result<String> {
    let [name] = args else {
        return Err(PokedexError::Usage("inspect <pokemon_name>".to_string()));
    };

    Ok(match session.pokedex.get(*name) {
        Some(pokemon) => pokemon.to_string(),
        None => "You haven't caught that Pokemon yet\n".to_string(),
    })
}

/// Handler for `pokedex`
pub fn pokedex(session: &Session) -> String {
    if session.pokedex.is_empty() {
        return "You haven't caught any Pokemon yet\n".to_string();
    }

    let mut out = String::from("Your Pokedex:\n");
    for name in session.pokedex.keys() {
        let _ = writeln!(out, " - {name}");
    }
    out
}
