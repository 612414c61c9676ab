//! Command Registry
//!
//! The table of commands the REPL understands and line parsing.

use std::str::FromStr;

use crate::error::PokedexError;

/// A command the user can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// Name and help text of one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub command: Command,
    pub name: &'static str,
    pub description: &'static str,
}

/// All commands, sorted by name.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::Catch,
        name: "catch",
        description: "Tries catching a Pokemon",
    },
    CommandSpec {
        command: Command::Exit,
        name: "exit",
        description: "Exits the Pokedex",
    },
    CommandSpec {
        command: Command::Explore,
        name: "explore",
        description: "Explores a location area and displays the Pokemon found",
    },
    CommandSpec {
        command: Command::Help,
        name: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        command: Command::Inspect,
        name: "inspect",
        description: "Displays various Pokemon stats",
    },
    CommandSpec {
        command: Command::Map,
        name: "map",
        description: "Displays the next page of location areas",
    },
    CommandSpec {
        command: Command::MapBack,
        name: "mapb",
        description: "Displays the previous page of location areas",
    },
    CommandSpec {
        command: Command::Pokedex,
        name: "pokedex",
        description: "Displays all caught Pokemon",
    },
];

impl FromStr for Command {
    type Err = PokedexError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        COMMANDS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.command)
            .ok_or_else(|| PokedexError::UnknownCommand(name.to_string()))
    }
}

/// A parsed input line: the command and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub command: Command,
    pub args: Vec<&'a str>,
}

/// Splits a line into a command and its arguments.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Invocation<'_>>, PokedexError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };

    Ok(Some(Invocation {
        command: name.parse()?,
        args: words.collect(),
    }))
}
