//! Commands Module
//!
//! Parses REPL input and dispatches it to the command handlers.

pub mod handlers;
mod prompt;
pub mod registry;
mod session;

pub use prompt::{LineReader, ReadEvent};
pub use registry::{parse_line, Command, CommandSpec, Invocation, COMMANDS};
pub use session::Session;

use crate::error::Result;

/// What the REPL should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line
    Continue(String),
    /// Print the text and leave the loop
    Exit(String),
}

/// Parses and runs one input line against the session.
///
/// Blank lines produce an empty `Continue`.
pub async fn execute(session: &mut Session, line: &str) -> Result<Outcome> {
    let Some(Invocation { command, args }) = parse_line(line)? else {
        return Ok(Outcome::Continue(String::new()));
    };

    let text = match command {
        Command::Help => handlers::help(),
        Command::Exit => return Ok(Outcome::Exit("\nExiting the Pokedex\n".to_string())),
        Command::Map => handlers::map(session).await?,
        Command::MapBack => handlers::map_back(session).await?,
        Command::Explore => handlers::explore(session, &args).await?,
        Command::Catch => handlers::catch(session, &args).await?,
        Command::Inspect => handlers::inspect(session, &args)?,
        Command::Pokedex => handlers::pokedex(session),
    };

    Ok(Outcome::Continue(text))
}
