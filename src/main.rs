//! Pokedex - An interactive PokeAPI client
//!
//! Reads commands until `exit`, end of input or Ctrl+C at the prompt.

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::commands::{LineReader, ReadEvent};
use pokedex::{execute, Config, Outcome, PokeApiClient, PokedexError, Session, TimedCache};

const PROMPT: &str = "Pokedex > ";

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache and its sweep task
/// 4. Run the command loop on the line editor
/// 5. Shut the cache sweep down on exit
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, base_url={}, page_size={}",
        config.cache_ttl, config.base_url, config.page_size
    );

    let cache = Arc::new(
        TimedCache::new(config.cache_expiration()).context("failed to create response cache")?,
    );
    info!("Response cache ready, entries expire after {:?}", cache.expiration());

    let client = PokeApiClient::from_config(&config, cache);
    let mut session = Session::new(client, config.page_size);

    let result = run_repl(&mut session).await;

    let cache = session.client.cache();
    let stats = cache.stats().await;
    debug!(
        "Cache statistics: {} (hit rate {:.2})",
        serde_json::to_string(&stats).unwrap_or_default(),
        stats.hit_rate()
    );
    cache.shutdown();

    result
}

/// Reads lines until `exit`, end of input or Ctrl+C.
async fn run_repl(session: &mut Session) -> anyhow::Result<()> {
    let mut reader = LineReader::spawn(PROMPT);

    loop {
        let line = match reader.read_line().await.context("failed to read input")? {
            ReadEvent::Line(line) => line,
            ReadEvent::Interrupted => {
                info!("Received Ctrl+C, exiting");
                return Ok(());
            }
            ReadEvent::Eof => {
                println!();
                return Ok(());
            }
        };

        match execute(session, &line).await {
            Ok(Outcome::Continue(text)) => print!("{text}"),
            Ok(Outcome::Exit(text)) => {
                print!("{text}");
                return Ok(());
            }
            Err(PokedexError::UnknownCommand(_)) => {
                println!("\nUnknown command. Type 'help' for a list of commands.\n");
            }
            Err(err) => println!("\nError executing command: {err}\n"),
        }
    }
}
