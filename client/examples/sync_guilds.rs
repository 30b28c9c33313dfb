//! Reconcile the persisted guild list with the guilds the bot is in.
//!
//! Live guild ids come from the command line, standing in for the chat
//! client's membership report. Without arguments, `GUILDS_ID` is used.
//!
//! ```text
//! cargo run -p pokedex-client --example sync_guilds -- 123 456
//! ```

use std::collections::HashSet;

use anyhow::{Context, Result};
use pokedex_client::{Config, GuildId, JsonFileStore, sync};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let live: HashSet<GuildId> = if args.is_empty() {
        config.guild_ids.clone()
    } else {
        args.iter()
            .map(|a| a.parse::<GuildId>())
            .collect::<Result<_, _>>()
            .context("Guild ids must be numeric")?
    };

    let store = JsonFileStore::new(&config.guild_store);
    let delta = sync(&store, &live)?;

    let mut added: Vec<_> = delta.to_add.iter().collect();
    let mut removed: Vec<_> = delta.to_remove.iter().collect();
    added.sort();
    removed.sort();

    println!("Store:   {}", store.path().display());
    println!("Added:   {:?}", added);
    println!("Removed: {:?}", removed);
    Ok(())
}
