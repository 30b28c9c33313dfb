//! Look up pokemon and print their weaknesses.
//!
//! ```text
//! cargo run -p pokedex-client --example lookup -- gyarados charizard
//! ```
//!
//! Set `RUST_LOG=debug` for request logging.

use anyhow::Result;
use pokedex_client::{Config, NameCache, PokeApi, Pokedex, PokedexEntry};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = Config::from_env()?;
    let pokedex = Pokedex::new(PokeApi::with_base_url(&config.api_url));

    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        println!("Usage: lookup <pokemon>...");
        return Ok(());
    }

    for name in &names {
        match pokedex.lookup(name).await? {
            Some(entry) => print_entry(&entry),
            None => {
                println!("{}: Pokemon not Found", name);
                let cache = NameCache::load(&config.names_cache).await?;
                let suggestions = cache.autocomplete(name);
                if !suggestions.is_empty() {
                    println!("Did you mean: {}", suggestions.join(", "));
                }
            }
        }
        println!();
    }

    Ok(())
}

fn print_entry(entry: &PokedexEntry) {
    println!("#{} {}", entry.id, entry.name);
    println!("Types:      {}", entry.types);
    println!("Height:     {}m", entry.height_m);
    println!("Weight:     {}kg", entry.weight_kg);

    let weaknesses: Vec<String> = entry
        .weaknesses
        .iter()
        .map(|w| format!("{} ({})", w.attacker, w.multiplier))
        .collect();
    println!("Weaknesses: {}", weaknesses.join(", "));
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
