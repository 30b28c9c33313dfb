//! Refresh the cached pokemon name list when PokeAPI has new entries.
//!
//! ```text
//! cargo run -p pokedex-client --example refresh_names
//! ```

use anyhow::Result;
use pokedex_client::{Config, NameCache, PokeApi, names};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = Config::from_env()?;
    let api = PokeApi::with_base_url(&config.api_url);

    let refreshed = names::refresh(&api, &config.names_cache).await?;
    let cache = NameCache::load(&config.names_cache).await?;

    println!(
        "{} names in {} ({})",
        cache.len(),
        config.names_cache.display(),
        if refreshed { "refreshed" } else { "up to date" }
    );
    Ok(())
}
