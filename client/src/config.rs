use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use pokedex_registry::{GuildId, parse_guild_list};

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_GUILD_STORE: &str = "guilds.json";
const DEFAULT_NAMES_CACHE: &str = "pokenames.json";

/// Runtime settings, read from the environment (and `.env` if present).
///
/// | Variable | Default |
/// |---|---|
/// | `POKEAPI_URL` | `https://pokeapi.co/api/v2` |
/// | `GUILDS_ID` | empty, comma-separated guild ids |
/// | `GUILD_STORE` | `guilds.json` |
/// | `POKEMON_NAMES` | `pokenames.json` |
/// | `DISCORD_TOKEN` | unset |
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub guild_ids: HashSet<GuildId>,
    pub guild_store: PathBuf,
    pub names_cache: PathBuf,
    pub discord_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (silently ignore if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let guild_ids = match get("GUILDS_ID") {
            Some(raw) => parse_guild_list(&raw).context("Invalid GUILDS_ID")?,
            None => HashSet::new(),
        };

        Ok(Self {
            api_url: get("POKEAPI_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            guild_ids,
            guild_store: get("GUILD_STORE")
                .unwrap_or_else(|| DEFAULT_GUILD_STORE.to_string())
                .into(),
            names_cache: get("POKEMON_NAMES")
                .unwrap_or_else(|| DEFAULT_NAMES_CACHE.to_string())
                .into(),
            discord_token: get("DISCORD_TOKEN"),
        })
    }
}
