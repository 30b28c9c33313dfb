use anyhow::{Context, Result};
use pokedex_api::{
    ParseError, PokemonResponse, TypeResponse, normalize_name, parse_pokemon, parse_pokemon_page,
    parse_type,
};
use reqwest::StatusCode;
use tracing::debug;

use crate::config::DEFAULT_API_URL;

/// Async PokeAPI client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxy, user agent)
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}{path}`, `None` on 404
    async fn get(&self, path: &str) -> Result<Option<String>> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        let status = response.status();
        debug!(%url, %status, "PokeAPI response");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response
            .error_for_status()
            .with_context(|| format!("PokeAPI request failed: {url}"))?
            .text()
            .await
            .context("Failed to read PokeAPI response body")?;

        Ok(Some(body))
    }

    /// Fetch a pokemon by name. `Ok(None)` when PokeAPI has no such pokemon,
    /// including names that cannot be one.
    pub async fn pokemon(&self, name: &str) -> Result<Option<PokemonResponse>> {
        let name = match normalize_name(name) {
            Ok(name) => name,
            Err(ParseError::InvalidName(name)) => {
                debug!(%name, "not a pokemon name");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let Some(body) = self.get(&format!("/pokemon/{name}")).await? else {
            return Ok(None);
        };
        let pokemon = parse_pokemon(&body).with_context(|| format!("Invalid pokemon data for {name}"))?;
        Ok(Some(pokemon))
    }

    /// Total number of pokemon PokeAPI knows about
    pub async fn pokemon_count(&self) -> Result<u64> {
        let body = self
            .get("/pokemon")
            .await?
            .context("PokeAPI pokemon list not found")?;
        Ok(parse_pokemon_page(&body)?.count)
    }

    /// The first `count` pokemon names, in PokeAPI order
    pub async fn pokemon_names(&self, count: u64) -> Result<Vec<String>> {
        let body = self
            .get(&format!("/pokemon/?offset=0&limit={count}"))
            .await?
            .context("PokeAPI pokemon list not found")?;
        Ok(parse_pokemon_page(&body)?.names())
    }

    /// Damage relations for one type
    pub async fn type_relations(&self, name: &str) -> Result<TypeResponse> {
        let name = normalize_name(name)?;
        let body = self
            .get(&format!("/type/{name}"))
            .await?
            .with_context(|| format!("Type not found: {name}"))?;
        Ok(parse_type(&body)?)
    }
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new()
    }
}
