//! Cached list of pokemon names, used for autocomplete suggestions

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::http::PokeApi;

/// Most choices a chat platform accepts for one autocomplete response
pub const MAX_CHOICES: usize = 25;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameCache {
    pub names: Vec<String>,
}

impl NameCache {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load from a JSON array file. A missing file is an empty cache.
    pub async fn load(path: &Path) -> Result<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(body) => serde_json::from_str(&body)
                .with_context(|| format!("Invalid name cache at {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        let body = serde_json::to_string(self)?;
        tokio::fs::write(path, body)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn autocomplete(&self, current: &str) -> Vec<&str> {
        autocomplete(&self.names, current)
    }
}

/// Names containing `current`, case-insensitively, in list order and capped
/// at [`MAX_CHOICES`]
pub fn autocomplete<'a>(names: &'a [String], current: &str) -> Vec<&'a str> {
    let needle = current.trim().to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(MAX_CHOICES)
        .map(String::as_str)
        .collect()
}

pub fn needs_update(cached: usize, remote_count: u64) -> bool {
    (cached as u64) < remote_count
}

/// Refetch the name list if PokeAPI reports more pokemon than the cache holds.
/// Returns whether the cache file was rewritten.
pub async fn refresh(api: &PokeApi, path: &Path) -> Result<bool> {
    let cache = NameCache::load(path).await?;
    let count = api.pokemon_count().await?;

    if !needs_update(cache.len(), count) {
        debug!(cached = cache.len(), count, "name cache up to date");
        return Ok(false);
    }

    let fresh = NameCache::new(api.pokemon_names(count).await?);
    fresh.save(path).await?;
    info!(before = cache.len(), after = fresh.len(), "name cache refreshed");
    Ok(true)
}
