use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RegistryError;

/// Chat platform guild (server) snowflake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(pub u64);

impl FromStr for GuildId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(GuildId)
            .map_err(|_| RegistryError::InvalidGuildId(s.to_string()))
    }
}

impl std::fmt::Display for GuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GuildId {
    fn from(id: u64) -> Self {
        GuildId(id)
    }
}

/// Parse a comma-separated id list such as `GUILDS_ID=123,456`.
///
/// Blank segments are skipped, so a trailing comma or an empty value is fine.
pub fn parse_guild_list(value: &str) -> Result<HashSet<GuildId>, RegistryError> {
    value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}
