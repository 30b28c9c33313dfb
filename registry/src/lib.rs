//! Guild registry: which guilds the bot is authorized for.
//!
//! The persisted list and the live membership reported by the chat client are
//! reconciled into a [`GuildDelta`]. [`sync`] applies that delta to a
//! [`GuildStore`] so a second run against the same live set is a no-op.

mod guild;
mod reconcile;
mod store;

use thiserror::Error;

pub use guild::{GuildId, parse_guild_list};
pub use reconcile::{GuildDelta, reconcile};
pub use store::{GuildStore, JsonFileStore, MemoryStore, sync};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid guild id: {0:?}")]
    InvalidGuildId(String),

    #[error("Guild store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Guild store is not a valid id list: {0}")]
    Json(#[from] serde_json::Error),
}
