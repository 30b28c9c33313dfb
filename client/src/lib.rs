//! Pokedex lookup client.
//!
//! Wires the pieces a chat bot needs: [`Config`] from the environment, the
//! async [`PokeApi`] client, the [`Pokedex`] lookup service (fetch, extract
//! types, resolve weaknesses), the cached name list used for autocomplete,
//! and guild registry syncing.
//!
//! # Example
//!
//! ```ignore
//! use pokedex_client::{Config, PokeApi, Pokedex};
//!
//! let config = Config::from_env()?;
//! let pokedex = Pokedex::new(PokeApi::with_base_url(&config.api_url));
//!
//! match pokedex.lookup("gyarados").await? {
//!     Some(entry) => {
//!         for weakness in &entry.weaknesses {
//!             println!("{} {}", weakness.attacker, weakness.multiplier);
//!         }
//!     }
//!     None => println!("Pokemon not Found"),
//! }
//! ```

mod config;
mod http;
pub mod names;
mod pokedex;

pub use config::{Config, DEFAULT_API_URL};
pub use http::PokeApi;
pub use names::{MAX_CHOICES, NameCache, autocomplete};
pub use pokedex::{Pokedex, PokedexEntry};

pub use pokedex_api::{ParseError, PokemonResponse};
pub use pokedex_matchup::{
    EffectivenessResult, ElementType, Multiplier, TypeCombination, Weakness,
};
pub use pokedex_registry::{GuildDelta, GuildId, GuildStore, JsonFileStore, sync};
