//! Type table and weakness resolution for Pokemon lookups.
//!
//! # Overview
//!
//! `pokedex-matchup` is the core of the pokedex workspace. Everything else
//! (API models, HTTP, guild bookkeeping) feeds it type names or consumes its
//! results:
//!
//! ```text
//! pokedex-api (PokeAPI wire models)
//!        │  type names
//!        ▼
//! pokedex-matchup (type table + resolver) ← THIS CRATE
//!        │  EffectivenessResult
//!        ▼
//! pokedex-client (lookup service, presentation layer)
//! ```
//!
//! # Main Types
//!
//! - [`ElementType`] - the 18 canonical types
//! - [`TypeProfile`] / [`TYPE_TABLE`] - what each type is weak to, resists, and is immune to
//! - [`TypeCombination`] - one or two distinct types
//! - [`Resolver`] - combines relations, cancelling resistances and immunities
//! - [`EffectivenessResult`] - sorted weaknesses with 1x / 2x markers
//!
//! # Example Usage
//!
//! ```
//! use pokedex_matchup::{resolve_names, ElementType, Multiplier};
//!
//! let result = resolve_names(&["ground", "flying"]).unwrap();
//! assert_eq!(result.get(ElementType::Ice), Some(Multiplier::Double));
//! assert_eq!(result.get(ElementType::Water), Some(Multiplier::Normal));
//! assert!(!result.contains(ElementType::Electric));
//! ```

pub mod error;
pub mod query;
pub mod types;

pub use error::{MatchupError, UnknownTypeError, UnresolvedTypeError};
pub use query::{
    EffectivenessResult, Multiplier, RelationSource, Relations, Resolver, UpstreamRelations,
    Weakness, resolve, resolve_names,
};
pub use types::{EffectivenessTable, ElementType, TYPE_TABLE, TypeCombination, TypeProfile};
