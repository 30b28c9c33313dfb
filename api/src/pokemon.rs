//! `pokemon` resource and the paginated `pokemon` list

use pokedex_matchup::TypeCombination;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A `{ name, url }` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One entry of a pokemon's `types` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// The fields of `GET /pokemon/{name}` the lookup needs. Everything else in
/// the response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub types: Vec<PokemonTypeSlot>,
}

impl PokemonResponse {
    /// Type names ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.iter().map(|s| s.kind.name.as_str()).collect()
    }

    pub fn type_combination(&self) -> Result<TypeCombination, ParseError> {
        let names = self.type_names();
        Ok(TypeCombination::from_names(names.as_slice())?)
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}

/// `GET /pokemon?offset=..&limit=..`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPage {
    pub count: u64,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl PokemonPage {
    pub fn names(&self) -> Vec<String> {
        self.results.iter().map(|r| r.name.clone()).collect()
    }
}

pub fn parse_pokemon(body: &str) -> Result<PokemonResponse, ParseError> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_pokemon_page(body: &str) -> Result<PokemonPage, ParseError> {
    Ok(serde_json::from_str(body)?)
}
