use anyhow::{Context, Result};
use pokedex_api::{ParseError, PokemonResponse};
use pokedex_matchup::{EffectivenessResult, TypeCombination, resolve};
use tracing::{info, warn};

use crate::http::PokeApi;

/// Everything a presentation layer needs to show one pokemon
#[derive(Debug, Clone, PartialEq)]
pub struct PokedexEntry {
    pub id: u32,
    pub name: String,
    pub height_m: f64,
    pub weight_kg: f64,
    pub types: TypeCombination,
    pub weaknesses: EffectivenessResult,
}

impl PokedexEntry {
    /// Extract the typing from a response and resolve its weaknesses
    pub fn from_response(pokemon: &PokemonResponse) -> Result<Self, ParseError> {
        let types = pokemon.type_combination()?;
        Ok(Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            height_m: pokemon.height_m(),
            weight_kg: pokemon.weight_kg(),
            types,
            weaknesses: resolve(&types),
        })
    }
}

/// Pokemon lookup service: fetch from PokeAPI, then resolve weaknesses.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    api: PokeApi,
}

impl Pokedex {
    pub fn new(api: PokeApi) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &PokeApi {
        &self.api
    }

    /// Look up a pokemon by name. `Ok(None)` means PokeAPI does not know it.
    pub async fn lookup(&self, name: &str) -> Result<Option<PokedexEntry>> {
        let Some(pokemon) = self.api.pokemon(name).await? else {
            info!(name, "pokemon not found");
            return Ok(None);
        };

        let entry = PokedexEntry::from_response(&pokemon)
            .with_context(|| format!("Unusable typing for {}", pokemon.name))?;
        for unresolved in &entry.weaknesses.unresolved {
            warn!(defender = %unresolved.defender, name = %unresolved.name, "unresolved attacking type");
        }

        info!(
            name = %entry.name,
            types = %entry.types,
            weaknesses = entry.weaknesses.len(),
            "pokemon data retrieved"
        );
        Ok(Some(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::{PIKACHU, local_api, serve};
    use pokedex_api::parse_pokemon;
    use pokedex_matchup::{ElementType, Multiplier};

    #[test]
    fn test_entry_from_response() {
        let body = r#"{"id":130,"name":"gyarados","height":65,"weight":2350,"types":[
            {"slot":1,"type":{"name":"water","url":""}},
            {"slot":2,"type":{"name":"flying","url":""}}]}"#;
        let entry = PokedexEntry::from_response(&parse_pokemon(body).unwrap()).unwrap();

        assert_eq!(entry.name, "gyarados");
        assert_eq!(entry.height_m, 6.5);
        assert_eq!(entry.weight_kg, 235.0);
        assert_eq!(entry.types.to_string(), "water/flying");
        // Electric hits both, Grass is resisted by Flying, Ice by Water
        assert_eq!(entry.weaknesses.get(ElementType::Electric), Some(Multiplier::Double));
        assert_eq!(entry.weaknesses.get(ElementType::Rock), Some(Multiplier::Normal));
        assert_eq!(entry.weaknesses.len(), 2);
    }

    #[tokio::test]
    async fn test_lookup() {
        let (url, server) = serve(vec![(200, PIKACHU.to_string())]).await;
        let pokedex = Pokedex::new(local_api(url));

        let entry = pokedex.lookup("pikachu").await.unwrap().unwrap();
        assert_eq!(entry.types, TypeCombination::single(ElementType::Electric));
        assert_eq!(entry.weaknesses.singles(), vec![ElementType::Ground]);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let (url, server) = serve(vec![(404, String::new())]).await;
        let pokedex = Pokedex::new(local_api(url));

        assert!(pokedex.lookup("agumon").await.unwrap().is_none());
        server.await.unwrap();
    }
}
