//! `type` resource and its damage relations

use pokedex_matchup::{ElementType, MatchupError, UpstreamRelations};
use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::pokemon::NamedResource;

/// Defensive half of a type's `damage_relations`.
///
/// The offensive fields (`double_damage_to` and friends) are not needed for
/// weakness lookups and are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}

/// `GET /type/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeResponse {
    pub name: String,
    pub damage_relations: DamageRelations,
}

impl TypeResponse {
    /// Add this type's relations as a row of `upstream`.
    ///
    /// Fails if the type itself is not canonical. Bad attacker names are
    /// kept so the resolver can report them.
    pub fn add_to(&self, upstream: &mut UpstreamRelations) -> Result<ElementType, ParseError> {
        let defender = self
            .name
            .parse::<ElementType>()
            .map_err(MatchupError::from)?;
        let relations = &self.damage_relations;
        upstream.insert(
            defender,
            names(&relations.double_damage_from),
            names(&relations.half_damage_from),
            names(&relations.no_damage_from),
        );
        Ok(defender)
    }
}

fn names(list: &[NamedResource]) -> Vec<String> {
    list.iter().map(|r| r.name.clone()).collect()
}

pub fn parse_type(body: &str) -> Result<TypeResponse, ParseError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_matchup::{Resolver, TypeCombination, resolve};

    fn resource(name: &str) -> serde_json::Value {
        serde_json::json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/type/{name}/") })
    }

    fn type_body(name: &str, double: &[&str], half: &[&str], none: &[&str]) -> String {
        serde_json::json!({
            "id": 1,
            "name": name,
            "damage_relations": {
                "double_damage_from": double.iter().map(|n| resource(n)).collect::<Vec<_>>(),
                "half_damage_from": half.iter().map(|n| resource(n)).collect::<Vec<_>>(),
                "no_damage_from": none.iter().map(|n| resource(n)).collect::<Vec<_>>(),
                "double_damage_to": [],
                "half_damage_to": [],
                "no_damage_to": []
            }
        })
        .to_string()
    }

    #[test]
    fn test_parse_type() {
        let body = type_body("ground", &["water", "grass", "ice"], &["poison", "rock"], &["electric"]);
        let ground = parse_type(&body).unwrap();
        assert_eq!(ground.name, "ground");
        assert_eq!(ground.damage_relations.no_damage_from[0].name, "electric");
    }

    #[test]
    fn test_relations_resolve_like_table() {
        let ground = parse_type(&type_body(
            "ground",
            &["water", "grass", "ice"],
            &["poison", "rock"],
            &["electric"],
        ))
        .unwrap();
        let flying = parse_type(&type_body(
            "flying",
            &["electric", "ice", "rock"],
            &["grass", "bug"],
            &["ground"],
        ))
        .unwrap();

        let mut upstream = UpstreamRelations::new();
        let a = ground.add_to(&mut upstream).unwrap();
        let b = flying.add_to(&mut upstream).unwrap();

        let combo = TypeCombination::dual(a, b).unwrap();
        assert_eq!(Resolver::new(&upstream).resolve(&combo), resolve(&combo));
    }

    #[test]
    fn test_unknown_defender() {
        let shadow = parse_type(&type_body("shadow", &[], &[], &[])).unwrap();
        let mut upstream = UpstreamRelations::new();
        assert!(matches!(shadow.add_to(&mut upstream), Err(ParseError::Matchup(_))));
    }
}
