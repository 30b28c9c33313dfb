use thiserror::Error;

pub mod pokemon;
pub mod types;

pub use pokemon::{
    NamedResource, PokemonPage, PokemonResponse, PokemonTypeSlot, parse_pokemon,
    parse_pokemon_page,
};
pub use types::{DamageRelations, TypeResponse, parse_type};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty pokemon name")]
    EmptyName,

    #[error("Invalid pokemon name: {0}")]
    InvalidName(String),

    #[error("Invalid typing: {0}")]
    Matchup(#[from] pokedex_matchup::MatchupError),
}

/// Normalize a user-supplied pokemon name into the form PokeAPI expects.
///
/// The result is used as a single URL path segment, so only letters, digits
/// and `-` are accepted.
pub fn normalize_name(name: &str) -> Result<String, ParseError> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return Err(ParseError::EmptyName);
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ParseError::InvalidName(name));
    }
    Ok(name)
}
