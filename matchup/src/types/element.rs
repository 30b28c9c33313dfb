//! The 18 elemental types

use std::str::FromStr;

use crate::error::UnknownTypeError;

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum ElementType {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl ElementType {
    /// All 18 types, in table order
    pub const ALL: [ElementType; 18] = [
        ElementType::Normal,
        ElementType::Fire,
        ElementType::Water,
        ElementType::Electric,
        ElementType::Grass,
        ElementType::Ice,
        ElementType::Fighting,
        ElementType::Poison,
        ElementType::Ground,
        ElementType::Flying,
        ElementType::Psychic,
        ElementType::Bug,
        ElementType::Rock,
        ElementType::Ghost,
        ElementType::Dragon,
        ElementType::Dark,
        ElementType::Steel,
        ElementType::Fairy,
    ];

    pub fn all() -> &'static [ElementType] {
        &Self::ALL
    }

    /// Position of this type in [`TYPE_TABLE`](crate::TYPE_TABLE)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a type name (case-insensitive, surrounding whitespace ignored)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(ElementType::Normal),
            "fire" => Some(ElementType::Fire),
            "water" => Some(ElementType::Water),
            "electric" => Some(ElementType::Electric),
            "grass" => Some(ElementType::Grass),
            "ice" => Some(ElementType::Ice),
            "fighting" => Some(ElementType::Fighting),
            "poison" => Some(ElementType::Poison),
            "ground" => Some(ElementType::Ground),
            "flying" => Some(ElementType::Flying),
            "psychic" => Some(ElementType::Psychic),
            "bug" => Some(ElementType::Bug),
            "rock" => Some(ElementType::Rock),
            "ghost" => Some(ElementType::Ghost),
            "dragon" => Some(ElementType::Dragon),
            "dark" => Some(ElementType::Dark),
            "steel" => Some(ElementType::Steel),
            "fairy" => Some(ElementType::Fairy),
            _ => None,
        }
    }

    /// Canonical lowercase name, as used by PokeAPI
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Normal => "normal",
            ElementType::Fire => "fire",
            ElementType::Water => "water",
            ElementType::Electric => "electric",
            ElementType::Grass => "grass",
            ElementType::Ice => "ice",
            ElementType::Fighting => "fighting",
            ElementType::Poison => "poison",
            ElementType::Ground => "ground",
            ElementType::Flying => "flying",
            ElementType::Psychic => "psychic",
            ElementType::Bug => "bug",
            ElementType::Rock => "rock",
            ElementType::Ghost => "ghost",
            ElementType::Dragon => "dragon",
            ElementType::Dark => "dark",
            ElementType::Steel => "steel",
            ElementType::Fairy => "fairy",
        }
    }
}

impl FromStr for ElementType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownTypeError(s.to_string()))
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ElementType::from_name("Fire"), Some(ElementType::Fire));
        assert_eq!(ElementType::from_name("fire"), Some(ElementType::Fire));
        assert_eq!(ElementType::from_name("FIRE"), Some(ElementType::Fire));
        assert_eq!(ElementType::from_name(" psychic\n"), Some(ElementType::Psychic));
        assert_eq!(ElementType::from_name("plasma"), None);
        assert_eq!(ElementType::from_name(""), None);
    }

    #[test]
    fn test_from_str_error_keeps_input() {
        let err = "Plasma".parse::<ElementType>().unwrap_err();
        assert_eq!(err, UnknownTypeError("Plasma".to_string()));
    }

    #[test]
    fn test_name_roundtrip_all() {
        for t in ElementType::all() {
            assert_eq!(ElementType::from_name(t.as_str()), Some(*t));
            assert_eq!(t.to_string(), t.as_str());
        }
    }

    #[test]
    fn test_all_types() {
        assert_eq!(ElementType::all().len(), 18);
        assert_eq!(ElementType::all()[0], ElementType::Normal);
        assert_eq!(ElementType::all()[17], ElementType::Fairy);
        for (i, t) in ElementType::all().iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ElementType::Electric).unwrap();
        assert_eq!(json, "\"electric\"");
        let back: ElementType = serde_json::from_str("\"dragon\"").unwrap();
        assert_eq!(back, ElementType::Dragon);
    }
}
