//! A creature's typing: one or two distinct types

use super::ElementType;
use crate::error::MatchupError;

/// An ordered combination of 1 or 2 distinct types.
///
/// Order does not affect resolution, it is kept so callers can display
/// primary and secondary type as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCombination {
    primary: ElementType,
    secondary: Option<ElementType>,
}

impl TypeCombination {
    pub fn single(primary: ElementType) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn dual(primary: ElementType, secondary: ElementType) -> Result<Self, MatchupError> {
        if primary == secondary {
            return Err(MatchupError::DuplicateType(primary));
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
        })
    }

    /// Build from an already-parsed list of types
    pub fn from_types(types: &[ElementType]) -> Result<Self, MatchupError> {
        match types {
            [] => Err(MatchupError::EmptyCombination),
            [primary] => Ok(Self::single(*primary)),
            [primary, secondary] => Self::dual(*primary, *secondary),
            _ => Err(MatchupError::TooManyTypes(types.len())),
        }
    }

    /// Build from type names, e.g. those extracted from an API response
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, MatchupError> {
        if names.len() > 2 {
            return Err(MatchupError::TooManyTypes(names.len()));
        }
        let types = names
            .iter()
            .map(|name| name.as_ref().parse::<ElementType>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_types(&types)
    }

    pub fn primary(&self) -> ElementType {
        self.primary
    }

    pub fn secondary(&self) -> Option<ElementType> {
        self.secondary
    }

    pub fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }

    pub fn contains(&self, t: ElementType) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    /// Types in their original order
    pub fn iter(&self) -> impl Iterator<Item = ElementType> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn len(&self) -> usize {
        if self.is_dual() { 2 } else { 1 }
    }
}

impl From<ElementType> for TypeCombination {
    fn from(t: ElementType) -> Self {
        Self::single(t)
    }
}

impl std::fmt::Display for TypeCombination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnknownTypeError;

    #[test]
    fn test_from_names_single() {
        let combo = TypeCombination::from_names(&["fire"]).unwrap();
        assert_eq!(combo.primary(), ElementType::Fire);
        assert_eq!(combo.secondary(), None);
        assert_eq!(combo.len(), 1);
    }

    #[test]
    fn test_from_names_keeps_order() {
        let combo = TypeCombination::from_names(&["Ice", "Flying"]).unwrap();
        let types: Vec<_> = combo.iter().collect();
        assert_eq!(types, vec![ElementType::Ice, ElementType::Flying]);
        assert_eq!(combo.to_string(), "ice/flying");
    }

    #[test]
    fn test_from_names_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(
            TypeCombination::from_names(&empty),
            Err(MatchupError::EmptyCombination)
        );
        assert_eq!(
            TypeCombination::from_names(&["fire", "water", "grass"]),
            Err(MatchupError::TooManyTypes(3))
        );
        assert_eq!(
            TypeCombination::from_names(&["fire", "FIRE"]),
            Err(MatchupError::DuplicateType(ElementType::Fire))
        );
        assert_eq!(
            TypeCombination::from_names(&["plasma"]),
            Err(MatchupError::UnknownType(UnknownTypeError("plasma".into())))
        );
    }

    #[test]
    fn test_contains() {
        let combo = TypeCombination::dual(ElementType::Water, ElementType::Ground).unwrap();
        assert!(combo.contains(ElementType::Ground));
        assert!(!combo.contains(ElementType::Grass));
        assert!(combo.is_dual());
    }
}
