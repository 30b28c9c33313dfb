//! Resolved weaknesses of a type combination

use crate::error::UnresolvedTypeError;
use crate::types::ElementType;

/// Damage marker for a weakness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Multiplier {
    /// Super effective against one of the types
    Normal,
    /// Super effective against both types
    Double,
}

impl Multiplier {
    /// Marker factor: 1 for a single weakness, 2 for a stacked one
    pub fn factor(&self) -> u8 {
        match self {
            Multiplier::Normal => 1,
            Multiplier::Double => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Multiplier::Normal => "1x",
            Multiplier::Double => "2x",
        }
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weakness {
    pub attacker: ElementType,
    pub multiplier: Multiplier,
}

/// Weaknesses sorted by attacker name, each attacker at most once.
///
/// `unresolved` lists attacking names from the relation source that are not
/// canonical types. They never appear in `entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessResult {
    pub entries: Vec<Weakness>,
    pub unresolved: Vec<UnresolvedTypeError>,
}

impl EffectivenessResult {
    pub fn get(&self, attacker: ElementType) -> Option<Multiplier> {
        self.entries
            .iter()
            .find(|w| w.attacker == attacker)
            .map(|w| w.multiplier)
    }

    pub fn contains(&self, attacker: ElementType) -> bool {
        self.get(attacker).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Weakness> {
        self.entries.iter()
    }

    /// Attackers with a stacked weakness
    pub fn doubles(&self) -> Vec<ElementType> {
        self.with_multiplier(Multiplier::Double)
    }

    pub fn singles(&self) -> Vec<ElementType> {
        self.with_multiplier(Multiplier::Normal)
    }

    fn with_multiplier(&self, multiplier: Multiplier) -> Vec<ElementType> {
        self.entries
            .iter()
            .filter(|w| w.multiplier == multiplier)
            .map(|w| w.attacker)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_unresolved(&self) -> bool {
        !self.unresolved.is_empty()
    }
}

impl<'a> IntoIterator for &'a EffectivenessResult {
    type Item = &'a Weakness;
    type IntoIter = std::slice::Iter<'a, Weakness>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
