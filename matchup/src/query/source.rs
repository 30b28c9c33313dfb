//! Where the resolver reads per-type relations from

use std::collections::HashMap;

use crate::types::{EffectivenessTable, ElementType, TypeProfile};

/// Attacking type names that hit one defending type for double, half, or no damage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations<'a> {
    pub weak_to: Vec<&'a str>,
    pub resists: Vec<&'a str>,
    pub immune_to: Vec<&'a str>,
}

impl Relations<'static> {
    pub fn from_profile(profile: &'static TypeProfile) -> Self {
        Self {
            weak_to: profile.weak_to.iter().map(ElementType::as_str).collect(),
            resists: profile.resists.iter().map(ElementType::as_str).collect(),
            immune_to: profile.immune_to.iter().map(ElementType::as_str).collect(),
        }
    }
}

impl<'a> Relations<'a> {
    /// Every name across the three sets
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.weak_to
            .iter()
            .chain(&self.resists)
            .chain(&self.immune_to)
            .copied()
    }
}

/// Supplies damage relations for a defending type.
pub trait RelationSource {
    fn relations(&self, defender: ElementType) -> Relations<'_>;
}

impl RelationSource for EffectivenessTable {
    fn relations(&self, defender: ElementType) -> Relations<'_> {
        Relations::from_profile(EffectivenessTable::profile(defender))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct OwnedRelations {
    weak_to: Vec<String>,
    resists: Vec<String>,
    immune_to: Vec<String>,
}

/// Relations supplied as raw names by an external data source.
///
/// Names are trimmed and lowercased on insert but otherwise kept as given,
/// so malformed upstream entries reach the resolver and get reported there.
/// A defender with no row has no relations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamRelations {
    rows: HashMap<ElementType, OwnedRelations>,
}

impl UpstreamRelations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<W, R, I>(&mut self, defender: ElementType, weak_to: W, resists: R, immune_to: I)
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.rows.insert(
            defender,
            OwnedRelations {
                weak_to: normalize(weak_to),
                resists: normalize(resists),
                immune_to: normalize(immune_to),
            },
        );
    }

    pub fn contains(&self, defender: ElementType) -> bool {
        self.rows.contains_key(&defender)
    }
}

fn normalize<T>(names: T) -> Vec<String>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_lowercase())
        .collect()
}

impl RelationSource for UpstreamRelations {
    fn relations(&self, defender: ElementType) -> Relations<'_> {
        match self.rows.get(&defender) {
            Some(row) => Relations {
                weak_to: row.weak_to.iter().map(String::as_str).collect(),
                resists: row.resists.iter().map(String::as_str).collect(),
                immune_to: row.immune_to.iter().map(String::as_str).collect(),
            },
            None => Relations::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_relations() {
        let relations = EffectivenessTable.relations(ElementType::Ground);
        assert_eq!(relations.weak_to, vec!["water", "grass", "ice"]);
        assert_eq!(relations.resists, vec!["poison", "rock"]);
        assert_eq!(relations.immune_to, vec!["electric"]);
    }

    #[test]
    fn test_upstream_normalizes_names() {
        let mut upstream = UpstreamRelations::new();
        upstream.insert(ElementType::Fire, ["Water", " ground "], ["fire"], Vec::<String>::new());

        let relations = upstream.relations(ElementType::Fire);
        assert_eq!(relations.weak_to, vec!["water", "ground"]);
        assert_eq!(relations.resists, vec!["fire"]);
        assert!(relations.immune_to.is_empty());
    }

    #[test]
    fn test_upstream_missing_row_is_empty() {
        let upstream = UpstreamRelations::new();
        assert!(!upstream.contains(ElementType::Fire));
        assert_eq!(upstream.relations(ElementType::Fire), Relations::default());
    }
}
