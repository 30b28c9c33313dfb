//! Weakness resolution for one or two defending types

use tracing::debug;

use super::result::{EffectivenessResult, Multiplier, Weakness};
use super::source::RelationSource;
use super::tally::Tally;
use crate::error::{MatchupError, UnresolvedTypeError};
use crate::types::{EffectivenessTable, ElementType, TypeCombination};

/// Combines the relations of every type in a combination into one weakness list.
///
/// Resistances and immunities from either type each cancel one occurrence of
/// a weakness, so a weakness of one type resisted by the other is dropped
/// entirely. What remains twice is a double weakness.
pub struct Resolver<'s, S: RelationSource + ?Sized> {
    source: &'s S,
}

impl<'s, S: RelationSource + ?Sized> Resolver<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self { source }
    }

    pub fn resolve(&self, combo: &TypeCombination) -> EffectivenessResult {
        let mut weaknesses = Tally::new();
        let mut resistances = Tally::new();
        let mut immunities = Tally::new();
        let mut unresolved = Vec::new();

        for defender in combo.iter() {
            let relations = self.source.relations(defender);

            for name in relations.names() {
                if ElementType::from_name(name).is_none() {
                    unresolved.push(UnresolvedTypeError {
                        defender,
                        name: name.to_string(),
                    });
                }
            }

            weaknesses.extend(relations.weak_to);
            resistances.extend(relations.resists);
            immunities.extend(relations.immune_to);
        }

        weaknesses.cancel(&resistances);
        weaknesses.cancel(&immunities);

        // Tally iterates in name order, which is the display order.
        let entries = weaknesses
            .iter()
            .filter_map(|(name, count)| {
                let attacker = ElementType::from_name(name)?;
                let multiplier = if count >= 2 {
                    Multiplier::Double
                } else {
                    Multiplier::Normal
                };
                Some(Weakness {
                    attacker,
                    multiplier,
                })
            })
            .collect();

        let result = EffectivenessResult {
            entries,
            unresolved,
        };
        debug!(
            combo = %combo,
            weaknesses = result.len(),
            unresolved = result.unresolved.len(),
            "resolved weaknesses"
        );
        result
    }
}

/// Resolve against the compiled-in type table
pub fn resolve(combo: &TypeCombination) -> EffectivenessResult {
    Resolver::new(&EffectivenessTable).resolve(combo)
}

/// Parse 1-2 type names and resolve them against the compiled-in type table
pub fn resolve_names<S: AsRef<str>>(names: &[S]) -> Result<EffectivenessResult, MatchupError> {
    let combo = TypeCombination::from_names(names)?;
    Ok(resolve(&combo))
}
