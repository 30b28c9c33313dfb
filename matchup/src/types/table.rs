//! Defensive type table

use super::ElementType;
use super::ElementType::*;
use crate::error::UnknownTypeError;

/// What one defending type is weak to, resists, and is immune to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeProfile {
    pub defender: ElementType,
    /// Attacking types that deal double damage
    pub weak_to: &'static [ElementType],
    /// Attacking types that deal half damage
    pub resists: &'static [ElementType],
    /// Attacking types that deal no damage
    pub immune_to: &'static [ElementType],
}

impl TypeProfile {
    const fn new(
        defender: ElementType,
        weak_to: &'static [ElementType],
        resists: &'static [ElementType],
        immune_to: &'static [ElementType],
    ) -> Self {
        Self {
            defender,
            weak_to,
            resists,
            immune_to,
        }
    }
}

/// One row per defending type, indexed by [`ElementType::index`]
#[rustfmt::skip]
pub static TYPE_TABLE: [TypeProfile; 18] = [
    TypeProfile::new(Normal,   &[Fighting], &[], &[Ghost]),
    TypeProfile::new(Fire,     &[Water, Ground, Rock], &[Fire, Grass, Ice, Bug, Steel, Fairy], &[]),
    TypeProfile::new(Water,    &[Electric, Grass], &[Fire, Water, Ice, Steel], &[]),
    TypeProfile::new(Electric, &[Ground], &[Electric, Flying, Steel], &[]),
    TypeProfile::new(Grass,    &[Fire, Ice, Poison, Flying, Bug], &[Water, Electric, Grass, Ground], &[]),
    TypeProfile::new(Ice,      &[Fire, Fighting, Rock, Steel], &[], &[]),
    TypeProfile::new(Fighting, &[Flying, Psychic, Fairy], &[Bug, Rock, Dark], &[]),
    TypeProfile::new(Poison,   &[Ground, Psychic], &[Grass, Fighting, Poison, Bug, Fairy], &[]),
    TypeProfile::new(Ground,   &[Water, Grass, Ice], &[Poison, Rock], &[Electric]),
    TypeProfile::new(Flying,   &[Electric, Ice, Rock], &[Grass, Bug], &[Ground]),
    TypeProfile::new(Psychic,  &[Bug, Ghost, Dark], &[Fighting, Psychic], &[]),
    TypeProfile::new(Bug,      &[Fire, Flying, Rock], &[Grass, Fighting, Ground], &[]),
    TypeProfile::new(Rock,     &[Water, Grass, Fighting, Ground, Steel], &[Normal, Fire, Poison, Flying], &[]),
    TypeProfile::new(Ghost,    &[Ghost, Dark], &[Poison, Bug], &[Normal, Fighting]),
    TypeProfile::new(Dragon,   &[Ice, Dragon, Fairy], &[Fire, Water, Electric, Grass], &[]),
    TypeProfile::new(Dark,     &[Fighting, Bug, Fairy], &[Ghost, Dark], &[Psychic]),
    TypeProfile::new(Steel,    &[Fire, Fighting, Ground], &[Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy], &[Poison]),
    TypeProfile::new(Fairy,    &[Poison, Steel], &[Fighting, Bug, Dark], &[Dragon]),
];

/// Read-only access to [`TYPE_TABLE`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectivenessTable;

impl EffectivenessTable {
    /// Profile for a canonical type
    pub fn profile(defender: ElementType) -> &'static TypeProfile {
        &TYPE_TABLE[defender.index()]
    }

    /// Profile for a type name, failing on anything outside the 18 canonical names
    pub fn lookup(name: &str) -> Result<&'static TypeProfile, UnknownTypeError> {
        let defender: ElementType = name.parse()?;
        Ok(Self::profile(defender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Attacking chart. Row = attacker, column = defender, same order as `ElementType::ALL`.
    #[rustfmt::skip]
    const CHART: [[f32; 18]; 18] = [
        [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
        [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
        [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
        [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
        [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
        [1.0, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
        [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
        [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
        [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
        [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
        [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
        [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
        [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
        [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
        [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
        [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
        [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
        [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
    ];

    #[test]
    fn test_rows_indexed_by_defender() {
        for t in ElementType::all() {
            assert_eq!(EffectivenessTable::profile(*t).defender, *t);
        }
    }

    #[test]
    fn test_rows_match_chart() {
        for defender in ElementType::all() {
            let profile = EffectivenessTable::profile(*defender);
            for attacker in ElementType::all() {
                let expected = CHART[attacker.index()][defender.index()];
                let actual = if profile.weak_to.contains(attacker) {
                    2.0
                } else if profile.resists.contains(attacker) {
                    0.5
                } else if profile.immune_to.contains(attacker) {
                    0.0
                } else {
                    1.0
                };
                assert_eq!(actual, expected, "{attacker} attacking {defender}");
            }
        }
    }

    #[test]
    fn test_sets_are_disjoint() {
        for profile in &TYPE_TABLE {
            for t in profile.weak_to {
                assert!(!profile.resists.contains(t), "{} weak to and resists {t}", profile.defender);
                assert!(!profile.immune_to.contains(t), "{} weak to and immune to {t}", profile.defender);
            }
            for t in profile.resists {
                assert!(!profile.immune_to.contains(t), "{} resists and immune to {t}", profile.defender);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let fire = EffectivenessTable::lookup("fire").unwrap();
        assert_eq!(fire.weak_to, &[Water, Ground, Rock]);

        let ghost = EffectivenessTable::lookup("Ghost").unwrap();
        assert_eq!(ghost.immune_to, &[Normal, Fighting]);
    }

    #[test]
    fn test_ice_and_flying_rows() {
        let ice = EffectivenessTable::profile(Ice);
        assert!(ice.resists.is_empty());

        let flying = EffectivenessTable::profile(Flying);
        assert_eq!(flying.resists, &[Grass, Bug]);
        assert!(!flying.resists.contains(&Fighting));
    }

    #[test]
    fn test_lookup_unknown() {
        let err = EffectivenessTable::lookup("plasma").unwrap_err();
        assert_eq!(err, UnknownTypeError("plasma".to_string()));
    }
}
