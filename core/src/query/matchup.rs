//! Offensive and defensive matchups for a creature's own types

use std::collections::BTreeMap;

use crate::types::{Multiplier, Type, TypeRelation};

/// Most own types a creature can have; further relations are ignored
pub const MAX_OWN_TYPES: usize = 2;

/// One multiplier for each of the 18 types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchups {
    multipliers: [Multiplier; 18],
}

impl Matchups {
    fn from_fn(mut f: impl FnMut(Type) -> f32) -> Self {
        let mut multipliers = [Multiplier::Neutral; 18];
        for t in Type::ALL {
            multipliers[t.index()] = Multiplier::from_value(f(t)).unwrap_or(Multiplier::Neutral);
        }
        Self { multipliers }
    }

    pub fn get(&self, t: Type) -> Multiplier {
        self.multipliers[t.index()]
    }

    /// `(type, multiplier)` pairs in [`Type::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Type, Multiplier)> + '_ {
        Type::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    /// Types whose multiplier is exactly `m`
    pub fn bucket(&self, m: Multiplier) -> Vec<Type> {
        self.iter()
            .filter(|(_, value)| *value == m)
            .map(|(t, _)| t)
            .collect()
    }

    /// Non-empty buckets keyed by multiplier
    ///
    /// Every type appears in exactly one bucket.
    pub fn buckets(&self) -> BTreeMap<Multiplier, Vec<Type>> {
        let mut buckets: BTreeMap<Multiplier, Vec<Type>> = BTreeMap::new();
        for (t, m) in self.iter() {
            buckets.entry(m).or_default().push(t);
        }
        buckets
    }
}

/// Best multiplier any own type achieves attacking `target`
///
/// Models move coverage with same-type moves, not a simultaneous multi-type
/// attack. No own types is neutral.
pub fn offensive_multiplier(own: &[TypeRelation], target: Type) -> f32 {
    let own = &own[..own.len().min(MAX_OWN_TYPES)];
    if own.is_empty() {
        return 1.0;
    }
    own.iter()
        .map(|r| r.attack_multiplier(target))
        .fold(0.0, f32::max)
}

/// Multiplier taken from an `attacker` move, combining every own type
///
/// Immunity is absorbing: once any own type blocks the attacker the result
/// stays 0.
pub fn defensive_multiplier(own: &[TypeRelation], attacker: Type) -> f32 {
    let own = &own[..own.len().min(MAX_OWN_TYPES)];
    let mut product = 1.0;
    for relation in own {
        if relation.no_damage_from.contains(attacker) {
            return 0.0;
        }
        if relation.double_damage_from.contains(attacker) {
            product *= 2.0;
        }
        if relation.half_damage_from.contains(attacker) {
            product *= 0.5;
        }
    }
    product
}

/// Coverage of the creature's types against every type
pub fn offensive_matchups(own: &[TypeRelation]) -> Matchups {
    Matchups::from_fn(|target| offensive_multiplier(own, target))
}

/// Damage taken from every attacking type
pub fn defensive_matchups(own: &[TypeRelation]) -> Matchups {
    Matchups::from_fn(|attacker| defensive_multiplier(own, attacker))
}

/// Types that deal more than neutral damage to the creature
pub fn weaknesses(own: &[TypeRelation]) -> Vec<Type> {
    defensive_matchups(own)
        .iter()
        .filter(|(_, m)| m.is_super_effective())
        .map(|(t, _)| t)
        .collect()
}

/// Types the creature takes no damage from
pub fn immunities(own: &[TypeRelation]) -> Vec<Type> {
    defensive_matchups(own).bucket(Multiplier::Immune)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin(types: &[Type]) -> Vec<TypeRelation> {
        types.iter().map(|t| TypeRelation::builtin(*t)).collect()
    }

    #[test]
    fn test_ghost_normal_is_immune_to_normal() {
        let own = builtin(&[Type::Ghost, Type::Normal]);
        assert_eq!(defensive_multiplier(&own, Type::Normal), 0.0);
        assert_eq!(defensive_multiplier(&own, Type::Fighting), 0.0);
        assert_eq!(defensive_matchups(&own).get(Type::Ghost), Multiplier::Immune);
    }

    #[test]
    fn test_immunity_absorbs_later_weakness() {
        // Flying blocks Ground; the Steel weakness never applies
        let own = builtin(&[Type::Flying, Type::Steel]);
        assert_eq!(defensive_multiplier(&own, Type::Ground), 0.0);

        let reversed = builtin(&[Type::Steel, Type::Flying]);
        assert_eq!(defensive_multiplier(&reversed, Type::Ground), 0.0);
    }

    #[test]
    fn test_dual_type_defense_is_product() {
        for a in Type::ALL {
            for b in Type::ALL {
                let own = builtin(&[a, b]);
                for attacker in Type::ALL {
                    let single_a = defensive_multiplier(&own[..1], attacker);
                    let single_b = defensive_multiplier(&own[1..], attacker);
                    assert_eq!(defensive_multiplier(&own, attacker), single_a * single_b);
                }
            }
        }
    }

    #[test]
    fn test_defensive_quadruple_and_quarter() {
        // Grass/Steel (Ferrothorn) takes 4x from Fire
        let ferrothorn = builtin(&[Type::Grass, Type::Steel]);
        let defense = defensive_matchups(&ferrothorn);
        assert_eq!(defense.get(Type::Fire), Multiplier::Quadruple);
        assert_eq!(defense.get(Type::Grass), Multiplier::Quarter);
        assert_eq!(defense.get(Type::Poison), Multiplier::Immune);
    }

    #[test]
    fn test_offense_takes_best_own_type() {
        // Water/Ground hits Fire 2x, Flying 1x via Water, Grass resists both
        let swampert = builtin(&[Type::Water, Type::Ground]);
        let offense = offensive_matchups(&swampert);
        assert_eq!(offense.get(Type::Fire), Multiplier::Double);
        assert_eq!(offense.get(Type::Flying), Multiplier::Neutral);
        assert_eq!(offense.get(Type::Electric), Multiplier::Double);
        assert_eq!(offense.get(Type::Grass), Multiplier::Half);
    }

    #[test]
    fn test_offense_immunity_only_when_every_type_is_blocked() {
        let normal = builtin(&[Type::Normal]);
        assert_eq!(offensive_matchups(&normal).get(Type::Ghost), Multiplier::Immune);

        let normal_fighting = builtin(&[Type::Normal, Type::Fighting]);
        assert_eq!(offensive_matchups(&normal_fighting).get(Type::Ghost), Multiplier::Immune);

        let normal_dark = builtin(&[Type::Normal, Type::Dark]);
        assert_eq!(offensive_matchups(&normal_dark).get(Type::Ghost), Multiplier::Double);
    }

    #[test]
    fn test_multiplier_domains() {
        let offensive = [
            Multiplier::Immune,
            Multiplier::Half,
            Multiplier::Neutral,
            Multiplier::Double,
        ];
        for a in Type::ALL {
            for b in Type::ALL {
                let own = builtin(&[a, b]);
                for target in Type::ALL {
                    let off = Multiplier::from_value(offensive_multiplier(&own, target));
                    assert!(off.is_some_and(|m| offensive.contains(&m)));
                    assert!(Multiplier::from_value(defensive_multiplier(&own, target)).is_some());
                }
            }
        }
    }

    #[test]
    fn test_buckets_are_exhaustive_and_disjoint() {
        let own = builtin(&[Type::Fire, Type::Flying]);
        for matchups in [offensive_matchups(&own), defensive_matchups(&own)] {
            let buckets = matchups.buckets();
            let mut seen: Vec<Type> = buckets.values().flatten().copied().collect();
            assert_eq!(seen.len(), 18);
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 18);
            for (m, types) in &buckets {
                assert!(!types.is_empty());
                assert_eq!(&matchups.bucket(*m), types);
            }
        }
    }

    #[test]
    fn test_missing_relations_are_neutral() {
        let own = vec![TypeRelation::neutral(Type::Fire)];
        assert!(offensive_matchups(&own).iter().all(|(_, m)| m == Multiplier::Neutral));
        assert!(defensive_matchups(&own).iter().all(|(_, m)| m == Multiplier::Neutral));

        assert!(offensive_matchups(&[]).iter().all(|(_, m)| m == Multiplier::Neutral));
        assert!(defensive_matchups(&[]).iter().all(|(_, m)| m == Multiplier::Neutral));
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground (Swampert) is only weak to Grass (4x)
        let swampert = builtin(&[Type::Water, Type::Ground]);
        assert_eq!(weaknesses(&swampert), vec![Type::Grass]);
    }

    #[test]
    fn test_immunities() {
        let ghost = builtin(&[Type::Ghost]);
        assert_eq!(immunities(&ghost), vec![Type::Normal, Type::Fighting]);
    }
}
