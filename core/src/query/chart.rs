//! Full attacker × defender chart

use crate::types::{Multiplier, TYPE_CHART, Type, TypeRelation};

/// 18x18 effectiveness grid, row = attacker, column = defender
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    grid: [[f32; 18]; 18],
}

impl TypeChart {
    /// The Gen 6+ chart bundled with the crate
    pub fn builtin() -> Self {
        Self { grid: TYPE_CHART }
    }

    /// Build the chart from fetched relations
    ///
    /// Attackers without a relation are neutral against everything. Within a
    /// relation, `none` wins over `double`, which wins over `half`.
    pub fn from_relations(relations: &[TypeRelation]) -> Self {
        let mut grid = [[1.0; 18]; 18];
        for relation in relations {
            let row = &mut grid[relation.kind.index()];
            for defender in Type::ALL {
                row[defender.index()] = if relation.no_damage_to.contains(defender) {
                    0.0
                } else if relation.double_damage_to.contains(defender) {
                    2.0
                } else if relation.half_damage_to.contains(defender) {
                    0.5
                } else {
                    1.0
                };
            }
        }
        Self { grid }
    }

    pub fn value(&self, attacker: Type, defender: Type) -> f32 {
        self.grid[attacker.index()][defender.index()]
    }

    pub fn get(&self, attacker: Type, defender: Type) -> Multiplier {
        Multiplier::from_value(self.value(attacker, defender)).unwrap_or(Multiplier::Neutral)
    }

    /// One attacker's row, in [`Type::ALL`] order
    pub fn row(&self, attacker: Type) -> [Multiplier; 18] {
        Type::ALL.map(|defender| self.get(attacker, defender))
    }

    /// One defender's column, in [`Type::ALL`] order
    pub fn column(&self, defender: Type) -> [Multiplier; 18] {
        Type::ALL.map(|attacker| self.get(attacker, defender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_builtin_relations_matches_builtin_chart() {
        let relations: Vec<TypeRelation> = Type::ALL.iter().map(|t| TypeRelation::builtin(*t)).collect();
        assert_eq!(TypeChart::from_relations(&relations), TypeChart::builtin());
    }

    #[test]
    fn test_missing_attacker_is_neutral() {
        let chart = TypeChart::from_relations(&[TypeRelation::builtin(Type::Electric)]);
        assert_eq!(chart.get(Type::Electric, Type::Ground), Multiplier::Immune);
        assert_eq!(chart.get(Type::Electric, Type::Water), Multiplier::Double);
        assert_eq!(chart.get(Type::Normal, Type::Ghost), Multiplier::Neutral);
    }

    #[test]
    fn test_row_and_column() {
        let chart = TypeChart::builtin();
        let dragon = chart.row(Type::Dragon);
        assert_eq!(dragon[Type::Dragon.index()], Multiplier::Double);
        assert_eq!(dragon[Type::Fairy.index()], Multiplier::Immune);

        let ghost = chart.column(Type::Ghost);
        assert_eq!(ghost[Type::Normal.index()], Multiplier::Immune);
        assert_eq!(ghost[Type::Dark.index()], Multiplier::Double);
    }
}
