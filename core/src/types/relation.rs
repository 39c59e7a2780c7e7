//! Per-type damage relations

use pokedex_catalog::{DamageRelations, NamedResource, TypeResource};

use super::pokemon_type::Type;

/// A set of [`Type`]s, stored as a bitmask over [`Type::ALL`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeSet(u32);

impl TypeSet {
    pub const fn new() -> Self {
        TypeSet(0)
    }

    pub fn insert(&mut self, t: Type) {
        self.0 |= 1 << t.index();
    }

    pub fn contains(&self, t: Type) -> bool {
        self.0 & (1 << t.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in [`Type::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = Type> + '_ {
        Type::ALL.into_iter().filter(|t| self.contains(*t))
    }
}

impl FromIterator<Type> for TypeSet {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        let mut set = TypeSet::new();
        for t in iter {
            set.insert(t);
        }
        set
    }
}

/// Damage relations of one elemental type
///
/// Offense (`*_to`): how this type's attacks fare against others.
/// Defense (`*_from`): how attacks of other types fare against this type.
/// An empty relation is neutral in every direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRelation {
    pub kind: Type,
    pub double_damage_to: TypeSet,
    pub half_damage_to: TypeSet,
    pub no_damage_to: TypeSet,
    pub double_damage_from: TypeSet,
    pub half_damage_from: TypeSet,
    pub no_damage_from: TypeSet,
}

impl TypeRelation {
    /// A relation with no entries (neutral to and from everything)
    pub fn neutral(kind: Type) -> Self {
        Self {
            kind,
            double_damage_to: TypeSet::new(),
            half_damage_to: TypeSet::new(),
            no_damage_to: TypeSet::new(),
            double_damage_from: TypeSet::new(),
            half_damage_from: TypeSet::new(),
            no_damage_from: TypeSet::new(),
        }
    }

    /// Decode the relations of a catalog type document
    ///
    /// Returns `None` for types outside the canonical 18. A document without
    /// `damage_relations` decodes to a neutral relation, and type names the
    /// canonical set does not know are dropped.
    pub fn from_resource(resource: &TypeResource) -> Option<Self> {
        let kind = Type::from_api_name(&resource.name)?;
        Some(match &resource.damage_relations {
            Some(relations) => Self::from_damage_relations(kind, relations),
            None => Self::neutral(kind),
        })
    }

    pub fn from_damage_relations(kind: Type, relations: &DamageRelations) -> Self {
        Self {
            kind,
            double_damage_to: type_set(&relations.double_damage_to),
            half_damage_to: type_set(&relations.half_damage_to),
            no_damage_to: type_set(&relations.no_damage_to),
            double_damage_from: type_set(&relations.double_damage_from),
            half_damage_from: type_set(&relations.half_damage_from),
            no_damage_from: type_set(&relations.no_damage_from),
        }
    }

    /// Relations derived from the built-in chart
    pub fn builtin(kind: Type) -> Self {
        let mut relation = Self::neutral(kind);
        for other in Type::ALL {
            match kind.effectiveness(other) {
                v if v == 0.0 => relation.no_damage_to.insert(other),
                v if v == 0.5 => relation.half_damage_to.insert(other),
                v if v == 2.0 => relation.double_damage_to.insert(other),
                _ => {}
            }
            match other.effectiveness(kind) {
                v if v == 0.0 => relation.no_damage_from.insert(other),
                v if v == 0.5 => relation.half_damage_from.insert(other),
                v if v == 2.0 => relation.double_damage_from.insert(other),
                _ => {}
            }
        }
        relation
    }

    /// Multiplier this type's attacks deal to `defender`
    ///
    /// An entry in several offense sets resolves as `half` over `double` over
    /// `none`.
    pub fn attack_multiplier(&self, defender: Type) -> f32 {
        if self.half_damage_to.contains(defender) {
            0.5
        } else if self.double_damage_to.contains(defender) {
            2.0
        } else if self.no_damage_to.contains(defender) {
            0.0
        } else {
            1.0
        }
    }
}

fn type_set(resources: &[NamedResource]) -> TypeSet {
    resources
        .iter()
        .filter_map(|r| Type::from_api_name(&r.name))
        .collect()
}
