//! `type/{name-or-id}` documents

use serde::Deserialize;

use crate::{LocalizedName, NamedResource};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeResource {
    pub id: u32,
    pub name: String,

    /// Absent on a few synthetic types; treated as "no relations"
    #[serde(default)]
    pub damage_relations: Option<DamageRelations>,

    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

/// Damage relations of one type, offense (`*_to`) and defense (`*_from`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}
