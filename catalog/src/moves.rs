//! `move`, `ability` and `item` documents

use serde::Deserialize;

use crate::{FlavorText, LocalizedName, NamedResource};

/// A `move/{name-or-id}` document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Move {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub names: Vec<LocalizedName>,

    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,

    pub generation: Option<NamedResource>,

    #[serde(rename = "type")]
    pub kind: Option<NamedResource>,

    pub damage_class: Option<NamedResource>,

    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
}

/// An `ability/{name-or-id}` document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub names: Vec<LocalizedName>,

    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

/// An `item/{name-or-id}` document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub names: Vec<LocalizedName>,

    #[serde(default)]
    pub sprites: ItemSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemSprites {
    #[serde(rename = "default")]
    pub icon: Option<String>,
}
