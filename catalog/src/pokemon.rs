//! `pokemon` and `pokemon-species` documents

use serde::Deserialize;

use crate::{FlavorText, LocalizedName, NamedResource, UrlResource};

/// A `pokemon/{name-or-id}` document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,

    #[serde(default)]
    pub types: Vec<TypeSlot>,

    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,

    #[serde(default)]
    pub sprites: Sprites,

    /// Link back to the species this form belongs to
    pub species: Option<NamedResource>,
}

impl Pokemon {
    /// Type names ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.kind.name.as_str()).collect()
    }

    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().map(|a| a.ability.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

impl Sprites {
    /// Front sprite, falling back to the official artwork
    pub fn best(&self) -> Option<&str> {
        self.front_default.as_deref().or_else(|| {
            self.other
                .as_ref()?
                .official_artwork
                .as_ref()?
                .front_default
                .as_deref()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

/// A `pokemon-species/{name-or-id}` document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub names: Vec<LocalizedName>,

    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,

    #[serde(default)]
    pub varieties: Vec<Variety>,

    pub evolution_chain: Option<UrlResource>,

    pub generation: Option<NamedResource>,
}

impl Species {
    /// Name of the pokemon form flagged as the species default
    pub fn default_variety(&self) -> Option<&str> {
        self.varieties
            .iter()
            .find(|v| v.is_default)
            .map(|v| v.pokemon.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variety {
    #[serde(default)]
    pub is_default: bool,
    pub pokemon: NamedResource,
}
