//! Wire types for the PokeAPI v2 catalog.
//!
//! Every struct here mirrors the JSON the catalog returns, keeping only the
//! fields the rest of the workspace reads. Fields the catalog may omit carry
//! `#[serde(default)]` so a sparse document still decodes.

use thiserror::Error;

pub mod evolution;
pub mod list;
pub mod moves;
pub mod pokemon;
pub mod resource;
pub mod text;
pub mod types;

mod tests;

pub use evolution::{ChainLink, EvolutionChain, RawEvolutionDetail};
pub use list::ResourceList;
pub use moves::{Ability, Item, ItemSprites, Move};
pub use pokemon::{AbilitySlot, Artwork, OtherSprites, Pokemon, Species, Sprites, TypeSlot, Variety};
pub use resource::{NamedResource, UrlResource, generation_roman, resource_id};
pub use text::{FlavorText, LocalizedName, pick_effect, pick_flavor, pick_name};
pub use types::{DamageRelations, TypeResource};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid resource url: {0}")]
    InvalidResourceUrl(String),

    #[error("Malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode any catalog document from a JSON value
pub fn decode<T: serde::de::DeserializeOwned>(value: &serde_json::Value) -> Result<T, CatalogError> {
    Ok(T::deserialize(value)?)
}
