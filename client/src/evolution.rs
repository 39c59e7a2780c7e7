use std::collections::HashMap;

use futures_util::future::join_all;
use pokedex_catalog::{Species, pick_name};
use pokedex_core::{EvolutionEdge, EvolutionTree};

use crate::{PokedexClient, Result};

/// An evolution tree with the display data needed to render it
///
/// Lookups are best-effort: a species or item that failed to load is simply
/// absent from the maps, and the accessors fall back to api names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvolutionView {
    pub tree: EvolutionTree,
    /// Species api name → localized name
    pub names: HashMap<String, String>,
    /// Species api name → sprite url
    pub sprites: HashMap<String, String>,
    /// Item api name → localized name
    pub items: HashMap<String, String>,
    /// Item api name → icon url
    pub item_icons: HashMap<String, String>,
}

impl EvolutionView {
    pub fn display_name<'a>(&'a self, species: &'a str) -> &'a str {
        self.names.get(species).map(String::as_str).unwrap_or(species)
    }

    pub fn sprite(&self, species: &str) -> Option<&str> {
        self.sprites.get(species).map(String::as_str)
    }

    pub fn item_icon(&self, item: &str) -> Option<&str> {
        self.item_icons.get(item).map(String::as_str)
    }

    /// Localized condition text for an edge of [`tree`](Self::tree)
    pub fn describe_edge(&self, edge: &EvolutionEdge) -> String {
        edge.describe(&self.items)
    }
}

struct SpeciesDisplay {
    name: String,
    localized: Option<String>,
    sprite: Option<String>,
}

struct ItemDisplay {
    name: String,
    localized: String,
    icon: Option<String>,
}

impl PokedexClient {
    /// Load the evolution chain `species` belongs to
    ///
    /// A species without a chain yields an empty view.
    pub async fn evolution(&self, species: &Species) -> Result<EvolutionView> {
        let Some(link) = &species.evolution_chain else {
            return Ok(EvolutionView::default());
        };
        let chain = self.evolution_chain(&link.url).await?;
        let tree = EvolutionTree::from_chain(&chain);

        let species_names = tree.species_names();
        let item_names = tree.item_names();
        let (species, items) = futures_util::join!(
            join_all(species_names.iter().map(|name| self.species_display(name))),
            join_all(item_names.iter().map(|name| self.item_display(name))),
        );

        let mut view = EvolutionView {
            tree,
            ..Default::default()
        };
        for s in species.into_iter().flatten() {
            if let Some(sprite) = s.sprite {
                view.sprites.insert(s.name.clone(), sprite);
            }
            if let Some(localized) = s.localized {
                view.names.insert(s.name, localized);
            }
        }
        for item in items.into_iter().flatten() {
            if let Some(icon) = item.icon {
                view.item_icons.insert(item.name.clone(), icon);
            }
            view.items.insert(item.name, item.localized);
        }
        Ok(view)
    }

    async fn species_display(&self, name: &str) -> Option<SpeciesDisplay> {
        let pokemon = match self.pokemon_smart(name).await {
            Ok(pokemon) => pokemon,
            Err(e) => {
                tracing::warn!(species = %name, error = %e, "Omitting evolution member");
                return None;
            }
        };
        let sprite = pokemon.sprites.best().map(str::to_string);

        let species_name = pokemon.species.as_ref().map_or(name, |s| s.name.as_str());
        let localized = match self.species(species_name).await {
            Ok(species) => Some(pick_name(&species.names, self.language(), &species.name).to_string()),
            Err(e) => {
                tracing::warn!(species = %name, error = %e, "No localized species name");
                None
            }
        };

        Some(SpeciesDisplay {
            name: name.to_string(),
            localized,
            sprite,
        })
    }

    async fn item_display(&self, name: &str) -> Option<ItemDisplay> {
        match self.item(name).await {
            Ok(item) => Some(ItemDisplay {
                name: name.to_string(),
                localized: pick_name(&item.names, self.language(), &item.name).to_string(),
                icon: item.sprites.icon.clone(),
            }),
            Err(e) => {
                tracing::warn!(item = %name, error = %e, "Omitting evolution item");
                None
            }
        }
    }
}
