use futures_util::future::join_all;
use pokedex_catalog::{Pokemon, Species, generation_roman, pick_effect, pick_flavor, pick_name};

use crate::{EvolutionView, PokedexClient, PokemonMatchups, Result};

/// Localized name and effect of one of a pokemon's abilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityInfo {
    pub name: String,
    pub localized_name: String,
    pub effect: String,
    pub is_hidden: bool,
}

/// Everything shown on a pokemon's page
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub pokemon: Pokemon,
    pub species: Species,
    pub localized_name: String,
    pub flavor: String,
    /// Roman numeral, empty when the species has no generation
    pub generation: String,
    pub matchups: PokemonMatchups,
    pub abilities: Vec<AbilityInfo>,
    pub evolution: EvolutionView,
}

impl PokedexClient {
    /// Localized details of every ability `pokemon` can have, in slot order
    ///
    /// Abilities that fail to load are left out.
    pub async fn abilities(&self, pokemon: &Pokemon) -> Vec<AbilityInfo> {
        let lang = self.language();
        let fetches = pokemon.abilities.iter().map(|slot| async move {
            let name = slot.ability.name.as_str();
            match self.ability(name).await {
                Ok(ability) => Some(AbilityInfo {
                    name: name.to_string(),
                    localized_name: pick_name(&ability.names, lang, name).to_string(),
                    effect: pick_effect(&ability.flavor_text_entries, lang),
                    is_hidden: slot.is_hidden,
                }),
                Err(e) => {
                    tracing::warn!(ability = %name, error = %e, "Omitting ability");
                    None
                }
            }
        });
        join_all(fetches).await.into_iter().flatten().collect()
    }

    /// Load a pokemon with its species text, matchups, abilities and
    /// evolution chain
    ///
    /// Only the pokemon and species lookups can fail; the rest degrades.
    pub async fn profile(&self, query: &str) -> Result<Profile> {
        let pokemon = self.pokemon_smart(query).await?;
        let species_name = match &pokemon.species {
            Some(species) => species.name.clone(),
            None => pokemon.id.to_string(),
        };

        let (species, matchups, abilities) = futures_util::join!(
            self.species(&species_name),
            self.matchups(&pokemon),
            self.abilities(&pokemon),
        );
        let species = species?;
        let evolution = match self.evolution(&species).await {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!(species = %species.name, error = %e, "Evolution chain unavailable");
                EvolutionView::default()
            }
        };

        let lang = self.language();
        Ok(Profile {
            localized_name: pick_name(&species.names, lang, &species.name).to_string(),
            flavor: pick_flavor(&species.flavor_text_entries, lang),
            generation: species
                .generation
                .as_ref()
                .map(|g| generation_roman(&g.name))
                .unwrap_or_default(),
            matchups,
            abilities,
            evolution,
            pokemon,
            species,
        })
    }
}
