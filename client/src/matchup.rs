use futures_util::future::{join_all, try_join_all};
use pokedex_catalog::Pokemon;
use pokedex_core::{
    MAX_OWN_TYPES, Matchups, Type, TypeChart, TypeRelation, defensive_matchups, offensive_matchups,
};

use crate::{PokedexClient, Result};

/// Offensive and defensive multipliers for one pokemon
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonMatchups {
    /// Own types in slot order, at most two
    pub types: Vec<Type>,
    /// Best multiplier any own type deals to each target
    pub offense: Matchups,
    /// Multiplier each attacker deals to this pokemon
    pub defense: Matchups,
}

impl PokemonMatchups {
    pub fn from_relations(relations: &[TypeRelation]) -> Self {
        Self {
            types: relations.iter().map(|r| r.kind).collect(),
            offense: offensive_matchups(relations),
            defense: defensive_matchups(relations),
        }
    }
}

impl PokedexClient {
    /// Fetch the relations of each named type concurrently
    ///
    /// A type that fails to load counts as neutral. Names outside the
    /// canonical 18 are skipped.
    pub async fn type_relations(&self, names: &[&str]) -> Vec<TypeRelation> {
        let fetches = names.iter().map(|name| async move {
            match self.type_resource(name).await {
                Ok(resource) => {
                    let relation = TypeRelation::from_resource(&resource);
                    if relation.is_none() {
                        tracing::warn!(type_name = %name, "Skipping non-canonical type");
                    }
                    relation
                }
                Err(e) => {
                    tracing::warn!(type_name = %name, error = %e, "Type lookup failed, treating as neutral");
                    Type::from_api_name(name).map(TypeRelation::neutral)
                }
            }
        });
        join_all(fetches).await.into_iter().flatten().collect()
    }

    /// Offense and defense for `pokemon`'s own types
    pub async fn matchups(&self, pokemon: &Pokemon) -> PokemonMatchups {
        let names: Vec<&str> = pokemon.type_names().into_iter().take(MAX_OWN_TYPES).collect();
        let relations = self.type_relations(&names).await;
        PokemonMatchups::from_relations(&relations)
    }

    /// The full attacker × defender chart from live catalog data
    ///
    /// Unlike [`type_relations`](Self::type_relations) this fails if any of
    /// the 18 types cannot be loaded.
    pub async fn full_type_chart(&self) -> Result<TypeChart> {
        let resources =
            try_join_all(Type::ALL.iter().map(|t| self.type_resource(t.api_name()))).await?;
        let relations: Vec<TypeRelation> =
            resources.iter().filter_map(TypeRelation::from_resource).collect();
        Ok(TypeChart::from_relations(&relations))
    }
}
