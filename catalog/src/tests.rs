#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        ChainLink, EvolutionChain, Pokemon, Species, TypeResource, decode, generation_roman,
        pick_effect, pick_flavor, pick_name, resource_id,
    };

    #[test]
    fn test_resource_id() {
        assert_eq!(resource_id("https://pokeapi.co/api/v2/pokemon/25/").unwrap(), 25);
        assert_eq!(resource_id("https://pokeapi.co/api/v2/evolution-chain/67").unwrap(), 67);
        assert!(resource_id("https://pokeapi.co/api/v2/pokemon/").is_err());
    }

    #[test]
    fn test_generation_roman() {
        assert_eq!(generation_roman("generation-i"), "I");
        assert_eq!(generation_roman("generation-viii"), "VIII");
        assert_eq!(generation_roman("generation-x"), "X");
        assert_eq!(generation_roman(""), "");
    }

    #[test]
    fn test_decode_pokemon_types_in_slot_order() {
        let value = json!({
            "id": 6,
            "name": "charizard",
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "" } },
                { "slot": 1, "type": { "name": "fire", "url": "" } }
            ],
            "abilities": [
                { "ability": { "name": "blaze", "url": "" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "solar-power", "url": "" }, "is_hidden": true, "slot": 3 }
            ],
            "sprites": { "front_default": "https://img/6.png", "back_default": null }
        });

        let pokemon: Pokemon = decode(&value).unwrap();

        assert_eq!(pokemon.type_names(), vec!["fire", "flying"]);
        assert_eq!(pokemon.ability_names(), vec!["blaze", "solar-power"]);
        assert_eq!(pokemon.sprites.best(), Some("https://img/6.png"));
    }

    #[test]
    fn test_sprite_falls_back_to_artwork() {
        let pokemon: Pokemon = decode(&json!({
            "id": 1008,
            "name": "miraidon",
            "sprites": {
                "front_default": null,
                "other": { "official-artwork": { "front_default": "https://img/art/1008.png" } }
            }
        }))
        .unwrap();

        assert_eq!(pokemon.sprites.best(), Some("https://img/art/1008.png"));
        assert!(pokemon.species.is_none());
    }

    #[test]
    fn test_species_default_variety() {
        let value = json!({
            "id": 641,
            "name": "tornadus",
            "varieties": [
                { "is_default": false, "pokemon": { "name": "tornadus-therian", "url": "" } },
                { "is_default": true, "pokemon": { "name": "tornadus-incarnate", "url": "" } }
            ],
            "evolution_chain": { "url": "https://pokeapi.co/api/v2/evolution-chain/330/" },
            "generation": { "name": "generation-v", "url": "" }
        });

        let species: Species = decode(&value).unwrap();

        assert_eq!(species.default_variety(), Some("tornadus-incarnate"));
        assert!(species.names.is_empty());
    }

    #[test]
    fn test_type_without_relations() {
        let value = json!({ "id": 10001, "name": "unknown" });
        let resource: TypeResource = decode(&value).unwrap();
        assert!(resource.damage_relations.is_none());
    }

    #[test]
    fn test_evolution_chain_nested_links() {
        let value = json!({
            "id": 1,
            "chain": {
                "species": { "name": "bulbasaur", "url": "" },
                "evolution_details": [],
                "evolves_to": [{
                    "species": { "name": "ivysaur", "url": "" },
                    "evolution_details": [{
                        "trigger": { "name": "level-up", "url": "" },
                        "min_level": 16,
                        "item": null,
                        "time_of_day": ""
                    }],
                    "evolves_to": []
                }]
            }
        });

        let chain: EvolutionChain = decode(&value).unwrap();
        let root: &ChainLink = chain.chain.as_ref().unwrap();

        assert_eq!(root.species.name, "bulbasaur");
        assert_eq!(root.evolves_to.len(), 1);
        let detail = &root.evolves_to[0].evolution_details[0];
        assert_eq!(detail.min_level, Some(16));
        assert_eq!(detail.item, None);
        assert_eq!(detail.time_of_day.as_deref(), Some(""));
    }

    #[test]
    fn test_pick_name_falls_back() {
        let species: Species = decode(&json!({
            "id": 4,
            "name": "charmander",
            "names": [
                { "name": "Charmander", "language": { "name": "en", "url": "" } },
                { "name": "ヒトカゲ", "language": { "name": "ja", "url": "" } }
            ]
        }))
        .unwrap();

        assert_eq!(pick_name(&species.names, "ja", &species.name), "ヒトカゲ");
        assert_eq!(pick_name(&species.names, "es", &species.name), "charmander");
    }

    #[test]
    fn test_pick_flavor_collapses_whitespace() {
        let species: Species = decode(&json!({
            "id": 25,
            "name": "pikachu",
            "flavor_text_entries": [
                { "flavor_text": "When several of\nthese POKéMON\u{c}gather, their\nelectricity", "language": { "name": "en", "url": "" } }
            ]
        }))
        .unwrap();

        assert_eq!(
            pick_flavor(&species.flavor_text_entries, "en"),
            "When several of these Pokémon gather, their electricity"
        );
        assert_eq!(pick_flavor(&species.flavor_text_entries, "es"), "");
    }

    #[test]
    fn test_pick_effect_trims() {
        let ability: crate::Ability = decode(&json!({
            "id": 65,
            "name": "overgrow",
            "flavor_text_entries": [
                { "flavor_text": "  Potencia los ataques\nde tipo Planta. ", "language": { "name": "es", "url": "" } }
            ]
        }))
        .unwrap();

        assert_eq!(
            pick_effect(&ability.flavor_text_entries, "es"),
            "Potencia los ataques de tipo Planta."
        );
    }
}
