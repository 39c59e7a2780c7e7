//! Print a pokemon's page: names, matchups, abilities and evolution chain.
//!
//! Usage:
//!   cargo run --example profile -- eevee

use std::env;

use anyhow::Result;
use pokedex_client::pokedex_core::{EvolutionNode, Multiplier};
use pokedex_client::{ClientConfig, EvolutionView, PokedexClient, PokemonMatchups};

fn print_buckets(title: &str, matchups: &pokedex_client::pokedex_core::Matchups) {
    println!("{title}");
    for (multiplier, types) in matchups.buckets().iter().rev() {
        if *multiplier == Multiplier::Neutral || types.is_empty() {
            continue;
        }
        let names: Vec<&str> = types.iter().map(|t| t.spanish_name()).collect();
        println!("  {:<12} {}", multiplier.label(), names.join(", "));
    }
}

fn print_matchups(matchups: &PokemonMatchups) {
    print_buckets("Ataque:", &matchups.offense);
    print_buckets("Defensa:", &matchups.defense);
}

fn print_node(view: &EvolutionView, node: &EvolutionNode, depth: usize) {
    for edge in &node.edges {
        println!(
            "{}└─ {} [{}]",
            "   ".repeat(depth),
            view.display_name(&edge.target.species),
            view.describe_edge(edge)
        );
        print_node(view, &edge.target, depth + 1);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pokedex_client=info".parse()?),
        )
        .init();

    let query = env::args().nth(1).unwrap_or_else(|| "pikachu".to_string());
    let client = PokedexClient::with_config(ClientConfig::from_env())?;
    let profile = client.profile(&query).await?;

    println!(
        "#{} {} ({}) - Gen {}",
        profile.pokemon.id, profile.localized_name, profile.pokemon.name, profile.generation
    );
    let types: Vec<&str> = profile.matchups.types.iter().map(|t| t.spanish_name()).collect();
    println!("Tipos: {}", types.join(" / "));
    if !profile.flavor.is_empty() {
        println!("\n{}", profile.flavor);
    }

    println!();
    print_matchups(&profile.matchups);

    println!("\nHabilidades:");
    for ability in &profile.abilities {
        let hidden = if ability.is_hidden { " (oculta)" } else { "" };
        println!("  {}{}: {}", ability.localized_name, hidden, ability.effect);
    }

    if let Some(root) = &profile.evolution.tree.root {
        println!("\nEvolución:");
        println!("{}", profile.evolution.display_name(&root.species));
        print_node(&profile.evolution, root, 0);
    }

    Ok(())
}
