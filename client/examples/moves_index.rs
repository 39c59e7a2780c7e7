//! Build the move index and write it as JSON.
//!
//! Usage:
//!   cargo run --example moves_index -- moves.json
//!
//! Progress is logged at info level; set POKEDEX_CACHE_DIR to make reruns
//! cheap.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use pokedex_client::{ClientConfig, PokedexClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pokedex_client=info".parse()?),
        )
        .init();

    let out = env::args().nth(1).unwrap_or_else(|| "moves.json".to_string());
    let client = PokedexClient::with_config(ClientConfig::from_env())?;

    let rows = client.moves_index().await?;
    let json = serde_json::to_string_pretty(&rows)?;
    fs::write(&out, json).with_context(|| format!("Failed to write {out}"))?;

    println!("Wrote {} moves to {}", rows.len(), out);
    Ok(())
}
