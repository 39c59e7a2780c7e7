//! Print the 18×18 type chart, fetched live or from the built-in table.
//!
//! Usage:
//!   cargo run --example type_chart            # live catalog
//!   cargo run --example type_chart -- offline

use std::env;

use anyhow::Result;
use pokedex_client::pokedex_core::{Type, TypeChart};
use pokedex_client::{ClientConfig, PokedexClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pokedex_client=info".parse()?),
        )
        .init();

    let chart = if env::args().nth(1).as_deref() == Some("offline") {
        TypeChart::builtin()
    } else {
        PokedexClient::with_config(ClientConfig::from_env())?
            .full_type_chart()
            .await?
    };

    print!("{:>5}", "");
    for defender in Type::ALL {
        print!("{:>5}", &defender.api_name()[..3]);
    }
    println!();

    for attacker in Type::ALL {
        print!("{:>5}", &attacker.api_name()[..3]);
        for cell in chart.row(attacker) {
            print!("{:>5}", cell.cell());
        }
        println!();
    }

    Ok(())
}
