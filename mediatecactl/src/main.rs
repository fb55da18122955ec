//! Interactive admin console for the Mediateca catalog.
//!
//! A landing menu links to the five entity screens; each screen is a thin
//! presentation binding over the generic [`mediateca_client::EntityController`].

use anyhow::Result;
use clap::Parser;
use dialoguer::Select;
use mediateca_client::{ApiClient, Config};

mod screens;

#[derive(Debug, Parser)]
#[command(
    name = "mediatecactl",
    about = "Interactive admin console for the Mediateca media catalog",
    version
)]
struct Cli {
    /// Backend base URL; overrides the config file and environment
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load();
    let server_url = cli.server_url.unwrap_or(config.server_url);
    let client = ApiClient::new(server_url);

    let items = ["Genres", "Media", "Types", "Producers", "Directors", "Quit"];
    loop {
        let choice = Select::new()
            .with_prompt("Mediateca admin (choose a screen)")
            .items(&items)
            .default(0)
            .interact()?;
        match choice {
            0 => screens::genres(&client).await?,
            1 => screens::media(&client).await?,
            2 => screens::types(&client).await?,
            3 => screens::producers(&client).await?,
            4 => screens::directors(&client).await?,
            _ => break,
        }
    }
    Ok(())
}
