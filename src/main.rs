use clap::Parser;

use carteira::api::ApiClient;
use carteira::cli::Cli;
use carteira::config::ClientConfig;
use carteira::dispatcher::{dispatch, Ctx};
use carteira::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = ClientConfig::load(cli.api_url.as_deref())?;
    let ctx = Ctx {
        client: ApiClient::new(&config)?,
        config,
        json: cli.json,
    };

    dispatch(&ctx, cli.command).await
}
