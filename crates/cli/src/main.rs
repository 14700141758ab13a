mod app;
mod cli;

use anyhow::Context;
use clap::Parser;

use storefront_infra::CartConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if cli.json_logs {
        storefront_observability::init();
    } else {
        storefront_observability::init_pretty();
    }

    let config = CartConfig::from_env().context("invalid storefront configuration")?;
    let mut cart = app::build_cart(&config).context("failed to set up cart")?;

    app::execute(&mut cart, cli.command).await;

    let view = app::CartView::of(&cart);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
