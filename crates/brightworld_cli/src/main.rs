mod app;
mod cli;
mod config;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use brightworld_client::ReqwestArticlesApi;
use brightworld_logging::LogDestination;
use clap::Parser;

use crate::cli::Cli;
use crate::config::BASE_URL_ENV;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let destination = if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    brightworld_logging::initialize(destination, cli.log_level);

    let settings = config::load_settings(
        cli.config.as_deref(),
        std::env::var(BASE_URL_ENV).ok(),
        cli.base_url,
    )
    .context("invalid client configuration")?;
    let api = ReqwestArticlesApi::new(settings).context("failed to build HTTP client")?;

    let output = app::run(Arc::new(api), cli.command).await?;
    print!("{output}");
    Ok(())
}
