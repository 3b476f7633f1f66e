//! Binary crate for the light weather proxy.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading configuration
//! - Serving the HTTP routes
//! - Mapping failures onto error documents

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod error;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_server=info,weather_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting weather server");

    let cmd = cli::Cli::parse();
    cmd.run().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
