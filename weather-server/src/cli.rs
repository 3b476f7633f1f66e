use anyhow::Context;
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use weather_core::{Config, WeatherError, WeatherProvider, provider_from_config};

use crate::routes::{AppState, router};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Light weather proxy for the Caiyun API")]
pub struct Cli {
    /// Read configuration from this TOML file instead of the platform config dir.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. "127.0.0.1:8080".
    #[arg(long)]
    pub bind: Option<String>,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = Config::load_from(path)?;
                config.apply_env(|key| std::env::var(key).ok());
                config
            }
            None => Config::from_env()?,
        };

        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }

        Ok(config)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;

        let provider: Option<Arc<dyn WeatherProvider>> = match provider_from_config(&config) {
            Ok(provider) => Some(Arc::from(provider)),
            Err(WeatherError::MissingToken) => {
                tracing::warn!("CAIYUN_WEATHER_TOKEN not set; weather requests will fail");
                None
            }
            Err(err) => return Err(err).context("Failed to build Caiyun client"),
        };

        let listener = TcpListener::bind(&config.server.bind)
            .await
            .with_context(|| format!("Failed to bind {}", config.server.bind))?;

        tracing::info!("Listening on {}", config.server.bind);

        axum::serve(listener, router(AppState::new(provider)))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bind_flag_overrides_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind = \"0.0.0.0:9999\"").unwrap();

        let cli = Cli::parse_from([
            "weather-server",
            "--config",
            file.path().to_str().unwrap(),
            "--bind",
            "127.0.0.1:3000",
        ]);
        let config = cli.load_config().unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["weather-server", "--config", "/nonexistent/weather.toml"]);
        assert!(cli.load_config().is_err());
    }
}
