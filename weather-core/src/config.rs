use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

pub const TOKEN_ENV: &str = "CAIYUN_WEATHER_TOKEN";
pub const API_BASE_ENV: &str = "CAIYUN_API_BASE";
pub const BIND_ENV: &str = "WEATHER_BIND_ADDR";

/// Settings for the Caiyun upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaiyunConfig {
    /// Access token; requests fail with a configuration error while unset.
    pub token: Option<String>,
    pub api_base: String,
    pub api_version: String,
    pub daily_steps: u32,
    pub hourly_steps: u32,
    pub timeout_secs: u64,
}

impl Default for CaiyunConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: "https://api.caiyunapp.com".to_string(),
            api_version: "v2.6".to_string(),
            daily_steps: 1,
            hourly_steps: 24,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: "0.0.0.0:8080".to_string() }
    }
}

/// Top-level configuration.
///
/// Example TOML:
/// [caiyun]
/// token = "..."
///
/// [server]
/// bind = "127.0.0.1:8080"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub caiyun: CaiyunConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load config from the platform config dir, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// File config (when present) overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::load()?;
        cfg.apply_env(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "lightweather", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay values from an environment lookup. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = get(TOKEN_ENV) {
            self.caiyun.token = Some(token);
        }
        if let Some(base) = get(API_BASE_ENV) {
            self.caiyun.api_base = base;
        }
        if let Some(bind) = get(BIND_ENV) {
            self.server.bind = bind;
        }
    }

    /// Returns the Caiyun token, if one is configured and non-empty.
    pub fn token(&self) -> Option<&str> {
        self.caiyun.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}
