//! Core library for the light weather proxy.
//!
//! This crate defines:
//! - The Caiyun upstream response schema
//! - The light response model served to consumers, and the transformer between the two
//! - Lookup tables for derived fields (condition text, wind and AQI levels)
//! - The Caiyun HTTP client, configuration and errors
//!
//! It is used by `weather-server`, but the transformer performs no I/O and can be
//! reused anywhere a parsed Caiyun document is available.

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod transform;
pub mod upstream;

pub use config::{CaiyunConfig, Config, ServerConfig};
pub use error::WeatherError;
pub use model::LightWeatherResponse;
pub use provider::{WeatherProvider, caiyun::CaiyunProvider, provider_from_config};
pub use transform::to_light;
pub use upstream::CaiyunResponse;
