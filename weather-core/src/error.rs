//! Errors raised while obtaining a weather document from Caiyun.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("CAIYUN_WEATHER_TOKEN not set")]
    MissingToken,

    /// The wrapped error carries no URL; the request path contains the token.
    #[error("Failed to fetch weather data: {0}")]
    Transport(reqwest::Error),

    #[error("Caiyun API request failed with status {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Failed to parse weather data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Caiyun API returned status: {status}; msg={message}")]
    UpstreamStatus { status: String, message: String },

    #[error("Failed to convert weather data")]
    Conversion,
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}
