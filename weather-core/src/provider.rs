use crate::{Config, WeatherError, provider::caiyun::CaiyunProvider, upstream::CaiyunResponse};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod caiyun;

/// Source of full weather documents.
///
/// Implementations must only return documents whose status is `"ok"`;
/// provider-reported failures surface as [`WeatherError::UpstreamStatus`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// `geopos` is passed through as given, e.g. `"116.3176,39.9760"`.
    async fn fetch(&self, geopos: &str) -> Result<CaiyunResponse, WeatherError>;
}

/// Construct the Caiyun provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let provider = CaiyunProvider::from_config(config)?;
    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_token() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(matches!(err, WeatherError::MissingToken));
    }

    #[test]
    fn provider_from_config_works_when_token_set() {
        let mut cfg = Config::default();
        cfg.caiyun.token = Some("KEY".to_string());

        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }
}
