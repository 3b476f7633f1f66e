use async_trait::async_trait;
use reqwest::Client;
use std::{fmt, time::Duration};

use crate::{
    Config, WeatherError,
    config::CaiyunConfig,
    upstream::CaiyunResponse,
};

use super::WeatherProvider;

const USER_AGENT: &str = concat!("lightweather/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct CaiyunProvider {
    token: String,
    settings: CaiyunConfig,
    http: Client,
}

impl fmt::Debug for CaiyunProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaiyunProvider")
            .field("api_base", &self.settings.api_base)
            .field("api_version", &self.settings.api_version)
            .field("token", &"***")
            .finish_non_exhaustive()
    }
}

impl CaiyunProvider {
    pub fn new(token: String, settings: CaiyunConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { token, settings, http })
    }

    /// Fails with [`WeatherError::MissingToken`] when no token is configured.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let token = config.token().ok_or(WeatherError::MissingToken)?;
        Self::new(token.to_owned(), config.caiyun.clone())
    }

    fn endpoint(&self, token: &str, geopos: &str) -> String {
        format!(
            "{}/{}/{}/{}/weather",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.api_version,
            token,
            geopos
        )
    }
}

#[async_trait]
impl WeatherProvider for CaiyunProvider {
    async fn fetch(&self, geopos: &str) -> Result<CaiyunResponse, WeatherError> {
        tracing::info!("Requesting weather data from Caiyun API: {}", self.endpoint("***", geopos));

        let res = self
            .http
            .get(self.endpoint(&self.token, geopos))
            .query(&[
                ("alert", "true".to_string()),
                ("dailysteps", self.settings.daily_steps.to_string()),
                ("hourlysteps", self.settings.hourly_steps.to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Http { status, body: truncate_body(&body) });
        }

        let parsed: CaiyunResponse = serde_json::from_str(&body)?;

        if !parsed.is_ok() {
            return Err(WeatherError::UpstreamStatus {
                status: parsed.status,
                message: parsed.error_msg,
            });
        }

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FIXTURE: &str = include_str!("../../testdata/caiyun_weather.json");
    const GEOPOS: &str = "116.4074,39.9042";

    fn provider_for(server: &MockServer) -> CaiyunProvider {
        let settings = CaiyunConfig { api_base: server.uri(), ..Default::default() };
        CaiyunProvider::new("test-token".into(), settings).unwrap()
    }

    #[test]
    fn endpoint_embeds_token_and_geopos() {
        let settings = CaiyunConfig { api_base: "https://example.test/".into(), ..Default::default() };
        let provider = CaiyunProvider::new("tok".into(), settings).unwrap();

        assert_eq!(
            provider.endpoint("tok", GEOPOS),
            "https://example.test/v2.6/tok/116.4074,39.9042/weather"
        );
    }

    #[test]
    fn from_config_requires_token() {
        let err = CaiyunProvider::from_config(&Config::default()).unwrap_err();
        assert!(matches!(err, WeatherError::MissingToken));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "预".repeat(300);
        let cut = truncate_body(&long);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }

    #[tokio::test]
    async fn fetch_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/v2.6/test-token/{GEOPOS}/weather")))
            .and(query_param("alert", "true"))
            .and(query_param("hourlysteps", "24"))
            .and(query_param("dailysteps", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
            .mount(&server)
            .await;

        let resp = provider_for(&server).fetch(GEOPOS).await.unwrap();

        assert!(resp.is_ok());
        assert_eq!(resp.timezone, "Asia/Shanghai");
        assert_eq!(resp.result.hourly.temperature.len(), 3);
    }

    #[tokio::test]
    async fn fetch_reports_upstream_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "failed",
                "error": "'token is invalid'",
                "api_version": "v2.6"
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server).fetch(GEOPOS).await.unwrap_err();

        match err {
            WeatherError::UpstreamStatus { status, message } => {
                assert_eq!(status, "failed");
                assert_eq!(message, "'token is invalid'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_reports_malformed_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server).fetch(GEOPOS).await.unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)));
    }

    #[tokio::test]
    async fn fetch_reports_http_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let err = provider_for(&server).fetch(GEOPOS).await.unwrap_err();

        match err {
            WeatherError::Http { status, body } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_reports_transport_failure() {
        let settings = CaiyunConfig {
            api_base: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..Default::default()
        };
        let provider = CaiyunProvider::new("tok".into(), settings).unwrap();

        let err = provider.fetch(GEOPOS).await.unwrap_err();
        assert!(matches!(err, WeatherError::Transport(_)));
    }

    #[tokio::test]
    async fn transport_failure_does_not_expose_token() {
        let settings = CaiyunConfig {
            api_base: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..Default::default()
        };
        let provider = CaiyunProvider::new("SECRET-TOKEN-123".into(), settings).unwrap();

        let err = provider.fetch(GEOPOS).await.unwrap_err();
        let msg = err.to_string();

        assert!(msg.starts_with("Failed to fetch weather data"));
        assert!(!msg.contains("SECRET-TOKEN-123"), "token leaked: {msg}");
        assert!(!format!("{err:?}").contains("SECRET-TOKEN-123"));
    }

    #[test]
    fn debug_output_redacts_token() {
        let settings = CaiyunConfig {
            token: Some("SECRET-TOKEN-123".into()),
            ..Default::default()
        };
        let provider = CaiyunProvider::new("SECRET-TOKEN-123".into(), settings).unwrap();

        let debug = format!("{provider:?}");
        assert!(debug.contains("api.caiyunapp.com"));
        assert!(!debug.contains("SECRET-TOKEN-123"));
    }
}
