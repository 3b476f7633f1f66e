//! Mapping of request failures onto HTTP error documents.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use weather_core::WeatherError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Weather(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("{}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_is_a_client_error() {
        let err = ApiError::MissingParameter("geopos");

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "geopos parameter is required");
    }

    #[test]
    fn weather_errors_are_server_errors() {
        let err = ApiError::from(WeatherError::MissingToken);

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "CAIYUN_WEATHER_TOKEN not set");
    }
}
