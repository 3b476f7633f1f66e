use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use weather_core::{CaiyunResponse, LightWeatherResponse, WeatherError, WeatherProvider, to_light};

use crate::error::ApiError;

/// Shared request state. `provider` is `None` while no Caiyun token is configured.
#[derive(Clone, Default)]
pub struct AppState {
    provider: Option<Arc<dyn WeatherProvider>>,
}

impl AppState {
    pub fn new(provider: Option<Arc<dyn WeatherProvider>>) -> Self {
        Self { provider }
    }
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    geopos: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/api/weather", get(get_weather))
        .route("/api/weather/raw", get(get_raw_weather))
        .with_state(state)
}

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello, world" }))
}

/// GET /api/weather?geopos=lat,lon: the light weather document.
async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<LightWeatherResponse>, ApiError> {
    let full = fetch_full(&state, query).await?;
    let light = to_light(Some(&full)).ok_or(WeatherError::Conversion)?;

    Ok(Json(light))
}

/// GET /api/weather/raw?geopos=lat,lon: the upstream regions, untransformed.
async fn get_raw_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Value>, ApiError> {
    let full = fetch_full(&state, query).await?;
    let result = full.result;

    Ok(Json(json!({
        "realtime": result.realtime,
        "alert": result.alert,
        "hourly": result.hourly,
        "daily": result.daily,
    })))
}

async fn fetch_full(state: &AppState, query: WeatherQuery) -> Result<CaiyunResponse, ApiError> {
    let geopos = query
        .geopos
        .filter(|g| !g.trim().is_empty())
        .ok_or(ApiError::MissingParameter("geopos"))?;

    let provider = state.provider.as_ref().ok_or(WeatherError::MissingToken)?;

    tracing::info!("Getting weather for geopos: {}", geopos);

    Ok(provider.fetch(geopos.trim()).await?)
}
