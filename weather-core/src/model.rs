//! Light response model served to downstream consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Simplified weather document served to downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightWeatherResponse {
    pub location: LocationInfo,
    pub alerts: Vec<WeatherAlert>,
    pub current: CurrentWeather,
    pub hourly: Vec<HourlyWeather>,
    pub daily: Vec<DailyWeather>,
    pub summary: WeatherSummary,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationInfo {
    pub coordinates: Vec<f64>,
    pub region: String,
    pub city: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub title: String,
    /// e.g. "Ⅳ级/一般"
    pub level: String,
    pub description: String,
    pub location: String,
    pub published_at: DateTime<Utc>,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub apparent_temperature: f64,
    /// Raw skycon code.
    pub condition: String,
    pub condition_text: String,
    pub humidity: f64,
    pub wind: WindInfo,
    pub pressure: f64,
    pub visibility: f64,
    pub precipitation: PrecipitationInfo,
    pub air_quality: AirQualityInfo,
    /// Life index name to description.
    pub life_indices: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyWeather {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub condition: String,
    pub precipitation_mm: f64,
    pub precipitation_probability: i32,
    pub wind_speed: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWeather {
    pub date: DateTime<Utc>,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub condition: String,
    pub condition_day: String,
    pub condition_night: String,
    pub precipitation_mm: f64,
    pub precipitation_probability: i32,
    pub wind: WindInfo,
    pub sunrise: String,
    pub sunset: String,
    pub air_quality: AirQualityInfo,
    pub life_indices: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindInfo {
    pub speed: f64,
    pub direction: f64,
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrecipitationInfo {
    pub intensity: f64,
    pub status: String,
    /// Precipitation detected within 5 km.
    pub nearby: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirQualityInfo {
    pub aqi: i32,
    pub level: String,
    pub pm25: i32,
    pub primary_pollutant: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub current: String,
    pub hourly: String,
    pub forecast: String,
}
