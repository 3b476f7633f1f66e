//! Caiyun v2.6 `weather` response schema.
//!
//! Hourly and daily data arrive as one array per metric rather than one
//! record per timestamp. The arrays are not guaranteed to share a length, so
//! consumers must bounds-check each series independently.
//!
//! Every struct defaults missing fields to zero values, matching how the
//! provider omits regions it has no data for.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaiyunResponse {
    pub status: String,
    #[serde(rename = "error", skip_serializing_if = "String::is_empty")]
    pub error_msg: String,
    pub api_version: String,
    pub api_status: String,
    pub lang: String,
    pub unit: String,
    pub tzshift: i64,
    pub timezone: String,
    pub server_time: i64,
    pub location: Vec<f64>,
    pub result: WeatherResult,
}

impl CaiyunResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherResult {
    pub alert: Alert,
    pub realtime: Realtime,
    pub hourly: Hourly,
    pub daily: Daily,
    pub primary: i64,
    pub forecast_keypoint: String,
}

// ---------------------------------------------------------------------------
// Shared value types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AqiValue {
    pub chn: f64,
    pub usa: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wind {
    pub speed: f64,
    pub direction: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeIndexValue {
    pub index: f64,
    pub desc: String,
}

/// Daily life index entries carry the index as a string, e.g. `"3"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyLifeIndexValue {
    pub date: String,
    pub index: String,
    pub desc: String,
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub status: String,
    pub content: Vec<AlertContent>,
    pub adcodes: Vec<Adcode>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertContent {
    pub province: String,
    pub city: String,
    pub county: String,
    pub adcode: String,
    #[serde(rename = "regionId")]
    pub region_id: String,
    pub title: String,
    pub code: String,
    pub description: String,
    pub status: String,
    pub pubtimestamp: i64,
    pub source: String,
    #[serde(rename = "alertId")]
    pub alert_id: String,
    pub location: String,
    pub request_status: String,
    pub latlon: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Adcode {
    pub adcode: i64,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Realtime
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Realtime {
    pub status: String,
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub humidity: f64,
    pub cloudrate: f64,
    pub skycon: String,
    pub visibility: f64,
    pub dswrf: f64,
    pub wind: Wind,
    pub pressure: f64,
    pub precipitation: RealtimePrecipitation,
    pub air_quality: AirQuality,
    pub life_index: HashMap<String, LifeIndexValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtimePrecipitation {
    pub local: LocalPrecipitation,
    pub nearest: NearestPrecipitation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalPrecipitation {
    pub status: String,
    pub datasource: String,
    pub intensity: f64,
}

/// Distance is in kilometres.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NearestPrecipitation {
    pub status: String,
    pub distance: f64,
    pub intensity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AirQuality {
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub so2: f64,
    pub no2: f64,
    pub co: f64,
    pub aqi: AqiValue,
    pub description: AirQualityDescription,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AirQualityDescription {
    pub chn: String,
    pub usa: String,
}

// ---------------------------------------------------------------------------
// Hourly
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyPoint<T> {
    pub datetime: String,
    pub value: T,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyPrecipitation {
    pub datetime: String,
    pub value: f64,
    pub probability: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyWind {
    pub datetime: String,
    pub speed: f64,
    pub direction: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hourly {
    pub status: String,
    pub description: String,
    pub precipitation: Vec<HourlyPrecipitation>,
    pub temperature: Vec<HourlyPoint<f64>>,
    pub apparent_temperature: Vec<HourlyPoint<f64>>,
    pub wind: Vec<HourlyWind>,
    pub humidity: Vec<HourlyPoint<f64>>,
    pub cloudrate: Vec<HourlyPoint<f64>>,
    pub pressure: Vec<HourlyPoint<f64>>,
    pub visibility: Vec<HourlyPoint<f64>>,
    pub dswrf: Vec<HourlyPoint<f64>>,
    pub skycon: Vec<HourlyPoint<String>>,
    pub air_quality: HourlyAirQuality,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyAirQuality {
    pub aqi: Vec<HourlyPoint<AqiValue>>,
    pub pm25: Vec<HourlyPoint<f64>>,
}

// ---------------------------------------------------------------------------
// Daily
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyRange {
    pub date: String,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyPrecipitation {
    pub date: String,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub probability: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyWind {
    pub date: String,
    pub max: Wind,
    pub min: Wind,
    pub avg: Wind,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailySkycon {
    pub date: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AstroTime {
    pub time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyAstro {
    pub date: String,
    pub sunrise: AstroTime,
    pub sunset: AstroTime,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyAqi {
    pub date: String,
    pub max: AqiValue,
    pub avg: AqiValue,
    pub min: AqiValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyAirQuality {
    pub aqi: Vec<DailyAqi>,
    pub pm25: Vec<DailyRange>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Daily {
    pub status: String,
    pub astro: Vec<DailyAstro>,
    #[serde(rename = "precipitation_08h_20h")]
    pub precipitation_day: Vec<DailyPrecipitation>,
    #[serde(rename = "precipitation_20h_32h")]
    pub precipitation_night: Vec<DailyPrecipitation>,
    pub precipitation: Vec<DailyPrecipitation>,
    pub temperature: Vec<DailyRange>,
    #[serde(rename = "temperature_08h_20h")]
    pub temperature_day: Vec<DailyRange>,
    #[serde(rename = "temperature_20h_32h")]
    pub temperature_night: Vec<DailyRange>,
    pub wind: Vec<DailyWind>,
    #[serde(rename = "wind_08h_20h")]
    pub wind_day: Vec<DailyWind>,
    #[serde(rename = "wind_20h_32h")]
    pub wind_night: Vec<DailyWind>,
    pub humidity: Vec<DailyRange>,
    pub cloudrate: Vec<DailyRange>,
    pub pressure: Vec<DailyRange>,
    pub visibility: Vec<DailyRange>,
    pub dswrf: Vec<DailyRange>,
    pub air_quality: DailyAirQuality,
    pub skycon: Vec<DailySkycon>,
    #[serde(rename = "skycon_08h_20h")]
    pub skycon_day: Vec<DailySkycon>,
    #[serde(rename = "skycon_20h_32h")]
    pub skycon_night: Vec<DailySkycon>,
    pub life_index: HashMap<String, Vec<DailyLifeIndexValue>>,
}
