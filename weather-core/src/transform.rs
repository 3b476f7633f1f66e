//! Projection of a full Caiyun response onto [`LightWeatherResponse`].
//!
//! The conversion is total for any response whose status is `"ok"`: series
//! that are shorter than the temperature series yield zero values, and
//! timestamps that fail to parse become the Unix epoch.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::classify::{
    alert_level, aqi_level, is_nearby_precipitation, primary_pollutant, skycon_text, wind_level,
};
use crate::model::{
    AirQualityInfo, CurrentWeather, DailyWeather, HourlyWeather, LightWeatherResponse,
    LocationInfo, PrecipitationInfo, WeatherAlert, WeatherSummary, WindInfo,
};
use crate::upstream::{
    AlertContent, CaiyunResponse, Daily, DailyLifeIndexValue, DailySkycon, Hourly, LifeIndexValue,
    Realtime,
};

pub const MAX_HOURS: usize = 24;
pub const MAX_DAYS: usize = 7;

/// Daily dates look like `2024-07-01T00:00+08:00`.
const DAILY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Convert a full response into the light shape.
///
/// Returns `None` when there is no response or its status is not `"ok"`.
pub fn to_light(full: Option<&CaiyunResponse>) -> Option<LightWeatherResponse> {
    let full = full.filter(|resp| resp.is_ok())?;
    let result = &full.result;

    let mut location = LocationInfo {
        coordinates: full.location.clone(),
        timezone: full.timezone.clone(),
        ..Default::default()
    };

    // The first alert names the administrative region.
    if let Some(first) = result.alert.content.first() {
        location.region = first.province.clone();
        location.city = first.city.clone();
    }

    Some(LightWeatherResponse {
        location,
        alerts: result.alert.content.iter().map(convert_alert).collect(),
        current: convert_current(&result.realtime),
        hourly: convert_hourly(&result.hourly),
        daily: convert_daily(&result.daily),
        summary: WeatherSummary {
            current: String::new(),
            hourly: result.hourly.description.clone(),
            forecast: result.forecast_keypoint.clone(),
        },
        last_updated: unix_to_utc(full.server_time),
    })
}

fn convert_alert(alert: &AlertContent) -> WeatherAlert {
    WeatherAlert {
        title: alert.title.clone(),
        level: alert_level(&alert.title).to_string(),
        description: alert.description.clone(),
        location: alert.location.clone(),
        published_at: unix_to_utc(alert.pubtimestamp),
        source: alert.source.clone(),
    }
}

fn convert_current(rt: &Realtime) -> CurrentWeather {
    let aqi = rt.air_quality.aqi.chn as i32;

    CurrentWeather {
        temperature: rt.temperature,
        apparent_temperature: rt.apparent_temperature,
        condition: rt.skycon.clone(),
        condition_text: skycon_text(&rt.skycon).to_string(),
        humidity: rt.humidity,
        wind: wind_info(rt.wind.speed, rt.wind.direction),
        pressure: rt.pressure,
        visibility: rt.visibility,
        precipitation: PrecipitationInfo {
            intensity: rt.precipitation.local.intensity,
            status: rt.precipitation.local.status.clone(),
            nearby: is_nearby_precipitation(rt.precipitation.nearest.distance),
        },
        air_quality: AirQualityInfo {
            aqi,
            level: aqi_level(aqi).to_string(),
            pm25: rt.air_quality.pm25 as i32,
            primary_pollutant: primary_pollutant(&rt.air_quality).to_string(),
        },
        life_indices: realtime_life_indices(&rt.life_index),
    }
}

fn convert_hourly(hourly: &Hourly) -> Vec<HourlyWeather> {
    hourly
        .temperature
        .iter()
        .take(MAX_HOURS)
        .enumerate()
        .map(|(i, temp)| {
            let (precipitation_mm, precipitation_probability) = hourly
                .precipitation
                .get(i)
                .map_or((0.0, 0), |p| (p.value, p.probability));

            HourlyWeather {
                time: parse_hourly_time(&temp.datetime),
                temperature: temp.value,
                apparent_temperature: hourly.apparent_temperature.get(i).map_or(0.0, |p| p.value),
                condition: hourly.skycon.get(i).map(|p| p.value.clone()).unwrap_or_default(),
                precipitation_mm,
                precipitation_probability,
                wind_speed: hourly.wind.get(i).map_or(0.0, |w| w.speed),
                humidity: hourly.humidity.get(i).map_or(0.0, |p| p.value),
            }
        })
        .collect()
}

fn convert_daily(daily: &Daily) -> Vec<DailyWeather> {
    daily
        .temperature
        .iter()
        .take(MAX_DAYS)
        .enumerate()
        .map(|(i, temp)| {
            let (precipitation_mm, precipitation_probability) = daily
                .precipitation
                .get(i)
                .map_or((0.0, 0), |p| (p.max, p.probability));

            let (sunrise, sunset) = daily
                .astro
                .get(i)
                .map(|a| (a.sunrise.time.clone(), a.sunset.time.clone()))
                .unwrap_or_default();

            let skycon_at = |series: &[DailySkycon]| {
                series.get(i).map(|s| s.value.clone()).unwrap_or_default()
            };

            let air_quality = daily
                .air_quality
                .aqi
                .get(i)
                .map(|a| {
                    let aqi = a.avg.chn as i32;
                    AirQualityInfo {
                        aqi,
                        level: aqi_level(aqi).to_string(),
                        ..Default::default()
                    }
                })
                .unwrap_or_default();

            DailyWeather {
                date: parse_daily_date(&temp.date),
                temperature_min: temp.min,
                temperature_max: temp.max,
                condition: skycon_at(&daily.skycon),
                condition_day: skycon_at(&daily.skycon_day),
                condition_night: skycon_at(&daily.skycon_night),
                precipitation_mm,
                precipitation_probability,
                wind: daily
                    .wind
                    .get(i)
                    .map(|w| wind_info(w.max.speed, w.max.direction))
                    .unwrap_or_default(),
                sunrise,
                sunset,
                air_quality,
                life_indices: daily_life_indices(&daily.life_index, i),
            }
        })
        .collect()
}

fn wind_info(speed: f64, direction: f64) -> WindInfo {
    WindInfo { speed, direction, level: wind_level(speed).to_string() }
}

fn realtime_life_indices(indices: &HashMap<String, LifeIndexValue>) -> HashMap<String, String> {
    indices.iter().map(|(name, value)| (name.clone(), value.desc.clone())).collect()
}

fn daily_life_indices(
    indices: &HashMap<String, Vec<DailyLifeIndexValue>>,
    day: usize,
) -> HashMap<String, String> {
    indices
        .iter()
        .filter_map(|(name, values)| values.get(day).map(|v| (name.clone(), v.desc.clone())))
        .collect()
}

/// RFC 3339, or Caiyun's minute-precision variant of it.
fn parse_hourly_time(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, DAILY_DATE_FORMAT))
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn parse_daily_date(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(raw, DAILY_DATE_FORMAT)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn unix_to_utc(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or_default()
}
