//! Lookup tables used to derive human-readable fields from raw readings.

use crate::upstream::AirQuality;

/// Beaufort-style ladder in m/s. A speed below the bound belongs to that band.
const WIND_LEVELS: &[(f64, &str)] = &[
    (0.3, "无风"),
    (1.6, "软风"),
    (3.4, "轻风"),
    (5.5, "微风"),
    (8.0, "和风"),
    (10.8, "清风"),
    (13.9, "强风"),
    (17.2, "疾风"),
];
const WIND_LEVEL_MAX: &str = "大风";

/// China AQI bands, upper bound inclusive.
const AQI_LEVELS: &[(i32, &str)] = &[
    (50, "优"),
    (100, "良"),
    (150, "轻度污染"),
    (200, "中度污染"),
    (300, "重度污染"),
];
const AQI_LEVEL_MAX: &str = "严重污染";

const SKYCON_TEXT: &[(&str, &str)] = &[
    ("CLEAR_DAY", "晴天"),
    ("CLEAR_NIGHT", "晴夜"),
    ("PARTLY_CLOUDY_DAY", "多云"),
    ("PARTLY_CLOUDY_NIGHT", "多云"),
    ("CLOUDY", "阴天"),
    ("LIGHT_RAIN", "小雨"),
    ("MODERATE_RAIN", "中雨"),
    ("HEAVY_RAIN", "大雨"),
    ("STORM_RAIN", "暴雨"),
    ("WIND", "大风"),
];

pub const DEFAULT_ALERT_LEVEL: &str = "一般";

/// Kilometres.
pub const NEARBY_PRECIPITATION_KM: f64 = 5.0;

pub fn wind_level(speed: f64) -> &'static str {
    WIND_LEVELS
        .iter()
        .find(|(bound, _)| speed < *bound)
        .map_or(WIND_LEVEL_MAX, |&(_, level)| level)
}

pub fn aqi_level(aqi: i32) -> &'static str {
    AQI_LEVELS
        .iter()
        .find(|(bound, _)| aqi <= *bound)
        .map_or(AQI_LEVEL_MAX, |&(_, level)| level)
}

/// Translate a skycon code; unknown codes are returned unchanged.
pub fn skycon_text(code: &str) -> &str {
    SKYCON_TEXT
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(code, |&(_, text)| text)
}

/// Extract the level from a title of the form `"台风蓝色预警[Ⅳ级/一般]"`.
pub fn alert_level(title: &str) -> &str {
    title
        .strip_suffix(']')
        .and_then(|head| head.rfind('[').map(|start| &head[start + 1..]))
        .unwrap_or(DEFAULT_ALERT_LEVEL)
}

/// Always "PM2.5"; the individual pollutant readings are not ranked.
pub fn primary_pollutant(_air_quality: &AirQuality) -> &'static str {
    "PM2.5"
}

pub fn is_nearby_precipitation(distance_km: f64) -> bool {
    distance_km < NEARBY_PRECIPITATION_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_cutoffs_fall_into_higher_band() {
        let cases = [
            (0.0, "无风"),
            (0.29, "无风"),
            (0.3, "软风"),
            (1.6, "轻风"),
            (3.4, "微风"),
            (5.5, "和风"),
            (8.0, "清风"),
            (10.8, "强风"),
            (13.9, "疾风"),
            (17.1, "疾风"),
            (17.2, "大风"),
            (40.0, "大风"),
        ];

        for (speed, expected) in cases {
            assert_eq!(wind_level(speed), expected, "speed {speed}");
        }
    }

    #[test]
    fn aqi_bands_are_inclusive() {
        assert_eq!(aqi_level(0), "优");
        assert_eq!(aqi_level(50), "优");
        assert_eq!(aqi_level(51), "良");
        assert_eq!(aqi_level(100), "良");
        assert_eq!(aqi_level(150), "轻度污染");
        assert_eq!(aqi_level(200), "中度污染");
        assert_eq!(aqi_level(300), "重度污染");
        assert_eq!(aqi_level(301), "严重污染");
    }

    #[test]
    fn skycon_translation_and_passthrough() {
        assert_eq!(skycon_text("CLEAR_DAY"), "晴天");
        assert_eq!(skycon_text("PARTLY_CLOUDY_NIGHT"), "多云");
        assert_eq!(skycon_text("WIND"), "大风");
        assert_eq!(skycon_text("FOO"), "FOO");
        assert_eq!(skycon_text(""), "");
    }

    #[test]
    fn alert_level_from_bracketed_suffix() {
        assert_eq!(alert_level("台风蓝色预警[Ⅳ级/一般]"), "Ⅳ级/一般");
        assert_eq!(alert_level("a[b]c[d]"), "d");
        assert_eq!(alert_level("大风黄色预警"), DEFAULT_ALERT_LEVEL);
        assert_eq!(alert_level("[Ⅲ级/较重] 暴雨"), DEFAULT_ALERT_LEVEL);
        assert_eq!(alert_level("no opening]"), DEFAULT_ALERT_LEVEL);
        assert_eq!(alert_level(""), DEFAULT_ALERT_LEVEL);
        assert_eq!(alert_level("empty[]"), "");
    }

    #[test]
    fn nearby_precipitation_is_strict() {
        assert!(is_nearby_precipitation(4.99));
        assert!(!is_nearby_precipitation(5.0));
        assert!(!is_nearby_precipitation(9999.0));
    }

    #[test]
    fn primary_pollutant_is_constant() {
        let aq = AirQuality { pm10: 400.0, ..Default::default() };
        assert_eq!(primary_pollutant(&aq), "PM2.5");
    }
}
