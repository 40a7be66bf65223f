use serde::{Deserialize, Serialize};

use crate::wind::WindDirection;

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================

/// Raw `/weather` payload. Fields are optional so a missing one can be
/// reported by name during normalization.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentWeatherPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub sys: Option<SysPayload>,
    pub main: Option<MainPayload>,
    pub visibility: Option<f64>,
    pub wind: Option<WindPayload>,
    #[serde(default)]
    pub weather: Vec<ConditionPayload>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SysPayload {
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MainPayload {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindPayload {
    pub speed: Option<f64>,
    pub deg: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConditionPayload {
    pub main: Option<String>,
}

// ============================================================================
// Normalized Models
// ============================================================================

/// Display-ready current weather for one city.
///
/// Only the normalizer builds these; the serialized field names are the ones
/// the browser client reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct WeatherReport {
    pub id: i64,
    pub city: String,
    pub country: String,
    #[serde(rename = "temp")]
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub visibility: f64,
    pub humidity: u32,
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
    #[serde(rename = "icon")]
    pub weather_icon: String,
}

// ============================================================================
// HTTP Request/Response Models
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// A saved city as the browser posts it back for rendering. Absent and
/// `null` fields both render as blanks.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CityCard {
    pub id: Option<i64>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<f64>,
    pub visibility: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderedCities {
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
